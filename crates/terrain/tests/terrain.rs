use std::collections::HashMap;

use scape::{
    build_mesh, generate_terrain, generate_terrain_with, seed_mesh, subdivide, subdivide_once,
    EdgeKey, NoopObserver, RngSource, ScriptedSource, TerrainConfig, TerrainError, Triangle,
    TriangleMesh, Vector3,
};
use scape_test_data::{FLAT_SQUARE, FLAT_TRIANGLE, GROUND_PATCH, TETRAHEDRON};

/// Counts, per undirected edge, how many triangles use it.
fn edge_use(triangles: &[Triangle]) -> HashMap<EdgeKey, usize> {
    let mut uses = HashMap::new();
    for t in triangles {
        for (p, q) in t.edges() {
            *uses.entry(EdgeKey::new(&p, &q)).or_insert(0) += 1;
        }
    }
    uses
}

#[test]
fn zero_iterations_is_identity() {
    for roughness in [0.0, 0.18, 5.0] {
        let mut rng = RngSource::seeded(1);
        let out = subdivide(GROUND_PATCH.to_vec(), 0, roughness, &mut rng).unwrap();
        assert_eq!(out, GROUND_PATCH.to_vec());
    }
}

#[test]
fn empty_input_stays_empty() {
    let mut rng = RngSource::seeded(1);
    assert!(subdivide(Vec::new(), 4, 0.5, &mut rng).unwrap().is_empty());

    let config = TerrainConfig::new().with_iterations(u32::MAX).with_seed(1);
    let terrain = generate_terrain(Vec::new(), &config, &mut NoopObserver).unwrap();
    assert_eq!(terrain.mesh.triangle_count(), 0);
}

#[test]
fn triangle_count_grows_by_four() {
    for n in 0..5u32 {
        let mut rng = RngSource::seeded(u64::from(n));
        let out = subdivide(GROUND_PATCH.to_vec(), n, 0.18, &mut rng).unwrap();
        assert_eq!(out.len(), GROUND_PATCH.len() * 4usize.pow(n));
    }
}

#[test]
fn seams_stay_closed() {
    // In a closed surface every edge is used exactly twice. A midpoint computed twice with
    // different offsets would leave edges used only once.
    let mut rng = RngSource::seeded(11);
    let out = subdivide(TETRAHEDRON.to_vec(), 3, 0.6, &mut rng).unwrap();
    let uses = edge_use(&out);
    assert!(uses.values().all(|&n| n == 2));
    // V - E + F = 2 for a closed genus zero surface.
    let (points, _) = build_mesh(&out);
    assert_eq!(points.len() as i64 - uses.len() as i64 + out.len() as i64, 2);
}

#[test]
fn shared_edge_midpoint_is_identical_on_both_sides() {
    let mut rng = RngSource::seeded(5);
    let out = subdivide_once(&FLAT_SQUARE, 1.0, &mut rng).unwrap();

    // The diagonal is edge (p0, p1) of the first triangle and edge (p2, p0) of the
    // second, so m_ab of the first and m_ca of the second.
    let first = out[0].p1;
    let second = out[4].p2;
    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.y.to_bits(), second.y.to_bits());
    assert_eq!(first.z.to_bits(), second.z.to_bits());
    assert_ne!(first.y, 0.0);
}

#[test]
fn only_height_is_displaced() {
    let mut rng = RngSource::seeded(8);
    let out = subdivide_once(&[FLAT_TRIANGLE], 3.0, &mut rng).unwrap();
    let Triangle { p0: a, p1: b, p2: c } = FLAT_TRIANGLE;
    let center = out[3];
    for (m, (p, q)) in [center.p0, center.p1, center.p2]
        .into_iter()
        .zip([(a, b), (b, c), (c, a)])
    {
        assert_eq!(m.x, (p.x + q.x) / 2.0);
        assert_eq!(m.z, (p.z + q.z) / 2.0);
        assert_ne!(m.y, (p.y + q.y) / 2.0);
    }
}

#[test]
fn fixed_seed_is_reproducible() {
    let run = |seed| {
        let mut rng = RngSource::seeded(seed);
        subdivide(GROUND_PATCH.to_vec(), 4, 0.18, &mut rng).unwrap()
    };
    let a = run(99);
    let b = run(99);
    assert!(a
        .iter()
        .flat_map(Triangle::points)
        .zip(b.iter().flat_map(Triangle::points))
        .all(|(p, q)| p.x.to_bits() == q.x.to_bits()
            && p.y.to_bits() == q.y.to_bits()
            && p.z.to_bits() == q.z.to_bits()));
    assert_ne!(a, run(100));
}

#[test]
fn scripted_stream_is_reproducible() {
    let values = vec![0.9, 0.1, 0.3, 0.7, 0.55];
    let mut r1 = ScriptedSource::new(values.clone());
    let mut r2 = ScriptedSource::new(values);
    assert_eq!(
        subdivide(FLAT_SQUARE.to_vec(), 2, 0.4, &mut r1).unwrap(),
        subdivide(FLAT_SQUARE.to_vec(), 2, 0.4, &mut r2).unwrap()
    );
    assert_eq!(r1.drawn(), r2.drawn());
}

#[test]
fn zero_roughness_single_round() {
    let mut rng = RngSource::seeded(1234);
    let out = subdivide(vec![FLAT_TRIANGLE], 1, 0.0, &mut rng).unwrap();
    assert_eq!(out.len(), 4);

    let m_ab = Vector3::new(1.0, 0.0, 0.0);
    let m_bc = Vector3::new(1.5, 0.0, 1.0);
    let m_ca = Vector3::new(0.5, 0.0, 1.0);
    assert_eq!(out[3], Triangle::new(m_ab, m_bc, m_ca));

    let (points, indices) = build_mesh(&out);
    assert_eq!(points.len(), 6);
    assert_eq!(indices.len(), 12);
}

#[test]
fn mesh_reproduces_triangles() {
    let mut rng = RngSource::seeded(21);
    let out = subdivide(GROUND_PATCH.to_vec(), 3, 0.18, &mut rng).unwrap();
    let (points, indices) = build_mesh(&out);

    assert_eq!(indices.len(), 3 * out.len());
    assert!(indices.iter().all(|&i| (i as usize) < points.len()));
    let rebuilt: Vec<Triangle> = indices
        .chunks_exact(3)
        .map(|f| {
            Triangle::new(
                points[f[0] as usize],
                points[f[1] as usize],
                points[f[2] as usize],
            )
        })
        .collect();
    assert_eq!(rebuilt, out);

    // 5 corners, 7 edges, 3 faces subdivided 3 times: V = 5 + 7 * 7 + 3 * 21.
    assert_eq!(points.len(), 5 + 7 * 7 + 3 * 21);
}

#[test]
fn generate_from_seed_mesh() {
    assert_eq!(seed_mesh(), GROUND_PATCH.to_vec());

    let config = TerrainConfig::new().with_iterations(5).with_seed(2024);
    let terrain = generate_terrain(seed_mesh(), &config, &mut NoopObserver).unwrap();
    assert_eq!(terrain.mesh.triangle_count(), 3 * 1024);
    assert_eq!(terrain.initial_triangles, 3);

    let again = generate_terrain(seed_mesh(), &config, &mut NoopObserver).unwrap();
    assert_eq!(terrain.mesh.points, again.mesh.points);

    let (lo, hi) = terrain.height_range().unwrap();
    assert!(lo < 0.0 && hi > 0.0);
    assert!(terrain.to_string().contains("3072 triangles"));
}

#[test]
fn generate_reports_rounds() {
    let config = TerrainConfig::new().with_iterations(2).with_seed(1);
    let mut seen = Vec::new();
    generate_terrain(
        vec![FLAT_TRIANGLE],
        &config,
        &mut |round: u32, ts: &[Triangle]| seen.push((round, ts.len())),
    )
    .unwrap();
    assert_eq!(seen, vec![(0, 1), (1, 4), (2, 16)]);
}

#[test]
fn generate_rejects_bad_input() {
    let mut bad = FLAT_TRIANGLE;
    bad.p1.z = f32::NAN;
    let config = TerrainConfig::new().with_seed(1);
    assert_eq!(
        generate_terrain(vec![FLAT_TRIANGLE, bad], &config, &mut NoopObserver).unwrap_err(),
        TerrainError::NonFiniteCoordinate {
            triangle: 1,
            vertex: 1
        }
    );

    let config = TerrainConfig::new().with_roughness(-1.0);
    let mut rng = ScriptedSource::new(vec![0.5]);
    assert_eq!(
        generate_terrain_with(vec![FLAT_TRIANGLE], &config, &mut rng, &mut NoopObserver)
            .unwrap_err(),
        TerrainError::InvalidRoughness(-1.0)
    );
    assert_eq!(rng.drawn(), 0);
}

#[test]
fn subdivide_rejects_bad_input() {
    let mut rng = RngSource::seeded(1);
    assert_eq!(
        subdivide(vec![FLAT_TRIANGLE], 1, -1.0, &mut rng),
        Err(TerrainError::InvalidRoughness(-1.0))
    );
    assert!(matches!(
        subdivide(vec![FLAT_TRIANGLE], 1, f32::NAN, &mut rng),
        Err(TerrainError::InvalidRoughness(r)) if r.is_nan()
    ));

    let mut bad = FLAT_TRIANGLE;
    bad.p0.y = f32::INFINITY;
    assert_eq!(
        subdivide_once(&[bad], 0.18, &mut rng),
        Err(TerrainError::NonFiniteCoordinate {
            triangle: 0,
            vertex: 0
        })
    );
}
