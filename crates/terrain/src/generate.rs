use scape_mesh::{Triangle, TriangleMesh, Vector3, VertexIndex, HEIGHT_AXIS};

use crate::{
    config::TerrainConfig,
    error::TerrainResult,
    observer::RoundObserver,
    random::{RngSource, UniformSource},
    subdivide::subdivide_with_observer,
};

/// The coarse ground patch the terrain grows from when no input mesh is given.
///
/// Five points on the `y = 0` plane forming three triangles:
///
/// ```text
///   p4 ------ p2 ------ p5      z = 5.85
///    |      /    \      |
///    |    /        \    |
///    |  /            \  |
///   p1 ---------------- p3      z = -8
///  x = -8             x = 8
/// ```
pub fn seed_mesh() -> Vec<Triangle> {
    let p1 = Vector3::new(-8.0, 0.0, -8.0);
    let p2 = Vector3::new(0.0, 0.0, 5.85);
    let p3 = Vector3::new(8.0, 0.0, -8.0);
    let p4 = Vector3::new(-8.0, 0.0, 5.85);
    let p5 = Vector3::new(8.0, 0.0, 5.85);
    vec![
        Triangle::new(p1, p2, p3),
        Triangle::new(p4, p2, p1),
        Triangle::new(p5, p3, p2),
    ]
}

/// A finished terrain mesh.
#[derive(Debug, Clone)]
pub struct Terrain {
    pub mesh: VertexIndex,
    pub initial_triangles: usize,
    pub iterations: u32,
}

impl Terrain {
    /// Lowest and highest point of the mesh, `None` when empty.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        height_range(self.mesh.vertices())
    }
}

pub fn height_range(points: &[Vector3]) -> Option<(f32, f32)> {
    points.iter().map(|p| p[HEIGHT_AXIS]).fold(None, |acc, h| match acc {
        None => Some((h, h)),
        Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
    })
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} triangles, {} vertices after {} iterations",
            self.initial_triangles,
            self.mesh.triangle_count(),
            self.mesh.vertex_count(),
            self.iterations
        )?;
        if let Some((lo, hi)) = self.height_range() {
            write!(f, ", height {lo:.3}..{hi:.3}")?;
        }
        Ok(())
    }
}

/// Validates the input, subdivides it with the configured parameters, and indexes the
/// result.
///
/// The random stream is seeded from `config.seed`, or from the OS when no seed is set.
pub fn generate_terrain<O: RoundObserver + ?Sized>(
    triangles: Vec<Triangle>,
    config: &TerrainConfig,
    observer: &mut O,
) -> TerrainResult<Terrain> {
    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    generate_terrain_with(triangles, config, &mut rng, observer)
}

/// Like [`generate_terrain`], drawing from the given random stream and ignoring
/// `config.seed`.
pub fn generate_terrain_with<S, O>(
    triangles: Vec<Triangle>,
    config: &TerrainConfig,
    rng: &mut S,
    observer: &mut O,
) -> TerrainResult<Terrain>
where
    S: UniformSource + ?Sized,
    O: RoundObserver + ?Sized,
{
    config.check_size(triangles.len())?;

    let initial_triangles = triangles.len();
    log::debug!(
        "generating terrain from {} triangles: {} iterations, roughness {}",
        initial_triangles,
        config.iterations,
        config.roughness
    );
    let triangles =
        subdivide_with_observer(triangles, config.iterations, config.roughness, rng, observer)?;
    let terrain = Terrain {
        mesh: VertexIndex::from_triangles(triangles),
        initial_triangles,
        iterations: config.iterations,
    };
    log::info!("{}", terrain);
    Ok(terrain)
}
