use cgmath::InnerSpace;
use scape_mesh::{Triangle, Vector3, HEIGHT_AXIS};

use crate::{
    edge::EdgeRegistry,
    error::TerrainResult,
    observer::{NoopObserver, RoundObserver},
    random::{gaussian, UniformSource},
    validate::{validate_roughness, validate_triangles},
};

/// Midpoint of `p1 -> p2`, raised or lowered by a random amount.
///
/// The offset is a standard normal sample scaled by `(|p2 - p1| * roughness)^1.5`, so long
/// edges and rough terrain move much further than short edges. Only the height component
/// is displaced; the other two components are the plain midpoint.
///
/// Always consumes two uniforms from `rng`, even when `roughness` is zero.
pub fn displaced_midpoint<S: UniformSource + ?Sized>(
    p1: Vector3,
    p2: Vector3,
    roughness: f32,
    rng: &mut S,
) -> Vector3 {
    let dist = (p2 - p1).magnitude();
    let offset = gaussian(rng) * (dist * roughness).powf(1.5);
    let mut midpoint = p1 + (p2 - p1) * 0.5;
    midpoint[HEIGHT_AXIS] += offset;
    midpoint
}

/// Performs a single subdivision round, splitting every triangle into 4.
///
/// Each triangle `(a, b, c)` with edge midpoints `m_ab`, `m_bc`, `m_ca` becomes
///
/// ```text
///               c
///              / \
///             / 2 \
///         m_ca-----m_bc
///           / \ 3 / \
///          / 0 \ / 1 \
///         a----m_ab---b
/// ```
///
/// emitted in the order `(a, m_ab, m_ca)`, `(b, m_bc, m_ab)`, `(c, m_ca, m_bc)`,
/// `(m_ab, m_bc, m_ca)`, all with the winding of the parent.
///
/// An edge shared by two triangles gets one midpoint, so the result has no cracks along
/// the seams of the input.
///
/// Fails without drawing from `rng` if `roughness` is negative or not finite, or if any
/// coordinate is NaN or infinite.
pub fn subdivide_once<S: UniformSource + ?Sized>(
    triangles: &[Triangle],
    roughness: f32,
    rng: &mut S,
) -> TerrainResult<Vec<Triangle>> {
    validate_roughness(roughness)?;
    validate_triangles(triangles)?;
    Ok(split_round(triangles, roughness, rng))
}

fn split_round<S: UniformSource + ?Sized>(
    triangles: &[Triangle],
    roughness: f32,
    rng: &mut S,
) -> Vec<Triangle> {
    // A closed mesh has 3/2 edges per triangle, an open one slightly more.
    let mut registry = EdgeRegistry::with_capacity(triangles.len() * 2);
    let mut out = Vec::with_capacity(triangles.len() * 4);

    for t in triangles {
        let [m_ab, m_bc, m_ca] = t.edges().map(|(p, q)| {
            registry.midpoint_or_insert_with(p, q, |p1, p2| {
                displaced_midpoint(p1, p2, roughness, rng)
            })
        });
        out.push(Triangle::new(t.p0, m_ab, m_ca));
        out.push(Triangle::new(t.p1, m_bc, m_ab));
        out.push(Triangle::new(t.p2, m_ca, m_bc));
        out.push(Triangle::new(m_ab, m_bc, m_ca));
    }

    log::debug!(
        "subdivided {} triangles into {} ({} unique edges)",
        triangles.len(),
        out.len(),
        registry.len()
    );
    out
}

/// Runs `iterations` rounds of displaced midpoint subdivision.
///
/// Zero iterations returns the input unchanged. The output has
/// `triangles.len() * 4^iterations` triangles. Input is checked as in [`subdivide_once`].
pub fn subdivide<S: UniformSource + ?Sized>(
    triangles: Vec<Triangle>,
    iterations: u32,
    roughness: f32,
    rng: &mut S,
) -> TerrainResult<Vec<Triangle>> {
    subdivide_with_observer(triangles, iterations, roughness, rng, &mut NoopObserver)
}

/// Like [`subdivide`], reporting the triangle list to `observer` before the first round
/// and after each round.
///
/// An empty list stays empty, so the rounds in between are skipped and the observer sees
/// only round 0 and the final round.
pub fn subdivide_with_observer<S, O>(
    triangles: Vec<Triangle>,
    iterations: u32,
    roughness: f32,
    rng: &mut S,
    observer: &mut O,
) -> TerrainResult<Vec<Triangle>>
where
    S: UniformSource + ?Sized,
    O: RoundObserver + ?Sized,
{
    validate_roughness(roughness)?;
    validate_triangles(&triangles)?;

    let mut current = triangles;
    observer.on_round(0, &current);
    if current.is_empty() {
        if iterations > 0 {
            observer.on_round(iterations, &current);
        }
        return Ok(current);
    }
    for round in 1..=iterations {
        current = split_round(&current, roughness, rng);
        observer.on_round(round, &current);
    }
    Ok(current)
}
