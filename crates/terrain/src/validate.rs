use scape_mesh::{Triangle, Vector3};

use crate::error::{TerrainError, TerrainResult};

/// Rejects triangles with NaN or infinite coordinates.
pub fn validate_triangles(triangles: &[Triangle]) -> TerrainResult<()> {
    for (triangle, t) in triangles.iter().enumerate() {
        if t.is_finite() {
            continue;
        }
        let vertex = t
            .points()
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
            .unwrap_or_default();
        return Err(TerrainError::NonFiniteCoordinate { triangle, vertex });
    }
    Ok(())
}

/// Rejects negative, NaN and infinite roughness.
pub fn validate_roughness(roughness: f32) -> TerrainResult<()> {
    if !roughness.is_finite() || roughness < 0.0 {
        return Err(TerrainError::InvalidRoughness(roughness));
    }
    Ok(())
}

/// Groups a flat coordinate list, 9 floats per triangle, into triangles.
pub fn triangles_from_flat(coords: &[f32]) -> TerrainResult<Vec<Triangle>> {
    if coords.len() % 9 != 0 {
        return Err(TerrainError::MalformedTriangle {
            coordinates: coords.len(),
        });
    }
    let triangles = coords
        .chunks_exact(9)
        .map(|c| {
            Triangle::new(
                Vector3::new(c[0], c[1], c[2]),
                Vector3::new(c[3], c[4], c[5]),
                Vector3::new(c[6], c[7], c[8]),
            )
        })
        .collect::<Vec<_>>();
    validate_triangles(&triangles)?;
    Ok(triangles)
}
