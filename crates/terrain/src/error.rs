use thiserror::Error;

/// Reasons an input is rejected before any subdivision takes place.
#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("triangle {triangle} has a non-finite coordinate at vertex {vertex}")]
    NonFiniteCoordinate { triangle: usize, vertex: usize },

    #[error("roughness must be finite and non-negative, got {0}")]
    InvalidRoughness(f32),

    #[error("{coordinates} coordinates do not describe whole triangles (9 per triangle)")]
    MalformedTriangle { coordinates: usize },

    #[error("subdividing {initial} triangles would produce {projected}, more than the limit of {max}")]
    TooManyTriangles {
        initial: usize,
        projected: usize,
        max: usize,
    },
}

pub type TerrainResult<T> = std::result::Result<T, TerrainError>;
