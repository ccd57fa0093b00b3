use crate::{
    error::{TerrainError, TerrainResult},
    validate::validate_roughness,
};

/// Parameters for a terrain generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    /// Number of subdivision rounds. Each round multiplies the triangle count by 4.
    pub iterations: u32,

    /// How strongly edge length drives the vertical displacement of a midpoint.
    pub roughness: f32,

    /// Seed for the random stream. `None` draws a seed from the OS.
    pub seed: Option<u64>,

    /// Upper bound on the number of triangles in the final mesh.
    pub max_triangles: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            iterations: 5,
            roughness: 0.18,
            seed: None,
            max_triangles: 10_000_000,
        }
    }
}

impl TerrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub const fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_max_triangles(mut self, max_triangles: usize) -> Self {
        self.max_triangles = max_triangles;
        self
    }

    /// Triangle count after all rounds, saturating at `usize::MAX`.
    pub fn expected_triangles(&self, initial: usize) -> usize {
        if initial == 0 {
            return 0;
        }
        4usize
            .checked_pow(self.iterations)
            .map_or(usize::MAX, |growth| initial.saturating_mul(growth))
    }

    pub fn validate(&self, initial: usize) -> TerrainResult<()> {
        validate_roughness(self.roughness)?;
        self.check_size(initial)
    }

    /// Rejects runs whose output would exceed `max_triangles`.
    pub fn check_size(&self, initial: usize) -> TerrainResult<()> {
        let projected = self.expected_triangles(initial);
        if projected > self.max_triangles {
            return Err(TerrainError::TooManyTriangles {
                initial,
                projected,
                max: self.max_triangles,
            });
        }
        Ok(())
    }
}
