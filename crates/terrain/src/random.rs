use rand::{rngs::StdRng, Rng, SeedableRng};

/// A stream of uniform samples in `[0, 1)`.
///
/// Subdivision draws all of its randomness through this trait so a run can be seeded,
/// replayed, or fed a scripted sequence.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f32;
}

/// Adapts any `rand` generator into a `UniformSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of uniforms, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    next: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, next: 0 }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

// Keeps ln(u1) well away from the singularity at zero.
const U1_MIN: f32 = 0.01;
const U1_SPAN: f32 = 0.98;

/// Draws one standard normal sample using the Box-Muller transform.
///
/// Consumes exactly two uniforms; the first is remapped into `[0.01, 0.99]`.
pub fn gaussian<S: UniformSource + ?Sized>(source: &mut S) -> f32 {
    let u1 = source.next_uniform() * U1_SPAN + U1_MIN;
    let u2 = source.next_uniform();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).sin()
}
