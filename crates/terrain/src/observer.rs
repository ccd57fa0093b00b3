use scape_mesh::Triangle;

/// Receives the triangle list between subdivision rounds.
///
/// `on_round` is called with round 0 (the input) before any subdivision, then once after
/// every round, so a run with `n` iterations reports rounds `0..=n`.
pub trait RoundObserver {
    fn on_round(&mut self, round: u32, triangles: &[Triangle]);
}

impl<F: FnMut(u32, &[Triangle])> RoundObserver for F {
    fn on_round(&mut self, round: u32, triangles: &[Triangle]) {
        self(round, triangles)
    }
}

/// Observer that ignores every round.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    fn on_round(&mut self, _round: u32, _triangles: &[Triangle]) {}
}
