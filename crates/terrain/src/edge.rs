use std::collections::HashMap;

use scape_mesh::{ordered, OrderedVec3, Vector3};

/// An undirected edge, hashed on the exact coordinates of its endpoints.
///
/// The endpoints are stored in a canonical order so `(p, q)` and `(q, p)` produce the same
/// key.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct EdgeKey {
    lo: OrderedVec3,
    hi: OrderedVec3,
}

fn key_order(a: &OrderedVec3, b: &OrderedVec3) -> std::cmp::Ordering {
    a.x.cmp(&b.x).then(a.y.cmp(&b.y)).then(a.z.cmp(&b.z))
}

impl EdgeKey {
    pub fn new(p: &Vector3, q: &Vector3) -> Self {
        let (p, q) = (ordered(p), ordered(q));
        if key_order(&p, &q).is_le() {
            Self { lo: p, hi: q }
        } else {
            Self { lo: q, hi: p }
        }
    }
}

/// Orders the endpoints of an edge the same way `EdgeKey` does.
///
/// Computing anything from the canonical orientation makes the result independent of which
/// neighbouring triangle reaches the edge first.
pub fn canonical(p: Vector3, q: Vector3) -> (Vector3, Vector3) {
    if key_order(&ordered(&p), &ordered(&q)).is_le() {
        (p, q)
    } else {
        (q, p)
    }
}

/// Midpoints computed during one subdivision round, keyed by undirected edge.
///
/// A registry is only meaningful for the round that filled it; the next round works on
/// new, smaller edges.
#[derive(Debug, Default)]
pub struct EdgeRegistry {
    midpoints: HashMap<EdgeKey, Vector3>,
}

impl EdgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(edges: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(edges),
        }
    }

    /// Returns the midpoint registered for edge `(p, q)` in either direction.
    pub fn get(&self, p: &Vector3, q: &Vector3) -> Option<Vector3> {
        self.midpoints.get(&EdgeKey::new(p, q)).copied()
    }

    /// Returns the midpoint of edge `(p, q)`, calling `compute` with the canonical
    /// orientation of the edge the first time the edge is seen.
    pub fn midpoint_or_insert_with<F>(&mut self, p: Vector3, q: Vector3, compute: F) -> Vector3
    where
        F: FnOnce(Vector3, Vector3) -> Vector3,
    {
        *self
            .midpoints
            .entry(EdgeKey::new(&p, &q))
            .or_insert_with(|| {
                let (a, b) = canonical(p, q);
                compute(a, b)
            })
    }

    /// Number of undirected edges seen.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}
