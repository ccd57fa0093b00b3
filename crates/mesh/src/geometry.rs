use cgmath::InnerSpace;
use ordered_float::OrderedFloat;

pub type Vector3 = cgmath::Vector3<f32>;

/// A point with a total, hashable equality.
///
/// Two points map to the same key only if all three components compare equal, there is no
/// tolerance applied. Points that are merely close stay distinct.
pub type OrderedVec3 = cgmath::Vector3<OrderedFloat<f32>>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// Index of the height component within a `Vector3`.
///
/// Terrain is generated in a y-up frame: x and z span the ground plane and y is elevation.
pub const HEIGHT_AXIS: usize = 1;

#[inline]
pub fn ordered(p: &Vector3) -> OrderedVec3 {
    cgmath::Vector3 {
        x: OrderedFloat(p.x),
        y: OrderedFloat(p.y),
        z: OrderedFloat(p.z),
    }
}

/// A single triangle.
///
/// The order of the points encodes the winding; the front face is the one from which
/// `p0 -> p1 -> p2` appears counter-clockwise.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn points(&self) -> [Vector3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// The three edges of the triangle, following the winding:
    ///
    /// ```text
    ///          p2
    ///         /  \
    ///   [2]  /    \  [1]
    ///       /      \
    ///     p0 ------ p1
    ///          [0]
    /// ```
    pub fn edges(&self) -> [(Vector3, Vector3); 3] {
        [(self.p0, self.p1), (self.p1, self.p2), (self.p2, self.p0)]
    }

    /// Unit normal of the front face, or `None` for a degenerate triangle.
    pub fn normal(&self) -> Option<Vector3> {
        let u = self.p1 - self.p0;
        let v = self.p2 - self.p0;
        let n = u.cross(v);
        let len = n.magnitude();
        if len > 0.0 && len.is_finite() {
            Some(n / len)
        } else {
            None
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        let origin = Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        Self {
            p0: origin,
            p1: origin,
            p2: origin,
        }
    }
}
