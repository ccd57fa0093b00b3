use scape_mesh::{Triangle, Vector3};

const fn point(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3 { x, y, z }
}

const fn triangle(p0: Vector3, p1: Vector3, p2: Vector3) -> Triangle {
    Triangle { p0, p1, p2 }
}

/// A single flat triangle whose edge midpoints are exactly representable.
pub const FLAT_TRIANGLE: Triangle = triangle(
    point(0.0, 0.0, 0.0),
    point(2.0, 0.0, 0.0),
    point(1.0, 0.0, 2.0),
);

/// A unit square on the ground plane, split along the diagonal (0,0,0)-(1,0,1).
pub const FLAT_SQUARE: [Triangle; 2] = [
    triangle(point(0.0, 0.0, 0.0), point(1.0, 0.0, 1.0), point(1.0, 0.0, 0.0)),
    triangle(point(0.0, 0.0, 0.0), point(0.0, 0.0, 1.0), point(1.0, 0.0, 1.0)),
];

/// The coarse five point, three triangle ground patch terrain generation starts from.
pub const GROUND_PATCH: [Triangle; 3] = {
    let p1 = point(-8.0, 0.0, -8.0);
    let p2 = point(0.0, 0.0, 5.85);
    let p3 = point(8.0, 0.0, -8.0);
    let p4 = point(-8.0, 0.0, 5.85);
    let p5 = point(8.0, 0.0, 5.85);
    [triangle(p1, p2, p3), triangle(p4, p2, p1), triangle(p5, p3, p2)]
};

/// A tetrahedron. Every edge is shared by exactly two faces.
pub const TETRAHEDRON: [Triangle; 4] = {
    let a = point(0.0, 0.0, 0.0);
    let b = point(4.0, 0.0, 0.0);
    let c = point(0.0, 0.0, 4.0);
    let d = point(0.0, 4.0, 0.0);
    [
        triangle(a, b, c),
        triangle(a, d, b),
        triangle(b, d, c),
        triangle(c, d, a),
    ]
};
