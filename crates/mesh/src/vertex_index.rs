use std::collections::HashMap;

use crate::{
    geometry::{ordered, OrderedVec3, Triangle, Vector3},
    TriangleMesh,
};

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector. We do this so we can store each vertex as 4 bytes instead of the 12 bytes
/// required to store the entire Vector3. This has further savings if a vertex is reused,
/// which for a subdivided terrain is nearly every vertex (each interior point is shared by
/// six facets).
///
/// As a simple example, consider a triangle split once:
///
/// ```text
///            *
///           / \
///          /   \
///         *-----*
///        / \   / \
///       /   \ /   \
///      *-----*-----*
/// ```
///
/// Here we have 6 points and 4 facets. If we would store every facet as a series of points
/// we would need:
///    3 floats * 4b * 3 points * 4 facets = 144 bytes.
///
/// If instead we store:
///    3 floats * 4b * 6 points  = 72b
///  + 3 indices * 4b * 4 facets = 48b
///                              =======
///                               120b
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Facet {
    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    pub points: Vec<Vector3>,
    pub facets: Vec<Facet>,
}

impl VertexIndex {
    /// Number of unique points.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn vertices(&self) -> &[Vector3] {
        self.points.as_slice()
    }

    /// The facets flattened into a triangle-list index buffer, 3 indices per facet in
    /// winding order.
    pub fn indices(&self) -> Vec<u32> {
        self.facets.iter().flat_map(Facet::indices).collect()
    }

    /// Rebuilds the triangle for facet `i`.
    pub fn facet_triangle(&self, i: usize) -> Option<Triangle> {
        let f = self.facets.get(i)?;
        Some(Triangle {
            p0: *self.points.get(f.p0 as usize)?,
            p1: *self.points.get(f.p1 as usize)?,
            p2: *self.points.get(f.p2 as usize)?,
        })
    }

    /// Splits the mesh into a vertex array and a flat index array, the form a renderer
    /// uploads.
    pub fn into_buffers(self) -> (Vec<Vector3>, Vec<u32>) {
        let indices = self.indices();
        (self.points, indices)
    }
}

/// Deduplicates the points of `triangles`.
///
/// Points receive indices in the order they are first seen, walking the triangles in order
/// and each triangle's points in winding order.
fn index_triangles(triangles: &[Triangle]) -> VertexIndex {
    let mut lookup: HashMap<OrderedVec3, u32> = HashMap::with_capacity(triangles.len());
    let mut points = Vec::new();
    let mut facets = Vec::with_capacity(triangles.len());

    let mut index_of = |p: Vector3| -> u32 {
        *lookup.entry(ordered(&p)).or_insert_with(|| {
            points.push(p);
            (points.len() - 1) as u32
        })
    };

    for t in triangles {
        facets.push(Facet {
            p0: index_of(t.p0),
            p1: index_of(t.p1),
            p2: index_of(t.p2),
        });
    }
    VertexIndex { points, facets }
}

/// Builds an indexed mesh from a triangle list.
///
/// Returns the unique points and an index buffer with `3 * triangles.len()` entries.
pub fn build_mesh(triangles: &[Triangle]) -> (Vec<Vector3>, Vec<u32>) {
    index_triangles(triangles).into_buffers()
}

impl TriangleMesh for VertexIndex {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        index_triangles(&triangles)
    }

    fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    fn as_triangle_slice(&self) -> Option<&[Triangle]> {
        None
    }

    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_> {
        Box::new((0..self.facets.len()).filter_map(move |i| self.facet_triangle(i)))
    }
}
