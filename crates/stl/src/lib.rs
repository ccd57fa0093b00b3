use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use scape_mesh::{Triangle, TriangleMesh, Vector3};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

const HEADER_LEN: usize = 80;
// Normal, 3 vertices and the attribute byte count.
const FACET_LEN: u64 = 4 * 3 * 4 + 2;

fn read_vector<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: f.read_f32::<LittleEndian>()?,
        y: f.read_f32::<LittleEndian>()?,
        z: f.read_f32::<LittleEndian>()?,
    })
}

fn write_vector<T: Write>(f: &mut T, v: &Vector3) -> std::io::Result<()> {
    f.write_f32::<LittleEndian>(v.x)?;
    f.write_f32::<LittleEndian>(v.y)?;
    f.write_f32::<LittleEndian>(v.z)
}

fn read_binary<M: TriangleMesh, T: Read + Seek>(f: &mut T) -> std::io::Result<M> {
    // Binary files start with an 80 byte header. There is no defined structure for this
    // header but some implementations will stash some metadata in this header. For now
    // we'll just skip the header and load the geometry.
    f.seek(SeekFrom::Start(HEADER_LEN as u64))?;

    // Immediately following the header is an unsigned 32-bit integer that indicates the
    // number of triagles that follow.
    let n_triangles = f.read_u32::<LittleEndian>()? as usize;

    // The count is untrusted; only reserve room for the facets actually present.
    let body_start = f.stream_position()?;
    let body_len = f.seek(SeekFrom::End(0))?.saturating_sub(body_start);
    f.seek(SeekFrom::Start(body_start))?;
    let present = usize::try_from(body_len / FACET_LEN).unwrap_or(usize::MAX);

    let mut data = Vec::<Triangle>::with_capacity(n_triangles.min(present));
    for _ in 0..n_triangles {
        // Each triangle is specified by a normal vector followed by 3 verticies of the
        // triangle. While the normal vector may be included, it is generally expected
        // that verticies be listed in counter-clockwise order and so the normal vector
        // maybe specified as (0, 0, 0).
        let _normal = read_vector(f)?;
        data.push(Triangle {
            p0: read_vector(f)?,
            p1: read_vector(f)?,
            p2: read_vector(f)?,
        });
        // After the triangle geometry there is a 2-byte unsigned integer called the
        // "attribute byte count". There is no standard structure of this field, but
        // some applications use this for color data.
        let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    }
    Ok(M::from_triangles(data))
}

/// Writes `mesh` as a binary STL.
///
/// The facet normal is derived from the winding of each triangle; degenerate triangles get
/// a zero normal, which readers treat as "compute it yourself".
pub fn write_binary<M: TriangleMesh, T: Write>(f: &mut T, mesh: &M) -> std::io::Result<()> {
    let n_triangles = u32::try_from(mesh.triangle_count()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "binary STL holds at most u32::MAX triangles",
        )
    })?;

    let mut header = [0u8; HEADER_LEN];
    let tag = b"scape terrain";
    header[..tag.len()].copy_from_slice(tag);
    f.write_all(&header)?;
    f.write_u32::<LittleEndian>(n_triangles)?;

    let zero = Vector3::new(0.0, 0.0, 0.0);
    for t in mesh.triangles() {
        write_vector(f, &t.normal().unwrap_or(zero))?;
        write_vector(f, &t.p0)?;
        write_vector(f, &t.p1)?;
        write_vector(f, &t.p2)?;
        f.write_u16::<LittleEndian>(0)?;
    }
    f.flush()
}

pub fn read_stl<M: TriangleMesh, P: AsRef<Path>>(p: P) -> std::io::Result<M> {
    let mut f = std::fs::File::open(p)?;
    read_binary(&mut f)
}

pub fn parse_stl<M: TriangleMesh>(data: &[u8]) -> std::io::Result<M> {
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

pub fn write_stl<M: TriangleMesh, P: AsRef<Path>>(p: P, mesh: &M) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(p)?);
    write_binary(&mut f, mesh)
}

/// Encodes `mesh` as a binary STL in memory. Fails only if the mesh has more than
/// `u32::MAX` triangles.
pub fn to_stl_bytes<M: TriangleMesh>(mesh: &M) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_binary(&mut bytes, mesh)?;
    Ok(bytes)
}

pub trait StlReader: Read {
    fn read_stl<M: TriangleMesh>(&mut self) -> std::io::Result<M>;
}

impl<T: Read + Seek> StlReader for T {
    fn read_stl<M: TriangleMesh>(&mut self) -> std::io::Result<M> {
        read_binary(self)
    }
}

pub trait StlWriter: Write {
    fn write_stl<M: TriangleMesh>(&mut self, mesh: &M) -> std::io::Result<()>;
}

impl<T: Write> StlWriter for T {
    fn write_stl<M: TriangleMesh>(&mut self, mesh: &M) -> std::io::Result<()> {
        write_binary(self, mesh)
    }
}
