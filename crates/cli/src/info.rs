use anyhow::Context;
use scape::{height_range, TriangleMesh, VertexIndex};

use crate::args;

pub fn info_command(args: args::InfoArgs) -> anyhow::Result<()> {
    let mesh = scape_stl::read_stl::<VertexIndex, _>(&args.stl_path)
        .with_context(|| format!("failed to read {}", args.stl_path.display()))?;
    println!("{}", summary(&mesh));
    Ok(())
}

fn summary(mesh: &VertexIndex) -> String {
    let mut s = format!(
        "{} triangles, {} unique vertices",
        mesh.triangle_count(),
        mesh.vertex_count()
    );
    if let Some((lo, hi)) = height_range(mesh.vertices()) {
        s.push_str(&format!(", height {lo:.3}..{hi:.3}"));
    }
    s
}
