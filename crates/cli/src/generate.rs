use std::path::{Path, PathBuf};

use anyhow::Context;
use scape::{
    generate_terrain, seed_mesh, triangles_from_flat, RoundObserver, TerrainConfig, Triangle,
};

use crate::args;

/// Logs every round and optionally dumps it as STL.
///
/// Observers cannot fail, so the first write error is kept and reported once generation
/// finishes.
struct Snapshots {
    dir: Option<PathBuf>,
    error: Option<anyhow::Error>,
}

impl Snapshots {
    fn new(dir: Option<PathBuf>) -> Self {
        Self { dir, error: None }
    }

    fn path(dir: &Path, round: u32) -> PathBuf {
        dir.join(format!("terrain_round{}.stl", round))
    }

    fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl RoundObserver for Snapshots {
    fn on_round(&mut self, round: u32, triangles: &[Triangle]) {
        log::info!("round {}: {} triangles", round, triangles.len());
        let Some(dir) = &self.dir else {
            return;
        };
        if self.error.is_some() {
            return;
        }
        let path = Self::path(dir, round);
        if let Err(e) = scape_stl::write_stl(&path, &triangles.to_vec()) {
            self.error = Some(anyhow::Error::new(e).context(format!(
                "failed to write snapshot {}",
                path.display()
            )));
        }
    }
}

fn load_triangles(args: &args::GenerateArgs) -> anyhow::Result<Vec<Triangle>> {
    if let Some(input) = &args.input {
        return scape_stl::read_stl::<Vec<Triangle>, _>(input)
            .with_context(|| format!("failed to read {}", input.display()));
    }
    if !args.triangles.is_empty() {
        return Ok(triangles_from_flat(&args.triangles)?);
    }
    Ok(seed_mesh())
}

pub fn generate_command(args: args::GenerateArgs) -> anyhow::Result<()> {
    let triangles = load_triangles(&args)?;

    let mut config = TerrainConfig::new()
        .with_iterations(args.iterations)
        .with_roughness(args.roughness)
        .with_max_triangles(args.max_triangles);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if let Some(dir) = &args.snapshot_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let mut snapshots = Snapshots::new(args.snapshot_dir.clone());
    let terrain = generate_terrain(triangles, &config, &mut snapshots)?;
    snapshots.finish()?;

    scape_stl::write_stl(&args.output, &terrain.mesh)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("{}", terrain);
    Ok(())
}
