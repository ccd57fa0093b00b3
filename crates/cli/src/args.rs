use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Binary STL holding the coarse starting mesh. Defaults to a flat ground patch.
    #[arg(short, long, conflicts_with = "triangles")]
    pub input: Option<PathBuf>,

    /// A starting triangle as 9 comma separated coordinates. May be repeated.
    #[arg(
        long = "triangle",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub triangles: Vec<f32>,

    /// Number of subdivision rounds.
    #[arg(short = 'n', long, default_value_t = 5)]
    pub iterations: u32,

    /// Displacement strength.
    #[arg(short, long, default_value_t = 0.18)]
    pub roughness: f32,

    /// Seed for a reproducible terrain.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Refuse to generate more triangles than this.
    #[arg(long, default_value_t = 10_000_000)]
    pub max_triangles: usize,

    /// Output path for the binary STL.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write the triangle list of every round to this directory.
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    pub stl_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Grow a fractal terrain and write it as STL.
    Generate(GenerateArgs),
    /// Print statistics for an STL mesh.
    Info(InfoArgs),
}
