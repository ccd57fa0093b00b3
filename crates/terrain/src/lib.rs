//! Fractal terrain by displaced midpoint subdivision.
//!
//! A coarse triangle mesh is split over a number of rounds; every round replaces each
//! triangle with four, moving each new edge midpoint up or down by a Gaussian offset that
//! grows with the edge length. Midpoints are shared between neighbouring triangles so the
//! surface stays closed. The final triangle list is indexed into a [`VertexIndex`].
//!
//! ```
//! use scape::{generate_terrain, seed_mesh, NoopObserver, TerrainConfig};
//!
//! let config = TerrainConfig::new().with_iterations(2).with_seed(7);
//! let terrain = generate_terrain(seed_mesh(), &config, &mut NoopObserver)?;
//! assert_eq!(terrain.mesh.facets.len(), 3 * 16);
//! # Ok::<(), scape::TerrainError>(())
//! ```

mod config;
mod edge;
mod error;
mod generate;
mod observer;
mod random;
mod subdivide;
mod validate;

pub use config::*;
pub use edge::*;
pub use error::*;
pub use generate::*;
pub use observer::*;
pub use random::*;
pub use subdivide::*;
pub use validate::*;

pub use scape_mesh::{build_mesh, Triangle, TriangleMesh, Vector3, VertexIndex};
