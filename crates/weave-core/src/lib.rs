pub mod classify;
pub mod error;
pub mod generate;
pub mod graph;
pub mod propagation;
pub mod seeds;

pub use classify::{classify, rank, Category, Report, Thresholds};
pub use error::{Error, Result};
pub use generate::{generate, watts_strogatz, NetworkConfig};
pub use graph::{ensure_connected, Edge, Graph};
pub use propagation::{max_delta, propagate, propagate_trace, spread};
pub use seeds::SeedSet;

/// Core types
pub type NodeId = usize;
pub type F = f64;
pub type Belief = F; // [0,1] value: 1.0 positive, 0.0 negative, 0.5 unknown
