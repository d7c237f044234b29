#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// colormap rendering module.
pub mod colormap;

/// per-pixel difference grids module.
pub mod diff;

/// image comparison metrics module.
pub mod metrics;

/// module containing parallization utilities.
pub mod parallel;
