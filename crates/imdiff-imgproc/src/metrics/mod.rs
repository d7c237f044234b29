//! Image comparison metrics.
//!
//! Scalar metrics for quantitatively comparing a computed image against a
//! reference:
//!
//! - **MSE / rMSE**: (root) mean squared error over all pixels
//! - **relMSE / relative rMSE**: the same, over differences normalized by the
//!   larger of the two compared values plus a stabilizing constant
//!
//! The [`truncate_decimal`] helper reproduces the display convention of
//! truncating (not rounding) metric values to a fixed number of decimals.

mod mse;
mod relmse;
mod trunc;

pub use mse::{mse, rmse};
pub use relmse::{relative_mse, relative_rmse};
pub use trunc::truncate_decimal;
