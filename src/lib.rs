//! parzen-bayes: Parzen window density estimation for 1-D measurements.
//!
//! This crate provides a Gaussian-kernel density estimator, a
//! cross-validated log-likelihood objective for selecting the kernel
//! bandwidth, and a two-class Bayes classifier built on the estimated
//! densities, together with the fold partitioner, measurement extraction
//! and CSV loading that surround them.
//!
//! The core operations are pure functions of their arguments; callers own
//! the data and the random generator, which keeps sweeps reproducible and
//! safe to parallelize.
pub mod bandwidth;
pub mod classify;
pub mod config;
pub mod crossval;
pub mod density;
pub mod error;
pub mod features;
pub mod io;
