//! Metropolis Monte Carlo simulation of the two-dimensional Ising model.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(missing_docs)]

#[macro_use]
extern crate serde_derive;

pub mod ising;
pub mod mc;
pub mod prettyfloat;
pub mod rng;

/// The git version of this crate when it was built.
pub const VERSION: &str = git_version::git_version!(fallback = "unknown");
