//! Monte Carlo sampling of the lattice.

pub mod metropolis;
pub mod plugin;
