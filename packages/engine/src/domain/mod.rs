//! Domain types: tuning constants, run settings, the simulation box and the objects in it.

pub mod bounds;
pub mod config;
pub mod object;
