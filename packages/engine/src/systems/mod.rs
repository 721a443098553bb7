//! Systems that create and advance physics objects.

pub mod factory;
pub mod physics;
