//! Physics System - rigid-ish bodies in a closed box
//!
//! Per tick, in this order:
//! - integrator: gravity, turbulence, damping, spin, speed clamp, then position
//!   (semi-implicit Euler: velocity is final before position moves)
//! - boundary: walls, floor (bounce or rest), ceiling; one axis at a time
//! - collision: one O(n²) sweep of sphere-approximate pairs, gated on load
//! - containment: position-only clamp so pair separation can't leave the box

mod types;
mod integrator;
mod boundary;
mod collision;

pub use boundary::{contain, resolve_boundaries};
pub use collision::{collisions_enabled, resolve_collisions, resolve_pair, PairOutcome};
pub use integrator::{integrate, normalize_delta};
pub use types::{BoundaryContacts, CollisionStats};

/// Longest frame the integrator will honour (ms)
pub const MAX_FRAME_MS: f64 = 33.0;
/// Frame length that maps to dt = 1.0 (ms)
pub const REFERENCE_FRAME_MS: f64 = 16.0;
/// Physics complexity above which turbulence is applied
pub const TURBULENCE_THRESHOLD: u8 = 20;
/// Physics complexity above which pairwise collisions run
pub const COLLISION_THRESHOLD: u8 = 40;
/// Collisions are skipped at or above this many objects
pub const COLLISION_OBJECT_LIMIT: usize = 500;
