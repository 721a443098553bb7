/// Contacts registered by the boundary resolver during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryContacts {
    /// X and Z wall hits
    pub walls: u32,
    /// Floor hits fast enough to bounce
    pub floor_bounces: u32,
    /// Floor hits that came to rest
    pub floor_rests: u32,
    pub ceiling: u32,
}

impl BoundaryContacts {
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            walls: self.walls + other.walls,
            floor_bounces: self.floor_bounces + other.floor_bounces,
            floor_rests: self.floor_rests + other.floor_rests,
            ceiling: self.ceiling + other.ceiling,
        }
    }
}

/// Outcome of one pairwise sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: u32,
    /// Overlapping pairs pushed apart
    pub overlaps: u32,
    /// Overlapping pairs that were also approaching
    pub impulses: u32,
    /// Coincident centres resolved with the fallback normal
    pub degenerate: u32,
}
