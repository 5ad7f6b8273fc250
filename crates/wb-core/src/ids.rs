use core::fmt;
use core::num::NonZeroU32;

/// Compact handle into one of the circuit graph's arenas.
///
/// The builder hands these out densely from zero as nodes and components
/// are registered, so an `Id` is always a valid index into the arena that
/// produced it. Stored as `NonZeroU32` so the `Option<Id>` returned by
/// endpoint lookups costs nothing extra.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Wrap a 0-based arena index (stored as index + 1).
    pub fn from_index(index: u32) -> Self {
        // index + 1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index + 1 is nonzero"))
    }

    /// The 0-based arena index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Arena-specific aliases; a `NodeId` never indexes the component arena.
pub type NodeId = Id;
pub type CompId = Id;
