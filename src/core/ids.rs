//! Card instance identification.
//!
//! Every card that enters a battle gets a fresh `InstanceId`. Two copies of
//! the same definition ("strike", "strike") are distinct instances, and a
//! cloned instance never shares its id with the original.
//!
//! ```
//! use deckbattle::core::{InstanceAllocator, InstanceId};
//!
//! let mut ids = InstanceAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//! assert_ne!(a, b);
//! assert_eq!(a, InstanceId(0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic allocator for instance ids.
///
/// Owned by the battle controller; ids are never reused within a battle.
#[derive(Clone, Debug, Default)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = InstanceAllocator::new();
        assert_eq!(ids.alloc(), InstanceId(0));
        assert_eq!(ids.alloc(), InstanceId(1));
        assert_eq!(ids.alloc(), InstanceId(2));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(42)), "Instance(42)");
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
