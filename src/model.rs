use std::sync::atomic::{AtomicU64, Ordering};

/// The raw-value partition of a [`crate::ParseResult`] an option reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Applies to the program as a whole.
    Global,
    /// Applies to every command within a command group.
    Group,
    /// Applies to a single command.
    Command,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The stable identity of a descriptor.
///
/// A multi-alias option may be reachable under several names, and the same
/// descriptor may be registered against several commands.  Render-time
/// deduplication works off this identity, never off structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptorId(u64);

static NEXT_DESCRIPTOR_ID: AtomicU64 = AtomicU64::new(0);

impl DescriptorId {
    pub(crate) fn next() -> Self {
        DescriptorId(NEXT_DESCRIPTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}
