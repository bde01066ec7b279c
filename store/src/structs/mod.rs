mod saved_link;

pub use saved_link::SavedLink;

/// Result of [`crate::LinkWriter::add_link`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Result of [`crate::LinkWriter::remove_link`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}
