//! Team directory: the read-only set of known teams
//!
//! The directory is populated once from a [`DirectorySource`] before any
//! resolution happens, validated, and indexed for constant-time lookups by
//! canonical name, id, and exact alias.

pub mod index;
pub mod source;

// Re-export commonly used types
pub use index::TeamDirectory;
pub use source::{DirectorySource, JsonDirectorySource, StaticDirectorySource};
