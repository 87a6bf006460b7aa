//! # Filedock API Model
//!
//! This crate defines the data model shared by every component that talks
//! about the remote file-storage service:
//!
//! - **File records**: the server's view of a stored file, as returned by
//!   the listing endpoint
//! - **Listing criteria**: the user-chosen filter/sort/search configuration
//!   applied when deriving a presentation order
//! - **Errors**: the normalized error taxonomy raised by the API gateway
//!
//! All types are serde-serializable. Wire-field renames (`size`,
//! `mime`) are handled here so the rest of the codebase only ever sees the
//! domain names (`size_bytes`, `mime_type`).
//!
//! ## Modules
//!
//! - [`files`]: file records, visibility, listing summary
//! - [`criteria`]: filter/sort/search configuration
//! - [`error`]: error types

pub mod criteria;
pub mod error;
pub mod files;

pub use criteria::{ListingCriteria, SortKey, VisibilityFilter};
pub use error::{ApiError, Result};
pub use files::{FileRecord, ListingSummary, Visibility};
