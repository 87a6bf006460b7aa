//! # Filedock Client Library
//!
//! This crate provides the client-side engine for the Filedock file-storage
//! service: the canonical in-memory view of the user's files, the pure
//! derivation that orders it for display, and the mutation orchestration
//! that keeps it consistent with the remote API.
//!
//! ## Overview
//!
//! The remote service is the only persistence layer. The engine therefore
//! follows a refetch-after-write model: every mutation is followed by a
//! full re-read of server state rather than a local patch of the record
//! set.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Presentation layer (CLI, GUI)                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ FileManager  │→ │ HttpGateway  │  │    SessionStore      │  │
//! │  │ (mutations)  │  │  (reqwest)   │  │  (session blob)      │  │
//! │  └──────┬───────┘  └──────────────┘  └──────────────────────┘  │
//! │         │                                                       │
//! │  ┌──────▼───────┐                                               │
//! │  │ ListingStore │  canonical set + criteria + selection         │
//! │  └──────────────┘                                               │
//! │                                                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The presentation layer dispatches user intents into [`FileManager`]
//! operations and re-renders from [`ListingStore::visible_files`]; the
//! engine itself has no UI-facing behavior and exposes no callbacks, which
//! keeps it testable without a rendering surface.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`session`]: bearer-token session accessor
//! - [`gateway`]: the [`FileApi`] trait and its reqwest implementation
//! - [`store`]: canonical record set and derived view
//! - [`manager`]: refetch-after-write mutation orchestration

pub mod config;
pub mod gateway;
pub mod manager;
pub mod session;
pub mod store;

// Re-export the shared data model for convenience
pub use api;

pub use config::ClientConfig;
pub use gateway::{FileApi, HttpGateway};
pub use manager::{BulkDeleteError, FileManager, SyncError};
pub use session::{Session, SessionStore, UserProfile};
pub use store::ListingStore;
