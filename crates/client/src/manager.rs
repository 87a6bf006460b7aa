//! Mutation orchestration: refetch-after-write against the remote service.
//!
//! Every mutating operation follows the same pattern: perform the remote
//! call(s), then refetch the full listing into the store. Nothing is
//! patched locally — the remote service is the source of truth, and the
//! one extra round trip per mutation buys consistency without any
//! client-side reconciliation rules. On failure the error is returned
//! untouched and the canonical set keeps its last-known-good snapshot.

use api::{ApiError, FileRecord, Visibility};
use thiserror::Error;

use crate::gateway::FileApi;
use crate::store::ListingStore;

/// Errors from synchronizing mutations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote call failed; the canonical set was left untouched.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The operation referenced an id that is not in the current snapshot.
    #[error("no file with id {id} in the current listing")]
    UnknownFile {
        /// The id that was not found.
        id: String,
    },

    /// A bulk deletion stopped partway; see the report for what landed.
    #[error(transparent)]
    Bulk(#[from] BulkDeleteError),
}

/// A bulk deletion that stopped partway.
///
/// Deletions run strictly sequentially; the first failure aborts the
/// remainder, so the report is deterministic: everything before `id` was
/// deleted, everything after was not attempted. No listing refresh happens
/// on this path — records already deleted server-side stay visible until
/// the next refresh.
#[derive(Debug, Error)]
#[error("removed {deleted} of {total} files, stopped at {id} ({not_attempted} not attempted): {source}")]
pub struct BulkDeleteError {
    /// How many deletions succeeded before the failure.
    pub deleted: usize,
    /// Total number of ids requested.
    pub total: usize,
    /// How many ids were never attempted.
    pub not_attempted: usize,
    /// The id whose deletion failed.
    pub id: String,
    /// The underlying gateway error.
    #[source]
    pub source: ApiError,
}

/// Orchestrates mutations over an injected gateway and keeps the listing
/// store in sync with their outcome.
///
/// Generic over [`FileApi`] so the orchestration logic runs against a
/// scripted double in tests and the reqwest gateway in production.
///
/// Operations are single-flight by construction: every one takes
/// `&mut self`, so a caller cannot start a second mutation through the same
/// manager while one is outstanding. Callers driving a UI should disable
/// re-invocation while an operation runs.
pub struct FileManager<A: FileApi> {
    api: A,
    store: ListingStore,
}

impl<A: FileApi> FileManager<A> {
    /// Create a manager with an empty store.
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: ListingStore::new(),
        }
    }

    /// Read access to the listing store.
    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// Mutable access to the listing store (criteria, selection).
    pub fn store_mut(&mut self) -> &mut ListingStore {
        &mut self.store
    }

    /// Refetch the full listing and replace the canonical set.
    ///
    /// The single synchronization point: manual refresh and post-mutation
    /// reconciliation both land here.
    pub async fn refresh(&mut self) -> Result<(), SyncError> {
        let records = self.api.list_files().await?;
        self.store.replace_all(records);
        Ok(())
    }

    /// Upload a file, optionally publishing it, then refresh.
    ///
    /// The server always persists new files as private. When
    /// `desired_visibility` is public, a second sequential request patches
    /// the visibility — two round trips, not atomic: a crash between them
    /// leaves the file private.
    ///
    /// Returns the server's creation response; the canonical set after the
    /// refresh is authoritative.
    pub async fn upload(
        &mut self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
        desired_visibility: Visibility,
    ) -> Result<FileRecord, SyncError> {
        let created = self.api.upload(file_name, mime_type, bytes).await?;

        if desired_visibility == Visibility::Public {
            self.api
                .set_visibility(&created.id, Visibility::Public)
                .await?;
        }

        tracing::info!("Uploaded {} ({})", created.original_name, created.id);
        self.refresh().await?;
        Ok(created)
    }

    /// Flip a file's visibility, then refresh. Returns the new visibility.
    ///
    /// The new value is the opposite of the *local* snapshot's visibility;
    /// server state is not re-read before flipping. If another session
    /// mutated the file concurrently the flip can invert the wrong way.
    pub async fn toggle_visibility(&mut self, id: &str) -> Result<Visibility, SyncError> {
        let current = self
            .store
            .get(id)
            .ok_or_else(|| SyncError::UnknownFile { id: id.to_string() })?
            .visibility;
        let target = current.toggled();

        self.api.set_visibility(id, target).await?;
        tracing::info!("File {} is now {}", id, target);
        self.refresh().await?;
        Ok(target)
    }

    /// Delete a single file, then refresh.
    pub async fn delete_one(&mut self, id: &str) -> Result<(), SyncError> {
        self.api.delete(id).await?;
        tracing::info!("Deleted file {}", id);
        self.refresh().await?;
        Ok(())
    }

    /// Delete several files sequentially, then refresh.
    ///
    /// Requests run one at a time — never fanned out — so the remote
    /// service sees bounded load and a failure yields a deterministic
    /// [`BulkDeleteError`] report instead of a best-effort scatter. An
    /// empty id list is a no-op. On success returns the number deleted.
    pub async fn delete_many(&mut self, ids: &[String]) -> Result<usize, SyncError> {
        if ids.is_empty() {
            return Ok(0);
        }

        for (done, id) in ids.iter().enumerate() {
            if let Err(source) = self.api.delete(id).await {
                return Err(BulkDeleteError {
                    deleted: done,
                    total: ids.len(),
                    not_attempted: ids.len() - done - 1,
                    id: id.clone(),
                    source,
                }
                .into());
            }
        }

        tracing::info!("Deleted {} files", ids.len());
        self.refresh().await?;
        Ok(ids.len())
    }

    /// Direct-download link for a file; also what "share" hands out.
    pub fn share_link(&self, id: &str) -> String {
        self.api.download_url(id)
    }
}
