//! The listing store: canonical record set and derived view.
//!
//! The store holds the only client-side copy of "what files the user has".
//! It is written exclusively through [`ListingStore::replace_all`] — a
//! wholesale, atomic replacement performed after every successful listing
//! fetch — so its contents are always either empty or a complete,
//! server-consistent snapshot. Presentation order is never stored; it is
//! derived fresh on every [`ListingStore::visible_files`] call from the
//! canonical set and the current criteria.

use std::cmp::Ordering;
use std::collections::HashSet;

use api::{FileRecord, ListingCriteria, ListingSummary, SortKey, Visibility};

/// Canonical record set, view criteria and selection state.
#[derive(Debug, Default)]
pub struct ListingStore {
    files: Vec<FileRecord>,
    criteria: ListingCriteria,
    selection: HashSet<String>,
}

impl ListingStore {
    /// Create an empty store with default criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the canonical set.
    ///
    /// This is the only write path into the store. Selection is cleared:
    /// it never survives a listing refresh.
    pub fn replace_all(&mut self, records: Vec<FileRecord>) {
        self.files = records;
        self.selection.clear();
    }

    /// Replace the view criteria. Pure assignment — no network call, no
    /// recomputation. Selection is cleared, as it is on any re-render.
    pub fn set_criteria(&mut self, criteria: ListingCriteria) {
        self.criteria = criteria;
        self.selection.clear();
    }

    /// Current view criteria.
    pub fn criteria(&self) -> &ListingCriteria {
        &self.criteria
    }

    /// The canonical set, in fetch order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Look up a record by id in the canonical set.
    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Number of records in the canonical set.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the canonical set is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Derive the currently visible, ordered subset.
    ///
    /// Applies, in order: the case-insensitive substring search on the
    /// original name, the visibility filter, and a stable sort by the
    /// chosen key. Ties keep their original relative order — there is no
    /// secondary sort key. Pure in `(canonical set, criteria)`.
    pub fn visible_files(&self) -> Vec<FileRecord> {
        let needle = self.criteria.search_text.trim().to_lowercase();
        let filter = self.criteria.visibility_filter;

        let mut list: Vec<FileRecord> = self
            .files
            .iter()
            .filter(|f| needle.is_empty() || f.original_name.to_lowercase().contains(&needle))
            .filter(|f| filter.matches(f.visibility))
            .cloned()
            .collect();

        match self.criteria.sort_key {
            SortKey::Newest => list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
            SortKey::Oldest => list.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
            SortKey::NameAsc => list.sort_by(name_cmp),
            SortKey::NameDesc => list.sort_by(|a, b| name_cmp(b, a)),
            SortKey::SizeAsc => list.sort_by(|a, b| a.size_bytes.cmp(&b.size_bytes)),
            SortKey::SizeDesc => list.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes)),
        }

        list
    }

    /// Aggregate figures over the canonical set, independent of the active
    /// criteria.
    pub fn summary(&self) -> ListingSummary {
        ListingSummary {
            count: self.files.len(),
            total_bytes: self.files.iter().map(|f| f.size_bytes).sum(),
            public_count: self
                .files
                .iter()
                .filter(|f| f.visibility == Visibility::Public)
                .count(),
            // The service reports no download counts; see ListingSummary.
            total_downloads: 0,
        }
    }

    /// Mark a record as selected for bulk operations.
    ///
    /// Returns false when the id is not in the canonical set.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selection.insert(id.to_string());
        true
    }

    /// Unmark a record. Returns whether it was selected.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.selection.remove(id)
    }

    /// Select every record in the canonical set.
    pub fn select_all(&mut self) {
        self.selection = self.files.iter().map(|f| f.id.clone()).collect();
    }

    /// Drop the selection entirely.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected ids, in canonical-set order so bulk operations proceed
    /// deterministically.
    pub fn selected_ids(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| self.selection.contains(&f.id))
            .map(|f| f.id.clone())
            .collect()
    }
}

/// Case-insensitive name ordering; ties fall back to the stable sort.
fn name_cmp(a: &FileRecord, b: &FileRecord) -> Ordering {
    a.original_name
        .to_lowercase()
        .cmp(&b.original_name.to_lowercase())
}
