//! Listing criteria: the user-chosen view configuration.
//!
//! Criteria are ephemeral — they live for the session and are never
//! persisted. Changing them never triggers a network call; they only feed
//! the pure derivation that orders the canonical record set for display.

use serde::{Deserialize, Serialize};

use crate::files::Visibility;

/// Visibility filter applied to the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    /// Show every record.
    #[default]
    All,
    /// Show only public records.
    Public,
    /// Show only private records.
    Private,
}

impl VisibilityFilter {
    /// Whether a record with the given visibility passes this filter.
    pub fn matches(&self, visibility: Visibility) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::Public => visibility == Visibility::Public,
            VisibilityFilter::Private => visibility == Visibility::Private,
        }
    }

    /// Parses a wire name (`all`, `public`, `private`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(VisibilityFilter::All),
            "public" => Some(VisibilityFilter::Public),
            "private" => Some(VisibilityFilter::Private),
            _ => None,
        }
    }
}

impl std::str::FromStr for VisibilityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("unknown visibility filter '{s}', expected all|public|private"))
    }
}

/// Sort order applied to the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Newest,
    /// Least recently updated first.
    Oldest,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Smallest first.
    SizeAsc,
    /// Largest first.
    SizeDesc,
}

impl SortKey {
    /// Parses a wire name (`newest`, `name_asc`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "name_asc" => Some(SortKey::NameAsc),
            "name_desc" => Some(SortKey::NameDesc),
            "size_asc" => Some(SortKey::SizeAsc),
            "size_desc" => Some(SortKey::SizeDesc),
            _ => None,
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unknown sort key '{s}', expected \
                 newest|oldest|name_asc|name_desc|size_asc|size_desc"
            )
        })
    }
}

/// The complete view configuration for the file listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCriteria {
    /// Case-insensitive substring matched against the original name.
    /// Empty means no search restriction.
    pub search_text: String,

    /// Visibility restriction.
    pub visibility_filter: VisibilityFilter,

    /// Presentation order.
    pub sort_key: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = ListingCriteria::default();
        assert_eq!(criteria.search_text, "");
        assert_eq!(criteria.visibility_filter, VisibilityFilter::All);
        assert_eq!(criteria.sort_key, SortKey::Newest);
    }

    #[test]
    fn test_visibility_filter_matches() {
        assert!(VisibilityFilter::All.matches(Visibility::Public));
        assert!(VisibilityFilter::All.matches(Visibility::Private));
        assert!(VisibilityFilter::Public.matches(Visibility::Public));
        assert!(!VisibilityFilter::Public.matches(Visibility::Private));
        assert!(VisibilityFilter::Private.matches(Visibility::Private));
        assert!(!VisibilityFilter::Private.matches(Visibility::Public));
    }

    #[test]
    fn test_visibility_filter_from_name() {
        assert_eq!(VisibilityFilter::from_name("all"), Some(VisibilityFilter::All));
        assert_eq!(
            VisibilityFilter::from_name("public"),
            Some(VisibilityFilter::Public)
        );
        assert_eq!(
            VisibilityFilter::from_name("private"),
            Some(VisibilityFilter::Private)
        );
        assert_eq!(VisibilityFilter::from_name("hidden"), None);
    }

    #[test]
    fn test_sort_key_from_name() {
        assert_eq!(SortKey::from_name("newest"), Some(SortKey::Newest));
        assert_eq!(SortKey::from_name("oldest"), Some(SortKey::Oldest));
        assert_eq!(SortKey::from_name("name_asc"), Some(SortKey::NameAsc));
        assert_eq!(SortKey::from_name("name_desc"), Some(SortKey::NameDesc));
        assert_eq!(SortKey::from_name("size_asc"), Some(SortKey::SizeAsc));
        assert_eq!(SortKey::from_name("size_desc"), Some(SortKey::SizeDesc));
        assert_eq!(SortKey::from_name("relevance"), None);
    }

    #[test]
    fn test_sort_key_from_str_error_message() {
        let err = "relevance".parse::<SortKey>().unwrap_err();
        assert!(err.contains("relevance"));
        assert!(err.contains("size_desc"));
    }

    #[test]
    fn test_sort_key_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortKey::NameAsc).unwrap(),
            "\"name_asc\""
        );
        let key: SortKey = serde_json::from_str("\"size_desc\"").unwrap();
        assert_eq!(key, SortKey::SizeDesc);
    }
}
