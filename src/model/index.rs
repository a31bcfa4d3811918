//! Search index records
//!
//! The index is a bounded, sampled collection of page records. A new index
//! fully replaces any prior one for the same site address.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Maximum stored body length for an indexed page, in characters
///
/// Enforced at record creation to bound index memory and snippet cost.
pub const BODY_CAP: usize = 800;

/// How long a built index stays fresh before it is eligible for rebuild
///
/// Longer than the raw page cache window: the index changes less often
/// than raw content and costs more to rebuild.
const INDEX_FRESHNESS_MINUTES: i64 = 30;

/// What kind of page an index record was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Class,
    Function,
    Namespace,
    File,
    Page,
    Module,
    Related,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Namespace => "namespace",
            Self::File => "file",
            Self::Page => "page",
            Self::Module => "module",
            Self::Related => "related",
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indexed page: a reduced, length-capped view of a fetched page
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub url: String,
    pub title: String,

    /// Plain text body, at most [`BODY_CAP`] characters
    pub body: String,

    pub kind: PageKind,

    /// Free-text provenance label (which listing the page came from)
    pub section: String,

    pub indexed_at: DateTime<Utc>,
}

impl PageRecord {
    /// Creates a record, enforcing the body length cap
    pub fn new(url: String, title: String, body: String, kind: PageKind, section: String) -> Self {
        let body = if body.chars().count() > BODY_CAP {
            body.chars().take(BODY_CAP).collect()
        } else {
            body
        };

        Self {
            url,
            title,
            body,
            kind,
            section,
            indexed_at: Utc::now(),
        }
    }
}

/// The searchable index for one site address
#[derive(Debug, Clone, Serialize)]
pub struct SearchIndex {
    /// Site address this index was built for
    pub site: String,

    /// When the index was built
    pub built_at: DateTime<Utc>,

    /// Indexed pages, in sampling order
    pub pages: Vec<PageRecord>,
}

impl SearchIndex {
    /// Creates a new index for a site with the current timestamp
    pub fn new(site: String, pages: Vec<PageRecord>) -> Self {
        Self {
            site,
            built_at: Utc::now(),
            pages,
        }
    }

    /// Checks if the index is past its freshness window
    pub fn is_stale(&self) -> bool {
        let age = Utc::now() - self.built_at;
        age > Duration::minutes(INDEX_FRESHNESS_MINUTES)
    }
}
