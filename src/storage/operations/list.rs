use crate::error::Result;
use crate::storage::backend::{EntryKind, ObjectEntry, StorageAdapter};
use crate::storage::utils::path::{immediate_child, normalize_directory_prefix};

/// Trait for listing the immediate children of a directory prefix.
pub trait Lister {
    /// List one level below `prefix`, or the container root when it is `None`
    /// or empty.
    ///
    /// # Arguments
    /// * `prefix` - Directory to list; a trailing separator is optional
    ///
    /// # Returns
    /// * `Result<Vec<ListedEntry>>` - Children in the order the backend returned them
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<ListedEntry>>;
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Key with the listed prefix removed.
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub last_modified: Option<String>,
}

impl ListedEntry {
    fn from_object(name: &str, object: &ObjectEntry) -> Self {
        Self {
            name: name.to_string(),
            kind: object.kind(),
            size: object.size,
            last_modified: object.last_modified.clone(),
        }
    }
}

/// Lister that emulates a directory view over a flat prefix listing.
pub struct PrefixLister<A> {
    adapter: A,
}

impl<A: StorageAdapter> PrefixLister<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: StorageAdapter> Lister for PrefixLister<A> {
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<ListedEntry>> {
        let prefix = normalize_directory_prefix(prefix.unwrap_or_default());
        let query = (!prefix.is_empty()).then_some(prefix.as_str());
        let objects = self.adapter.list(query).await?;

        let total = objects.len();
        let children: Vec<ListedEntry> = objects
            .iter()
            .filter_map(|object| {
                immediate_child(&object.key, &prefix)
                    .map(|name| ListedEntry::from_object(name, object))
            })
            .collect();

        log::debug!(
            "list prefix={prefix:?} matched={total} immediate_children={}",
            children.len()
        );
        Ok(children)
    }
}
