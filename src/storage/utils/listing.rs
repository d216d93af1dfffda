// ls(1)-style rendering of directory listings
use crate::storage::backend::EntryKind;
use crate::storage::constants::{
    DIRECTORY_PERMISSIONS, FILE_PERMISSIONS, LISTING_GROUP, LISTING_OWNER, LISTING_TIME_FORMAT,
    LISTING_TIME_WIDTH,
};
use crate::storage::operations::list::ListedEntry;
use chrono::{DateTime, NaiveDateTime};
use std::fmt;

/// Render entries as aligned listing lines, one per entry, in input order.
///
/// Sizes are right-justified to the widest size among `entries`.
pub fn format_listing(entries: &[ListedEntry]) -> Vec<String> {
    let size_width = entries
        .iter()
        .map(|entry| entry.size.to_string().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| ListingLine { entry, size_width }.to_string())
        .collect()
}

/// Render a backend timestamp as `Mon DD HH:MM`.
///
/// Accepts RFC 3339 and the offset-less fractional form Swift emits
/// (`2024-03-05T14:07:09.123456`), which is taken as UTC.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|t| t.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()?;
    Some(parsed.format(LISTING_TIME_FORMAT).to_string())
}

/// Permission column for an entry. Cosmetic only.
pub fn permissions(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => DIRECTORY_PERMISSIONS,
        EntryKind::File => FILE_PERMISSIONS,
    }
}

struct ListingLine<'a> {
    entry: &'a ListedEntry,
    size_width: usize,
}

impl fmt::Display for ListingLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modified = self
            .entry
            .last_modified
            .as_deref()
            .and_then(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{perms} 1 {owner} {group} {size:>size_width$} {modified:>time_width$} {name}",
            perms = permissions(self.entry.kind),
            owner = LISTING_OWNER,
            group = LISTING_GROUP,
            size = self.entry.size,
            size_width = self.size_width,
            modified = modified,
            time_width = LISTING_TIME_WIDTH,
            name = self.entry.name,
        )
    }
}
