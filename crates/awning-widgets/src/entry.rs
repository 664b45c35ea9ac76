//! Entry model shared by the popup widgets.
//!
//! An [`EntryList`] presents a caller-supplied, heterogeneous list of menu
//! entries (selectable items, disabled items, separators) as an addressable
//! **navigable sequence**: the subsequence of enabled items that keyboard
//! focus can land on. Separators and disabled items keep their place in the
//! rendered list but never occupy a navigable index.

use thiserror::Error;

/// Errors from [`EntryList`] construction and indexed access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    /// An item was supplied with an empty identifier.
    #[error("entry at position {position} has an empty id")]
    EmptyId {
        /// Position in the caller's original list.
        position: usize,
    },
    /// Two items share the same identifier.
    #[error("duplicate entry id `{id}`")]
    DuplicateId {
        /// The offending identifier.
        id: String,
    },
    /// A navigable index outside `[0, navigable_count())` was requested.
    #[error("navigable index {index} out of range for {count} enabled entries")]
    IndexOutOfRange {
        /// The requested navigable index.
        index: usize,
        /// The navigable count at the time of the request.
        count: usize,
    },
}

/// A selectable menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier reported on commit.
    pub id: String,
    /// Text shown in the popup row.
    pub label: String,
    /// Disabled items render dimmed and are skipped by keyboard navigation.
    pub disabled: bool,
    /// Optional glyph rendered before the label.
    pub icon: Option<String>,
    /// Marks the item as the current selection (select mode seeds its
    /// committed value from this).
    pub current: bool,
}

impl Item {
    /// Create an enabled item with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
            icon: None,
            current: false,
        }
    }

    /// Set the disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the icon glyph shown before the label.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark this item as the current selection.
    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }
}

/// One entry in a popup list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A selectable (or disabled) item.
    Item(Item),
    /// A horizontal rule between item groups. Never receives focus.
    Separator,
}

impl Entry {
    /// Create an enabled item entry.
    pub fn item(id: impl Into<String>, label: impl Into<String>) -> Self {
        Entry::Item(Item::new(id, label))
    }

    /// Create a separator entry.
    pub fn separator() -> Self {
        Entry::Separator
    }

    /// Whether keyboard focus can land on this entry.
    pub fn is_navigable(&self) -> bool {
        match self {
            Entry::Item(item) => !item.disabled,
            Entry::Separator => false,
        }
    }
}

impl From<Item> for Entry {
    fn from(item: Item) -> Self {
        Entry::Item(item)
    }
}

/// A validated, ordered entry list with an addressable navigable subsequence.
///
/// Construction fails fast on malformed input (empty or duplicate ids) and
/// normalizes separators so that at most one appears between any two items
/// and none dangle at the ends. The list is immutable once built; widgets
/// that swap lists do so between open sessions, never during one.
///
/// An empty list, or one whose items are all disabled, is valid: its
/// navigable index space is simply empty and navigation over it is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// Build a list from raw entries.
    ///
    /// Validates every item id (non-empty, unique across the list) and
    /// collapses redundant separators.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Result<Self, EntryError> {
        let entries: Vec<Entry> = entries.into_iter().collect();

        let mut seen: Vec<&str> = Vec::new();
        for (position, entry) in entries.iter().enumerate() {
            if let Entry::Item(item) = entry {
                if item.id.is_empty() {
                    return Err(EntryError::EmptyId { position });
                }
                if seen.contains(&item.id.as_str()) {
                    return Err(EntryError::DuplicateId {
                        id: item.id.clone(),
                    });
                }
                seen.push(item.id.as_str());
            }
        }

        Ok(Self {
            entries: normalize_separators(entries),
        })
    }

    /// An empty list. Openable but non-committable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full, separator-inclusive entry slice in render order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries, separators included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the navigable index space: enabled items only.
    pub fn navigable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_navigable()).count()
    }

    /// The i-th enabled item in source order.
    pub fn item_at(&self, index: usize) -> Result<&Item, EntryError> {
        self.navigable()
            .nth(index)
            .map(|(_, item)| item)
            .ok_or(EntryError::IndexOutOfRange {
                index,
                count: self.navigable_count(),
            })
    }

    /// Map a navigable index back to its position in the full entry list.
    ///
    /// Rendering uses this to draw the focus highlight on the correct row of
    /// a list that also contains separators and disabled items.
    pub fn raw_index_of(&self, index: usize) -> Result<usize, EntryError> {
        self.navigable()
            .nth(index)
            .map(|(raw, _)| raw)
            .ok_or(EntryError::IndexOutOfRange {
                index,
                count: self.navigable_count(),
            })
    }

    /// Find the navigable index of the enabled item with the given id.
    ///
    /// Returns `None` for unknown ids and for items that exist but are
    /// disabled (focus cannot land on them).
    pub fn navigable_index_of(&self, id: &str) -> Option<usize> {
        self.navigable()
            .position(|(_, item)| item.id == id)
    }

    /// The item marked as current selection, if any.
    pub fn current_item(&self) -> Option<&Item> {
        self.entries.iter().find_map(|e| match e {
            Entry::Item(item) if item.current => Some(item),
            _ => None,
        })
    }

    /// Enabled items paired with their raw positions, in source order.
    fn navigable(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.entries.iter().enumerate().filter_map(|(raw, e)| match e {
            Entry::Item(item) if !item.disabled => Some((raw, item)),
            _ => None,
        })
    }
}

/// Collapse separator runs and trim separators from both ends.
fn normalize_separators(entries: Vec<Entry>) -> Vec<Entry> {
    let mut out: Vec<Entry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Entry::Separator => {
                if matches!(out.last(), Some(Entry::Item(_))) {
                    out.push(Entry::Separator);
                }
            }
            item => out.push(item),
        }
    }
    if matches!(out.last(), Some(Entry::Separator)) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: Vec<Entry>) -> EntryList {
        EntryList::new(entries).unwrap()
    }

    #[test]
    fn empty_list_is_valid() {
        let l = EntryList::empty();
        assert_eq!(l.navigable_count(), 0);
        assert!(l.is_empty());
        assert_eq!(
            l.item_at(0),
            Err(EntryError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn empty_id_fails_fast() {
        let err = EntryList::new(vec![Entry::item("", "Nameless")]).unwrap_err();
        assert_eq!(err, EntryError::EmptyId { position: 0 });
    }

    #[test]
    fn duplicate_id_fails_fast() {
        let err = EntryList::new(vec![
            Entry::item("edit", "Edit"),
            Entry::item("edit", "Edit again"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            EntryError::DuplicateId {
                id: "edit".to_string()
            }
        );
    }

    #[test]
    fn disabled_items_are_not_navigable() {
        let l = list(vec![
            Entry::item("a", "A"),
            Entry::Item(Item::new("b", "B").disabled(true)),
            Entry::item("c", "C"),
        ]);
        assert_eq!(l.navigable_count(), 2);
        assert_eq!(l.item_at(0).unwrap().id, "a");
        assert_eq!(l.item_at(1).unwrap().id, "c");
    }

    #[test]
    fn all_disabled_yields_empty_space() {
        let l = list(vec![
            Entry::Item(Item::new("a", "A").disabled(true)),
            Entry::Item(Item::new("b", "B").disabled(true)),
        ]);
        assert_eq!(l.navigable_count(), 0);
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn raw_index_skips_separators_and_disabled() {
        let l = list(vec![
            Entry::item("a", "A"),
            Entry::separator(),
            Entry::Item(Item::new("b", "B").disabled(true)),
            Entry::item("c", "C"),
        ]);
        assert_eq!(l.raw_index_of(0).unwrap(), 0);
        assert_eq!(l.raw_index_of(1).unwrap(), 3);
        assert_eq!(
            l.raw_index_of(2),
            Err(EntryError::IndexOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn navigable_index_of_id() {
        let l = list(vec![
            Entry::item("a", "A"),
            Entry::Item(Item::new("b", "B").disabled(true)),
            Entry::item("c", "C"),
        ]);
        assert_eq!(l.navigable_index_of("a"), Some(0));
        assert_eq!(l.navigable_index_of("c"), Some(1));
        // Disabled: present in the list but focus cannot land on it
        assert_eq!(l.navigable_index_of("b"), None);
        assert_eq!(l.navigable_index_of("missing"), None);
    }

    #[test]
    fn separator_runs_collapse() {
        let l = list(vec![
            Entry::separator(),
            Entry::item("a", "A"),
            Entry::separator(),
            Entry::separator(),
            Entry::item("b", "B"),
            Entry::separator(),
        ]);
        assert_eq!(
            l.entries(),
            &[
                Entry::item("a", "A"),
                Entry::separator(),
                Entry::item("b", "B"),
            ]
        );
    }

    #[test]
    fn current_item_lookup() {
        let l = list(vec![
            Entry::item("a", "A"),
            Entry::Item(Item::new("b", "B").current(true)),
        ]);
        assert_eq!(l.current_item().unwrap().id, "b");
        assert!(list(vec![Entry::item("a", "A")]).current_item().is_none());
    }
}
