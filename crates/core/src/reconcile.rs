//! Local cache of a remote collection and the rules for bringing it back in line with the
//! server after a mutation.
//!
//! Remote operations produce a [`Patch`]; applying it to a [`Collection`] is synchronous so a
//! view can run the network call first and only then touch its state.

use std::fmt::Debug;

/// An entity with a stable server-assigned identifier.
pub trait Identified {
    type Id: Clone + Eq + Debug + Send + Sync;

    fn id(&self) -> &Self::Id;
}

/// How a collection reacts to a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Drop the matching entry locally.
    #[default]
    RemoveLocal,
    /// Drop the entry and mark the collection stale because the delete has effects the client
    /// cannot observe (e.g. quiz deletion cascading into class assignments).
    RemoveAndInvalidate,
}

/// A change to apply to a cached collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T: Identified> {
    /// Nothing to do (e.g. the remote call failed).
    Keep,
    /// Replace every entry with the server's response.
    ReplaceAll(Vec<T>),
    /// Drop the entry with this id.
    Remove(T::Id),
    /// Drop the entry with this id and mark the collection stale.
    RemoveAndInvalidate(T::Id),
    /// Replace the entry with the same id in place.
    Replace(T),
    /// Mark the collection stale; the owner must refetch.
    Invalidate,
}

/// What applying a patch actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Unchanged,
    Loaded,
    Removed,
    Replaced,
    Invalidated,
}

/// Locally held copy of a remote collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    stale: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stale: true,
        }
    }
}

impl<T: Identified> Collection<T> {
    /// An empty collection that has not been fetched yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            stale: false,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True until the first load and after any invalidation.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the whole collection. Initial loads never diff.
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.stale = false;
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Remove the entry with `id`, if present.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Replace the entry sharing `item`'s id, preserving its position.
    ///
    /// Returns false (and drops `item`) when no entry matches.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, patch: Patch<T>) -> Reconciliation {
        match patch {
            Patch::Keep => Reconciliation::Unchanged,
            Patch::ReplaceAll(items) => {
                self.load(items);
                Reconciliation::Loaded
            }
            Patch::Remove(id) => {
                if self.remove(&id).is_some() {
                    Reconciliation::Removed
                } else {
                    Reconciliation::Unchanged
                }
            }
            Patch::RemoveAndInvalidate(id) => {
                self.remove(&id);
                self.invalidate();
                Reconciliation::Invalidated
            }
            Patch::Replace(item) => {
                if self.replace(item) {
                    Reconciliation::Replaced
                } else {
                    Reconciliation::Unchanged
                }
            }
            Patch::Invalidate => {
                self.invalidate();
                Reconciliation::Invalidated
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Identified for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn rows() -> Collection<Row> {
        Collection::from_items(vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
            Row { id: 3, label: "c" },
        ])
    }

    #[test]
    fn new_collection_is_stale_until_loaded() {
        let mut list: Collection<Row> = Collection::new();
        assert!(list.is_stale());
        list.load(vec![Row { id: 9, label: "z" }]);
        assert!(!list.is_stale());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let mut list = rows();
        let outcome = list.apply(Patch::Replace(Row { id: 2, label: "B" }));
        assert_eq!(outcome, Reconciliation::Replaced);
        let labels: Vec<_> = list.items().iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["a", "B", "c"]);
    }

    #[test]
    fn replace_of_unknown_id_is_a_no_op() {
        let mut list = rows();
        let before = list.clone();
        assert_eq!(
            list.apply(Patch::Replace(Row { id: 42, label: "x" })),
            Reconciliation::Unchanged
        );
        assert_eq!(list, before);
    }

    #[test]
    fn remove_missing_id_leaves_items_untouched() {
        let mut list = rows();
        let before = list.items().to_vec();
        assert_eq!(list.apply(Patch::Remove(7)), Reconciliation::Unchanged);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn remove_and_invalidate_marks_stale() {
        let mut list = rows();
        assert_eq!(
            list.apply(Patch::RemoveAndInvalidate(1)),
            Reconciliation::Invalidated
        );
        assert!(list.is_stale());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn replace_all_overwrites_everything() {
        let mut list = rows();
        list.invalidate();
        list.apply(Patch::ReplaceAll(vec![Row { id: 5, label: "e" }]));
        assert!(!list.is_stale());
        assert_eq!(list.items(), &[Row { id: 5, label: "e" }]);
    }
}
