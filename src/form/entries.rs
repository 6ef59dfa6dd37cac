//! Ordered, dynamically sized entry collections (fluids, staff members)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of one entry within an [`EntryList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of entries with monotonic identity.
///
/// Ids are handed out from a counter that only moves forward, so an id freed
/// by [`EntryList::remove`] is never assigned again. Display ordinals are
/// positional and computed on demand.
#[derive(Debug, Clone)]
pub struct EntryList<T> {
    entries: Vec<(EntryId, T)>,
    next_id: u32,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Default> EntryList<T> {
    /// Append a blank entry and return its id
    pub fn add(&mut self) -> EntryId {
        self.push(T::default())
    }

    /// List holding a single blank entry with id 1
    pub fn with_one() -> Self {
        let mut list = Self::default();
        list.add();
        list
    }
}

impl<T> EntryList<T> {
    /// Append `record` and return the id assigned to it
    pub fn push(&mut self, record: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, record));
        id
    }

    /// Remove the entry with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let position = self.position(id)?;
        Some(self.entries.remove(position).1)
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, r)| r)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, r)| r)
    }

    /// Zero-based position of `id` in display order
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|(i, _)| *i == id)
    }

    /// One-based label number shown for `id` ("Fluid 2")
    pub fn ordinal(&self, id: EntryId) -> Option<usize> {
        self.position(id).map(|p| p + 1)
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|(i, _)| *i).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> {
        self.entries.iter().map(|(i, r)| (*i, r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &EntryList<()>) -> Vec<u32> {
        list.ids().into_iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_sequential_adds_from_empty() {
        let mut list: EntryList<()> = EntryList::default();
        for _ in 0..5 {
            list.add();
        }
        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_remove_first_then_add() {
        let mut list: EntryList<()> = EntryList::default();
        list.add();
        list.add();

        list.remove(EntryId(1));
        list.add();

        assert_eq!(ids(&list), vec![2, 3]);
    }

    #[test]
    fn test_ids_never_reused_after_removing_highest() {
        let mut list: EntryList<()> = EntryList::default();
        list.add();
        list.add();
        list.add();

        list.remove(EntryId(3));
        let new_id = list.add();

        assert_eq!(new_id, EntryId(4));
        assert_eq!(ids(&list), vec![1, 2, 4]);
    }

    #[test]
    fn test_ids_keep_growing_after_emptying() {
        let mut list: EntryList<()> = EntryList::with_one();
        list.remove(EntryId(1));
        assert!(list.is_empty());

        assert_eq!(list.add(), EntryId(2));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut list: EntryList<()> = EntryList::with_one();
        assert!(list.remove(EntryId(42)).is_none());
        assert_eq!(ids(&list), vec![1]);
    }

    #[test]
    fn test_ordinal_is_position_based() {
        let mut list: EntryList<()> = EntryList::default();
        let a = list.add();
        let b = list.add();
        let c = list.add();
        assert_eq!(list.ordinal(c), Some(3));

        list.remove(a);
        assert_eq!(list.ordinal(b), Some(1));
        assert_eq!(list.ordinal(c), Some(2));
        assert_eq!(list.ordinal(a), None);
    }

    #[test]
    fn test_get_mut_updates_record() {
        let mut list: EntryList<String> = EntryList::default();
        let id = list.add();
        if let Some(record) = list.get_mut(id) {
            record.push_str("Castrol");
        }
        assert_eq!(list.get(id).map(String::as_str), Some("Castrol"));
    }
}
