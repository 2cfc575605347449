//! Ordered registry of mounted interactive items.
//!
//! Items register with an explicit [`ItemRank`] (their position among
//! siblings, as a path from the widget root). The ordered sequence is
//! re-derived from scratch on every mutation, so items may mount in any order.

use std::collections::HashMap;
use std::fmt;

/// Position of an item among its siblings.
///
/// A path of indices, compared lexicographically: `[1, 0]` (first item of the
/// second group) sorts after `[0, 5]` and before `[2]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemRank(Vec<usize>);

impl ItemRank {
    pub fn new(path: Vec<usize>) -> Self {
        Self(path)
    }

    /// Rank of a top-level item.
    pub fn at(index: usize) -> Self {
        Self(vec![index])
    }

    /// Rank of a child nested under this one.
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn path(&self) -> &[usize] {
        &self.0
    }
}

impl From<usize> for ItemRank {
    fn from(index: usize) -> Self {
        Self(vec![index])
    }
}

impl From<Vec<usize>> for ItemRank {
    fn from(path: Vec<usize>) -> Self {
        Self(path)
    }
}

/// A registered item.
#[derive(Debug, Clone)]
pub struct ItemRecord<P> {
    pub id: String,
    pub rank: ItemRank,
    pub disabled: bool,
    pub payload: P,
    /// Registration sequence number, used as the tie-break.
    seq: u64,
}

/// One entry of the derived order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    pub id: String,
    pub disabled: bool,
}

/// Identifies one particular registration of an id.
///
/// A token outlives re-registration of its id; unregistering through a stale
/// token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationToken(u64);

/// Mapping from id to record plus the derived ordered sequence.
#[derive(Debug)]
pub struct OrderedItemRegistry<P> {
    records: HashMap<String, ItemRecord<P>>,
    order: Vec<OrderEntry>,
    next_seq: u64,
}

impl<P> Default for OrderedItemRegistry<P> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<P> OrderedItemRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. A duplicate id overwrites the previous record.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        rank: ItemRank,
        disabled: bool,
        payload: P,
    ) -> RegistrationToken {
        let id = id.into();
        let seq = self.next_seq;
        self.next_seq += 1;

        let record = ItemRecord {
            id: id.clone(),
            rank,
            disabled,
            payload,
            seq,
        };
        if self.records.insert(id.clone(), record).is_some() {
            log::debug!("[registry] re-registered id={}", id);
        } else {
            log::trace!("[registry] registered id={}", id);
        }
        self.reorder();
        RegistrationToken(seq)
    }

    /// Remove an item by id. Absent ids are ignored.
    pub fn unregister(&mut self, id: &str) -> Option<ItemRecord<P>> {
        let removed = self.records.remove(id)?;
        log::trace!("[registry] unregistered id={}", id);
        self.reorder();
        Some(removed)
    }

    /// Remove an item only if `token` is its current registration.
    pub fn unregister_token(&mut self, id: &str, token: RegistrationToken) -> Option<ItemRecord<P>> {
        match self.records.get(id) {
            Some(record) if record.seq == token.0 => self.unregister(id),
            Some(_) => {
                log::trace!("[registry] stale unregister ignored id={}", id);
                None
            }
            None => None,
        }
    }

    /// Update the disabled flag of a registered item.
    pub fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(record) = self.records.get_mut(id) {
            if record.disabled != disabled {
                record.disabled = disabled;
                self.reorder();
            }
        }
    }

    /// The current order.
    pub fn order(&self) -> &[OrderEntry] {
        &self.order
    }

    /// Ids in order.
    pub fn ids(&self) -> Vec<String> {
        self.order.iter().map(|entry| entry.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ItemRecord<P>> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ItemRecord<P>> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Position of an id in the current order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|entry| entry.id == id)
    }

    /// Records in order.
    pub fn records(&self) -> impl Iterator<Item = &ItemRecord<P>> + '_ {
        self.order
            .iter()
            .filter_map(move |entry| self.records.get(&entry.id))
    }

    /// First record in order matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&ItemRecord<P>) -> bool) -> Option<&ItemRecord<P>> {
        self.records().find(|record| predicate(record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn reorder(&mut self) {
        let mut records: Vec<&ItemRecord<P>> = self.records.values().collect();
        // Rank first, registration order on ties.
        records.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.seq.cmp(&b.seq)));
        self.order = records
            .into_iter()
            .map(|record| OrderEntry {
                id: record.id.clone(),
                disabled: record.disabled,
            })
            .collect();
    }
}

/// Single-use release capability for a registration.
///
/// Calling [`Disposer::dispose`] or dropping the value runs the release once.
pub struct Disposer {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Disposer {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A disposer that does nothing.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("pending", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_order_follows_rank_not_mount_time() {
        let mut registry = OrderedItemRegistry::new();
        registry.register("c", ItemRank::at(2), false, ());
        registry.register("a", ItemRank::at(0), false, ());
        registry.register("b", ItemRank::at(1), false, ());

        assert_eq!(registry.ids(), vec!["a", "b", "c"]);

        registry.unregister("b");
        registry.register("b", ItemRank::at(1), false, ());
        assert_eq!(registry.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_ranks_sort_like_document_order() {
        let mut registry = OrderedItemRegistry::new();
        registry.register("g1-b", ItemRank::new(vec![1, 1]), false, ());
        registry.register("g0-a", ItemRank::new(vec![0, 0]), false, ());
        registry.register("g1-a", ItemRank::new(vec![1, 0]), false, ());
        registry.register("tail", ItemRank::at(2), false, ());

        assert_eq!(registry.ids(), vec!["g0-a", "g1-a", "g1-b", "tail"]);
    }

    #[test]
    fn test_equal_rank_falls_back_to_registration_order() {
        let mut registry = OrderedItemRegistry::new();
        registry.register("first", ItemRank::at(0), false, ());
        registry.register("second", ItemRank::at(0), false, ());
        registry.register("third", ItemRank::at(0), false, ());

        assert_eq!(registry.ids(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_id_last_registration_wins() {
        let mut registry = OrderedItemRegistry::new();
        let stale = registry.register("x", ItemRank::at(5), false, "old");
        registry.register("y", ItemRank::at(1), false, "y");
        registry.register("x", ItemRank::at(0), true, "new");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), vec!["x", "y"]);
        assert_eq!(registry.get("x").map(|r| r.payload), Some("new"));

        // The overwritten registration can no longer remove the item.
        assert!(registry.unregister_token("x", stale).is_none());
        assert!(registry.contains("x"));
    }

    #[test]
    fn test_unregister_absent_is_noop() {
        let mut registry: OrderedItemRegistry<()> = OrderedItemRegistry::new();
        assert!(registry.unregister("ghost").is_none());
        assert!(registry.is_empty());
        assert!(registry.order().is_empty());
    }

    #[test]
    fn test_disabled_flag_carried_into_order() {
        let mut registry = OrderedItemRegistry::new();
        registry.register("a", ItemRank::at(0), false, ());
        registry.register("b", ItemRank::at(1), true, ());
        assert!(registry.order()[1].disabled);

        registry.set_disabled("b", false);
        assert!(!registry.order()[1].disabled);
    }

    #[test]
    fn test_disposer_runs_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let disposer = Disposer::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        disposer.dispose();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let counter = Arc::clone(&count);
        {
            let _scoped = Disposer::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
