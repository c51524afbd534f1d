use std::collections::HashSet;
use std::hash::Hash;

/// Keyed diff between the marks on screen and the marks wanted next.
///
/// The three sets are disjoint. `entered` and `retained` follow the order of
/// the new keys, `removed` the order of the old ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<K> {
    pub entered: Vec<K>,
    pub retained: Vec<K>,
    pub removed: Vec<K>,
}

impl<K> Reconciliation<K> {
    pub fn is_noop(&self) -> bool {
        self.entered.is_empty() && self.removed.is_empty()
    }
}

pub fn reconcile<K>(old: &[K], new: &[K]) -> Reconciliation<K>
where
    K: Eq + Hash + Clone,
{
    let old_set: HashSet<&K> = old.iter().collect();
    let new_set: HashSet<&K> = new.iter().collect();

    let (retained, entered): (Vec<K>, Vec<K>) =
        new.iter().cloned().partition(|k| old_set.contains(k));
    let removed = old
        .iter()
        .filter(|k| !new_set.contains(k))
        .cloned()
        .collect();

    Reconciliation {
        entered,
        retained,
        removed,
    }
}
