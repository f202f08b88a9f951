use crate::key::{KeyMap, StateKey};
use crate::{Bounds, PlaceeId, PositionMode};

/// Last-known placement data for a single placee.
///
/// `anchor` is the caller's anchor specification, opaque to this engine; it
/// is recorded so the owning behaviour can skip redundant repositioning and
/// re-resolve on demand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceeState<A> {
    pub mode: PositionMode,
    pub anchor: A,
    pub bounds: Option<Bounds>,
}

/// Per-component map from placee identifier to [`PlaceeState`].
///
/// Owned by the positioning-capable component instance that created it;
/// nothing else writes to it. Entries are overwritten on every placement
/// and removed by [`clear`](Self::clear) / [`clear_all`](Self::clear_all).
#[derive(Clone, Debug)]
pub struct PositioningState<A, K = PlaceeId> {
    entries: KeyMap<K, PlaceeState<A>>,
}

impl<A, K> Default for PositioningState<A, K> {
    fn default() -> Self {
        Self {
            entries: KeyMap::new(),
        }
    }
}

impl<A, K: StateKey> PositioningState<A, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional overwrite.
    pub fn set(&mut self, id: K, data: PlaceeState<A>) {
        self.entries.insert(id, data);
    }

    /// Returns the record for `id`, or `None` when it was never placed (or
    /// was cleared).
    pub fn get(&self, id: &K) -> Option<&PlaceeState<A>> {
        self.entries.get(id)
    }

    /// Removes one entry. Missing ids are a no-op.
    pub fn clear(&mut self, id: &K) {
        self.entries.remove(id);
    }

    /// Empties the entire store; used on full component teardown/reset.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
