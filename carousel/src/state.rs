use alloc::vec::Vec;

/// What the engine remembers between update cycles.
///
/// Replaced as a whole at the end of a cycle, never patched mid-cycle.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so a host can
/// persist it and restore the carousel without a visual jump.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<K> {
    /// Keys of the list observed by the last cycle, in list order.
    pub previous_keys: Vec<K>,
    pub previous_global_counter: i64,
    /// Key shown at the focus at the end of the last cycle.
    pub previous_key: Option<K>,
    pub loop_offset: i64,
    /// Index a silent correction pointed at that the host has not applied yet.
    pub pending_target: Option<usize>,
}

impl<K> Snapshot<K> {
    pub(crate) fn initial(previous_keys: Vec<K>, previous_global_counter: i64) -> Self {
        Self {
            previous_keys,
            previous_global_counter,
            previous_key: None,
            loop_offset: 0,
            pending_target: None,
        }
    }
}

/// Fields to replace in a [`Snapshot`]. `None` keeps the stored value.
#[derive(Debug)]
pub(crate) struct Commit<K> {
    pub keys: Vec<K>,
    pub global_counter: i64,
    pub key: Option<K>,
    pub loop_offset: Option<i64>,
    pub pending_target: Option<Option<usize>>,
}

impl<K> Commit<K> {
    pub(crate) fn new(keys: Vec<K>, global_counter: i64) -> Self {
        Self {
            keys,
            global_counter,
            key: None,
            loop_offset: None,
            pending_target: None,
        }
    }
}

/// Sole owner of the [`Snapshot`].
#[derive(Clone, Debug)]
pub(crate) struct IdentityTracker<K> {
    snapshot: Option<Snapshot<K>>,
}

impl<K: Clone> IdentityTracker<K> {
    pub(crate) fn new() -> Self {
        Self { snapshot: None }
    }

    /// Returns the current snapshot, seeding it from the first observation on first use.
    pub(crate) fn observe(&mut self, keys: &[K], global_counter: i64) -> &Snapshot<K> {
        self.snapshot
            .get_or_insert_with(|| Snapshot::initial(keys.to_vec(), global_counter))
    }

    pub(crate) fn peek(&self) -> Option<&Snapshot<K>> {
        self.snapshot.as_ref()
    }

    pub(crate) fn commit(&mut self, commit: Commit<K>) {
        let Commit {
            keys,
            global_counter,
            key,
            loop_offset,
            pending_target,
        } = commit;
        let snapshot = self
            .snapshot
            .get_or_insert_with(|| Snapshot::initial(Vec::new(), global_counter));
        snapshot.previous_keys = keys;
        snapshot.previous_global_counter = global_counter;
        if key.is_some() {
            snapshot.previous_key = key;
        }
        if let Some(loop_offset) = loop_offset {
            snapshot.loop_offset = loop_offset;
        }
        if let Some(pending_target) = pending_target {
            snapshot.pending_target = pending_target;
        }
    }

    pub(crate) fn replace(&mut self, snapshot: Option<Snapshot<K>>) {
        self.snapshot = snapshot;
    }
}
