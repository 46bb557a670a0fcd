use crate::state::Snapshot;
use crate::{CarouselKey, Displacement, NavDirection};

/// How the focused slot relates to what the snapshot remembers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reconciliation {
    /// The slot still holds what it held before. Navigation bookkeeping proceeds from
    /// `position`.
    Unchanged,
    /// The list changed under the focus but the tracked item landed right under it.
    Realigned,
    /// The list changed under the focus and the tracked item now lives at `target`.
    Moved {
        target: usize,
        displacement: Displacement,
    },
    /// A previous correction towards `target` has not been applied by the host yet.
    Pending {
        target: usize,
        displacement: Displacement,
    },
    /// The list changed under the focus and the tracked item is gone.
    Lost,
}

impl Reconciliation {
    pub(crate) fn displacement(&self) -> Option<Displacement> {
        match self {
            Self::Moved { displacement, .. } | Self::Pending { displacement, .. } => {
                Some(*displacement)
            }
            Self::Unchanged | Self::Realigned | Self::Lost => None,
        }
    }
}

fn correction(target: usize, position: usize) -> Displacement {
    Displacement::silent(target as i64 - position as i64)
}

/// Detects a list replacement under the focus and locates the tracked item in the new list.
///
/// `keys` are the keys of the current list and `position < keys.len()`.
pub(crate) fn reconcile<K: CarouselKey>(
    keys: &[K],
    position: usize,
    direction: Option<NavDirection>,
    snapshot: &Snapshot<K>,
) -> Reconciliation {
    let current = &keys[position];
    let mismatch = snapshot.previous_keys.get(position) != Some(current);

    let Some(previous_key) = snapshot.previous_key.as_ref() else {
        return if mismatch {
            Reconciliation::Lost
        } else {
            Reconciliation::Unchanged
        };
    };

    if mismatch {
        return match keys.iter().position(|k| k == previous_key) {
            Some(target) if target == position => Reconciliation::Realigned,
            Some(target) => Reconciliation::Moved {
                target,
                displacement: correction(target, position),
            },
            None => Reconciliation::Lost,
        };
    }

    // Same list as last cycle. If a correction is still outstanding and the user has not
    // navigated since, the host simply has not applied it yet: ask again.
    match snapshot.pending_target {
        Some(target)
            if direction.is_none()
                && target != position
                && keys.get(target) == Some(previous_key) =>
        {
            Reconciliation::Pending {
                target,
                displacement: correction(target, position),
            }
        }
        _ => Reconciliation::Unchanged,
    }
}
