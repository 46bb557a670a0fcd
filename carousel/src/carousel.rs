use alloc::vec::Vec;

use crate::looping;
use crate::reconcile::{Reconciliation, reconcile};
use crate::state::{Commit, IdentityTracker, Snapshot};
use crate::window::{WindowParams, build_window, for_each_window_slot};
use crate::{
    CarouselKey, CarouselOptions, Continuity, CycleOutcome, ItemKey, NavDirection, RenderSlot,
};

/// A headless carousel navigation engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold the items. Your host passes the current list to every call.
/// - Your host drives it by calling [`Carousel::update`] whenever the list, the position or the
///   global navigation counter changes.
/// - Corrections come back as [`crate::Displacement`] commands for the host's navigation
///   controller to apply.
/// - Rendering is exposed via [`Carousel::for_each_slot`] / [`Carousel::render_window`].
///
/// For a ready-made navigation controller, see the `carousel-adapter` crate.
pub struct Carousel<T, K = ItemKey> {
    options: CarouselOptions<T, K>,
    tracker: IdentityTracker<K>,
    focus: Option<usize>,
}

impl<T, K: Clone> Clone for Carousel<T, K> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            tracker: self.tracker.clone(),
            focus: self.focus,
        }
    }
}

impl<T, K: core::fmt::Debug> core::fmt::Debug for Carousel<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("tracker", &self.tracker)
            .field("focus", &self.focus)
            .finish()
    }
}

impl<T, K: CarouselKey> Carousel<T, K> {
    pub fn new(options: CarouselOptions<T, K>) -> Self {
        cdebug!(
            preload_radius = options.preload_radius,
            wrap_mode = ?options.wrap_mode,
            enabled = options.enabled,
            "Carousel::new"
        );
        Self {
            options,
            tracker: IdentityTracker::new(),
            focus: None,
        }
    }

    pub fn options(&self) -> &CarouselOptions<T, K> {
        &self.options
    }

    /// Replaces the options. The tracked identity and loop offset survive, except that
    /// disabling the carousel forgets them.
    pub fn set_options(&mut self, options: CarouselOptions<T, K>) {
        let was_enabled = self.options.enabled;
        self.options = options;
        ctrace!(
            preload_radius = self.options.preload_radius,
            wrap_mode = ?self.options.wrap_mode,
            enabled = self.options.enabled,
            "Carousel::set_options"
        );
        if was_enabled && !self.options.enabled {
            self.reset();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<T, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.update_options(|o| o.enabled = enabled);
    }

    /// Index the window is centred on after the last cycle.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn loop_offset(&self) -> i64 {
        self.tracker.peek().map_or(0, |s| s.loop_offset)
    }

    /// Key of the item the carousel is tracking.
    pub fn focused_key(&self) -> Option<&K> {
        self.tracker.peek().and_then(|s| s.previous_key.as_ref())
    }

    pub fn snapshot(&self) -> Option<&Snapshot<K>> {
        self.tracker.peek()
    }

    /// Restores a previously captured snapshot. The window stays empty until the next cycle.
    pub fn restore_snapshot(&mut self, snapshot: Snapshot<K>) {
        cdebug!(
            loop_offset = snapshot.loop_offset,
            len = snapshot.previous_keys.len(),
            "Carousel::restore_snapshot"
        );
        self.tracker.replace(Some(snapshot));
        self.focus = None;
    }

    /// Forgets everything; the next cycle starts from a fresh snapshot.
    pub fn reset(&mut self) {
        self.tracker.replace(None);
        self.focus = None;
    }

    /// Runs one update cycle for the current list, position and global navigation counter.
    ///
    /// Call this whenever any of the three changes. Re-running with unchanged inputs leaves the
    /// snapshot and the window unchanged, so redundant calls are harmless.
    pub fn update(&mut self, items: &[T], position: usize, global_counter: i64) -> CycleOutcome {
        if !self.options.enabled {
            self.focus = None;
            return CycleOutcome::empty();
        }

        let keys: Vec<K> = items.iter().map(|item| self.options.key_of(item)).collect();
        let snapshot = self.tracker.observe(&keys, global_counter);
        let direction = NavDirection::between(snapshot.previous_global_counter, global_counter);

        if keys.is_empty() {
            ctrace!(global_counter, "Carousel::update: empty list");
            let mut commit = Commit::new(keys, global_counter);
            commit.pending_target = Some(None);
            self.tracker.commit(commit);
            self.focus = None;
            return CycleOutcome::empty();
        }

        let len = keys.len();
        let position = if position < len {
            position
        } else {
            cwarn!(position, len, "Carousel::update: position out of range; clamping");
            len - 1
        };

        let reconciliation = reconcile(&keys, position, direction, snapshot);
        let displacement = reconciliation.displacement();
        let loop_offset = snapshot.loop_offset;
        let had_pending = snapshot.pending_target.is_some();
        let previous_key = snapshot.previous_key.clone();

        let outcome = match reconciliation {
            Reconciliation::Pending { target, .. } => {
                ctrace!(
                    target_index = target,
                    position,
                    "Carousel::update: correction still pending"
                );
                self.focus = Some(target);
                CycleOutcome {
                    focus: Some(target),
                    displacement,
                    loop_delta: 0,
                    continuity: Continuity::Corrected,
                }
            }
            Reconciliation::Moved { target, .. } => {
                cdebug!(
                    target_index = target,
                    position,
                    key = ?previous_key,
                    "Carousel::update: list changed under focus; re-anchoring"
                );
                let mut commit = Commit::new(keys, global_counter);
                commit.pending_target = Some(Some(target));
                self.tracker.commit(commit);
                self.focus = Some(target);
                CycleOutcome {
                    focus: Some(target),
                    displacement,
                    loop_delta: 0,
                    continuity: Continuity::Corrected,
                }
            }
            Reconciliation::Realigned => {
                ctrace!(position, "Carousel::update: list changed; tracked item still in focus");
                let mut commit = Commit::new(keys, global_counter);
                commit.pending_target = Some(None);
                self.tracker.commit(commit);
                self.focus = Some(position);
                CycleOutcome {
                    focus: Some(position),
                    displacement: None,
                    loop_delta: 0,
                    continuity: Continuity::Held,
                }
            }
            Reconciliation::Lost => {
                let continuity = match &previous_key {
                    Some(lost) => {
                        cdebug!(key = ?lost, position, "Carousel::update: focused item removed");
                        if let Some(cb) = &self.options.on_continuity_lost {
                            cb(lost);
                        }
                        Continuity::Lost
                    }
                    None => Continuity::Fresh,
                };
                let mut commit = Commit::new(keys, global_counter);
                commit.key = Some(commit.keys[position].clone());
                commit.pending_target = Some(None);
                self.tracker.commit(commit);
                self.focus = Some(position);
                CycleOutcome {
                    focus: Some(position),
                    displacement: None,
                    loop_delta: 0,
                    continuity,
                }
            }
            Reconciliation::Unchanged => {
                let step = looping::track(
                    position,
                    len,
                    direction,
                    &keys[position],
                    previous_key.as_ref(),
                );
                if step.delta != 0 {
                    ctrace!(
                        delta = step.delta,
                        loop_offset = loop_offset + step.delta,
                        "Carousel::update: crossed loop boundary"
                    );
                }
                let mut commit = Commit::new(keys, global_counter);
                if step.retrack {
                    commit.key = Some(commit.keys[position].clone());
                    commit.loop_offset = Some(loop_offset + step.delta);
                }
                if had_pending {
                    commit.pending_target = Some(None);
                }
                self.tracker.commit(commit);
                self.focus = Some(position);
                CycleOutcome {
                    focus: Some(position),
                    displacement: None,
                    loop_delta: step.delta,
                    continuity: if previous_key.is_some() {
                        Continuity::Held
                    } else {
                        Continuity::Fresh
                    },
                }
            }
        };

        ctrace!(
            len,
            position,
            global_counter,
            focus = ?outcome.focus,
            continuity = ?outcome.continuity,
            "Carousel::update"
        );
        outcome
    }

    /// Window inputs for the focus of the last cycle, `None` before a cycle or for an empty
    /// list.
    pub fn window_params(&self) -> Option<WindowParams> {
        if !self.options.enabled {
            return None;
        }
        Some(WindowParams {
            focus: self.focus?,
            loop_offset: self.loop_offset(),
            preload_radius: self.options.preload_radius,
            wrap_mode: self.options.wrap_mode,
        })
    }

    /// Emits the render window without allocating.
    ///
    /// `items` must be the list passed to the last [`Carousel::update`].
    pub fn for_each_slot<'a>(&self, items: &'a [T], f: impl FnMut(RenderSlot<'a, T, K>)) {
        let Some(params) = self.window_params() else {
            return;
        };
        for_each_window_slot(items, params, |item| self.options.key_of(item), f);
    }

    /// Collects the render window into a `Vec`.
    ///
    /// `items` must be the list passed to the last [`Carousel::update`].
    pub fn render_window<'a>(&self, items: &'a [T]) -> Vec<RenderSlot<'a, T, K>> {
        let Some(params) = self.window_params() else {
            return Vec::new();
        };
        build_window(items, params, |item| self.options.key_of(item))
    }

    /// Distinct keys of the items backing the window, in window order, placeholders excluded.
    ///
    /// Useful for hosts that prefetch content for the preloaded neighbours.
    pub fn preload_keys(&self, items: &[T]) -> Vec<K> {
        let mut out: Vec<K> = Vec::new();
        self.for_each_slot(items, |slot| {
            if !slot.content.is_placeholder() && !out.contains(&slot.key.key) {
                out.push(slot.key.key);
            }
        });
        out
    }
}
