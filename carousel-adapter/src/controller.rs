use alloc::vec::Vec;

use carousel::{
    Carousel, CarouselKey, CarouselOptions, CycleOutcome, Displacement, RenderSlot,
};

use crate::{Easing, Navigator, Tween};

/// A framework-neutral controller that owns a [`Carousel`], the item list and the navigation
/// state, and applies the engine's corrections itself.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_items` when the host supplies a new list
/// - `next` / `prev` / `go_to` on user input
/// - `tick(now_ms)` each frame to sample the step animation
///
/// Rendering uses `window()`, with each slot drawn at `slot.offset + tick(now_ms)`.
pub struct Controller<T, K> {
    carousel: Carousel<T, K>,
    nav: Navigator,
    items: Vec<T>,
    tween: Option<Tween>,
    step_duration_ms: u64,
    easing: Easing,
}

impl<T: core::fmt::Debug, K: core::fmt::Debug> core::fmt::Debug for Controller<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("carousel", &self.carousel)
            .field("nav", &self.nav)
            .field("items", &self.items)
            .field("tween", &self.tween)
            .field("step_duration_ms", &self.step_duration_ms)
            .field("easing", &self.easing)
            .finish()
    }
}

impl<T, K: CarouselKey> Controller<T, K> {
    pub fn new(options: CarouselOptions<T, K>) -> Self {
        Self {
            nav: Navigator::new(0, options.wrap_mode),
            carousel: Carousel::new(options),
            items: Vec::new(),
            tween: None,
            step_duration_ms: 0,
            easing: Easing::default(),
        }
    }

    /// Animates user steps over `duration_ms`. Zero disables step animation.
    pub fn with_step_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.step_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<T, K> {
        &self.carousel
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn set_options(&mut self, options: CarouselOptions<T, K>, now_ms: u64) -> CycleOutcome {
        self.nav.set_wrap_mode(options.wrap_mode);
        self.carousel.set_options(options);
        self.sync(now_ms)
    }

    /// Replaces the item list, keeping the focused item in focus when it survived.
    ///
    /// Returns the outcome of the cycle that observed the new list.
    pub fn set_items(&mut self, items: Vec<T>, now_ms: u64) -> CycleOutcome {
        self.items = items;
        self.nav.set_len(self.items.len());
        self.sync(now_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Steps forward one item. Returns `false` when nothing moved (empty list, finite end).
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.step(1, now_ms)
    }

    /// Steps backward one item. Returns `false` when nothing moved.
    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.step(-1, now_ms)
    }

    pub fn step(&mut self, delta: i64, now_ms: u64) -> bool {
        let taken = self.nav.step(delta);
        self.after_move(taken, now_ms)
    }

    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        let taken = self.nav.go_to(index);
        self.after_move(taken, now_ms)
    }

    fn after_move(&mut self, taken: i64, now_ms: u64) -> bool {
        if taken == 0 {
            return false;
        }
        self.animate_from(taken as f32, self.step_duration_ms, now_ms);
        self.sync(now_ms);
        true
    }

    /// Starts (or extends) an animation that brings the window from `shift` back to rest.
    ///
    /// The new focus was `shift` slots away from the old one, so drawing the new window shifted
    /// by `shift` reproduces the old frame.
    fn animate_from(&mut self, shift: f32, duration_ms: u64, now_ms: u64) {
        if duration_ms == 0 {
            self.tween = None;
            return;
        }
        let current = self.tween.map_or(0.0, |t| t.sample(now_ms));
        self.tween = Some(Tween::new(
            current + shift,
            0.0,
            now_ms,
            duration_ms,
            self.easing,
        ));
    }

    /// Advances the animation.
    ///
    /// Returns the visual offset to add to every slot offset while animating, and `None` once
    /// the window is at rest.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        if tween.is_done(now_ms) {
            self.tween = None;
            return None;
        }
        Some(tween.sample(now_ms))
    }

    pub fn window(&self) -> Vec<RenderSlot<'_, T, K>> {
        self.carousel.render_window(&self.items)
    }

    pub fn focused_item(&self) -> Option<&T> {
        self.items.get(self.carousel.focus()?)
    }

    fn apply(&mut self, displacement: &Displacement, now_ms: u64) {
        self.nav.apply(displacement);
        if !displacement.is_silent() {
            self.animate_from(
                displacement.delta as f32,
                displacement.duration_ms,
                now_ms,
            );
        }
    }

    /// Runs an engine cycle and applies any requested correction straight away.
    fn sync(&mut self, now_ms: u64) -> CycleOutcome {
        let outcome = self.carousel.update(
            &self.items,
            self.nav.position(),
            self.nav.global_counter(),
        );
        if let Some(displacement) = outcome.displacement {
            self.apply(&displacement, now_ms);
            self.carousel.update(
                &self.items,
                self.nav.position(),
                self.nav.global_counter(),
            );
        }
        outcome
    }
}
