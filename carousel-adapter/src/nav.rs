use carousel::{Displacement, WrapMode};

/// Host-side navigation state: the focused position and the global navigation counter.
///
/// User steps move both; corrections requested by the engine move only the position, so they
/// are never mistaken for navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigator {
    len: usize,
    position: usize,
    global_counter: i64,
    wrap_mode: WrapMode,
}

impl Navigator {
    pub fn new(len: usize, wrap_mode: WrapMode) -> Self {
        Self {
            len,
            position: 0,
            global_counter: 0,
            wrap_mode,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn global_counter(&self) -> i64 {
        self.global_counter
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        self.wrap_mode = wrap_mode;
    }

    /// Updates the list length, clamping the position into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.position = self.position.min(len.saturating_sub(1));
    }

    fn clamp(&self, index: i64) -> usize {
        index.clamp(0, self.len.saturating_sub(1) as i64) as usize
    }

    /// Moves by `delta` user steps.
    ///
    /// Wraps around in [`WrapMode::Infinite`] and stops at the ends in [`WrapMode::Finite`].
    /// Returns the number of steps actually taken, which is also what the global counter
    /// advanced by.
    pub fn step(&mut self, delta: i64) -> i64 {
        if self.len == 0 || delta == 0 {
            return 0;
        }
        let from = self.position as i64;
        let taken = match self.wrap_mode {
            WrapMode::Infinite => {
                self.position = (from + delta).rem_euclid(self.len as i64) as usize;
                delta
            }
            WrapMode::Finite => {
                self.position = self.clamp(from.saturating_add(delta));
                self.position as i64 - from
            }
        };
        self.global_counter = self.global_counter.saturating_add(taken);
        taken
    }

    /// Jumps straight to `index` (clamped). Counts as navigation.
    pub fn go_to(&mut self, index: usize) -> i64 {
        if self.len == 0 {
            return 0;
        }
        let from = self.position as i64;
        self.position = index.min(self.len - 1);
        let taken = self.position as i64 - from;
        self.global_counter = self.global_counter.saturating_add(taken);
        taken
    }

    /// Applies a correction from the engine. Does not count as navigation.
    pub fn apply(&mut self, displacement: &Displacement) {
        if self.len == 0 {
            return;
        }
        self.position = self.clamp((self.position as i64).saturating_add(displacement.delta));
    }
}
