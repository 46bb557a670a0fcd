use alloc::string::{String, ToString};
use core::fmt;

use crate::RenderKey;

pub type ItemKey = u64;

/// Whether the carousel wraps around its ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// Slots past either end show items from the other end.
    #[default]
    Infinite,
    /// Slots past either end are placeholders.
    Finite,
}

impl WrapMode {
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavDirection {
    Forward,
    Backward,
}

impl NavDirection {
    /// Direction of the net movement between two global counter readings.
    ///
    /// Returns `None` when the counter did not move, or when the delta does not fit in an
    /// `i64` (treated as no movement).
    pub fn between(previous: i64, current: i64) -> Option<Self> {
        match current.checked_sub(previous)?.signum() {
            1 => Some(Self::Forward),
            -1 => Some(Self::Backward),
            _ => None,
        }
    }
}

/// A one-shot request for the navigation controller to move the focus by `delta` slots.
///
/// Consumed once by the host; the engine never applies it itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub delta: i64,
    pub duration_ms: u64,
}

impl Displacement {
    /// A non-animated correction.
    pub fn silent(delta: i64) -> Self {
        Self {
            delta,
            duration_ms: 0,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.duration_ms == 0
    }
}

/// What an update cycle did to the tracked identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Continuity {
    /// Nothing was tracked yet, or the list is empty.
    Fresh,
    /// The slot under the focus still holds the item the snapshot expects.
    Held,
    /// The list changed under the focus; the tracked item moved and a correction was issued.
    Corrected,
    /// The list changed under the focus and the tracked item is gone.
    Lost,
}

/// The result of one [`crate::Carousel::update`] cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Index the window is centred on, `None` for an empty list.
    pub focus: Option<usize>,
    pub displacement: Option<Displacement>,
    pub loop_delta: i64,
    pub continuity: Continuity,
}

impl CycleOutcome {
    pub(crate) fn empty() -> Self {
        Self {
            focus: None,
            displacement: None,
            loop_delta: 0,
            continuity: Continuity::Fresh,
        }
    }
}

/// What a render slot shows.
#[derive(Debug, PartialEq, Eq)]
pub enum SlotContent<'a, T> {
    Item(&'a T),
    /// Reserves layout space past the ends of a finite carousel.
    Placeholder,
}

impl<T> Clone for SlotContent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotContent<'_, T> {}

impl<'a, T> SlotContent<'a, T> {
    pub fn item(&self) -> Option<&'a T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// One entry of the render window.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderSlot<'a, T, K> {
    pub key: RenderKey<K>,
    /// Distance from the focused slot; negative before it, positive after it.
    pub offset: i64,
    pub content: SlotContent<'a, T>,
}

impl<T, K: Clone> Clone for RenderSlot<'_, T, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            offset: self.offset,
            content: self.content,
        }
    }
}

impl<T, K: fmt::Display> RenderSlot<'_, T, K> {
    pub fn key_string(&self) -> String {
        self.key.to_string()
    }
}
