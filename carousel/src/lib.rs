//! A headless carousel navigation and identity-reconciliation engine.
//!
//! For a ready-made navigation controller (stepping, wraparound, tweens), see the
//! `carousel-adapter` crate.
//!
//! On every update the engine decides which item is focused and which items surround it in a
//! bounded, optionally wraparound, preload window:
//! - the list can be replaced wholesale between updates; when the focused item still exists
//!   somewhere in the new list, the engine asks the host to move to it silently
//! - in infinite mode, crossings of the seam are counted so both copies of an item around the
//!   seam get distinct render keys
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the current item list and a key for each item
//! - the focused position
//! - a global navigation counter that moves with every user step
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod key;
mod looping;
mod options;
mod reconcile;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use key::{CarouselKey, RenderKey};
pub use options::{CarouselOptions, GetItemKey, OnContinuityLost};
pub use state::Snapshot;
pub use types::{
    Continuity, CycleOutcome, Displacement, ItemKey, NavDirection, RenderSlot, SlotContent,
    WrapMode,
};
pub use window::{WindowParams, build_window, for_each_window_slot};
