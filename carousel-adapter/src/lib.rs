//! Navigation utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only decides what to show; it asks the host to move
//! when the list changes under the user. This crate provides the host side of that contract:
//!
//! - A [`Navigator`] that steps with wraparound and applies corrections without counting them
//!   as navigation
//! - A [`Controller`] that owns the item list and runs the engine on every change
//! - Tween-based step animation helpers (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod nav;
mod tween;


pub use controller::Controller;
pub use nav::Navigator;
pub use tween::{Easing, Tween};
