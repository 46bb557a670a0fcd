use alloc::vec::Vec;

use crate::{RenderKey, RenderSlot, SlotContent, WrapMode};

/// Inputs of a render window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowParams {
    /// Index of the focused item in the current list.
    pub focus: usize,
    pub loop_offset: i64,
    pub preload_radius: usize,
    pub wrap_mode: WrapMode,
}

impl WindowParams {
    /// Number of slots the window has for a non-empty list.
    pub fn slot_count(&self) -> usize {
        self.preload_radius.saturating_mul(2).saturating_add(1)
    }
}

/// Inclusive raw index range of a window centred on `focus`.
///
/// Radii beyond `i64::MAX` saturate instead of wrapping into an empty range.
pub(crate) fn raw_bounds(focus: i64, preload_radius: usize) -> (i64, i64) {
    let radius = i64::try_from(preload_radius).unwrap_or(i64::MAX);
    (focus.saturating_sub(radius), focus.saturating_add(radius))
}

/// Emits the render window for `items`, in ascending offset order, without allocating.
///
/// Each raw index `i` in `focus - radius ..= focus + radius` maps onto
/// `items[i.rem_euclid(len)]` and is keyed on lap `loop_offset + i.div_euclid(len)`, so the
/// copies of an item on either side of the seam never share a render key. In
/// [`WrapMode::Finite`] raw indexes outside the list become placeholders that keep the
/// same keys.
///
/// A focus past the end of `items` is clamped to the last item; an empty list emits nothing.
pub fn for_each_window_slot<'a, T, K>(
    items: &'a [T],
    params: WindowParams,
    key_of: impl Fn(&T) -> K,
    mut f: impl FnMut(RenderSlot<'a, T, K>),
) {
    if items.is_empty() {
        return;
    }
    let len = items.len() as i64;
    let focus = params.focus.min(items.len() - 1) as i64;
    let (first, last) = raw_bounds(focus, params.preload_radius);
    let finite = params.wrap_mode.is_finite();

    for raw in first..=last {
        let item = &items[raw.rem_euclid(len) as usize];
        let outside = raw < 0 || raw >= len;
        let content = if finite && outside {
            SlotContent::Placeholder
        } else {
            SlotContent::Item(item)
        };
        f(RenderSlot {
            key: RenderKey {
                key: key_of(item),
                lap: params.loop_offset.saturating_add(raw.div_euclid(len)),
            },
            offset: raw.saturating_sub(focus),
            content,
        });
    }
}

/// Collects the render window into a `Vec`. See [`for_each_window_slot`].
pub fn build_window<'a, T, K>(
    items: &'a [T],
    params: WindowParams,
    key_of: impl Fn(&T) -> K,
) -> Vec<RenderSlot<'a, T, K>> {
    let mut out = Vec::new();
    if !items.is_empty() {
        // A radius too large to preallocate falls back to growing on push.
        let _ = out.try_reserve(params.slot_count());
    }
    for_each_window_slot(items, params, key_of, |slot| out.push(slot));
    out
}
