use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as i64
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range_usize(0, i + 1);
            items.swap(i, j);
        }
    }
}

fn carousel() -> Carousel<&'static str, &'static str> {
    Carousel::new(CarouselOptions::identity())
}

fn window_keys(c: &Carousel<&'static str, &'static str>, items: &[&'static str]) -> Vec<String> {
    c.render_window(items)
        .iter()
        .map(|slot| slot.key_string())
        .collect()
}

fn expected_lap(loop_offset: i64, raw: i64, len: i64) -> i64 {
    // Reference rule: one lap back before the list, one lap ahead past it.
    if raw < 0 {
        loop_offset - 1 - (-raw - 1) / len
    } else {
        loop_offset + raw / len
    }
}

#[test]
fn first_cycle_tracks_focused_item() {
    let mut c = carousel();
    let items = ["A", "B", "C"];
    let out = c.update(&items, 1, 0);
    assert_eq!(out.focus, Some(1));
    assert_eq!(out.displacement, None);
    assert_eq!(out.loop_delta, 0);
    assert_eq!(out.continuity, Continuity::Fresh);
    assert_eq!(c.focused_key(), Some(&"B"));
    assert_eq!(c.loop_offset(), 0);
    assert_eq!(window_keys(&c, &items), ["A:0", "B:0", "C:0"]);
}

#[test]
fn replaced_list_requests_silent_move_to_tracked_item() {
    let mut c = carousel();
    c.update(&["A", "B", "C"], 1, 0);

    let next = ["B", "X", "Y"];
    let out = c.update(&next, 1, 0);
    assert_eq!(out.displacement, Some(Displacement::silent(-1)));
    assert!(out.displacement.is_some_and(|d| d.is_silent()));
    assert_eq!(out.focus, Some(0));
    assert_eq!(out.continuity, Continuity::Corrected);
    // The window already follows the tracked item.
    assert_eq!(window_keys(&c, &next), ["Y:-1", "B:0", "X:0"]);
    assert_eq!(c.focused_key(), Some(&"B"));

    // The host applied the correction.
    let out = c.update(&next, 0, 0);
    assert_eq!(out.displacement, None);
    assert_eq!(out.continuity, Continuity::Held);
    assert_eq!(c.focused_key(), Some(&"B"));
    assert_eq!(c.snapshot().and_then(|s| s.pending_target), None);
    assert_eq!(window_keys(&c, &next), ["Y:-1", "B:0", "X:0"]);
}

#[test]
fn removed_item_reanchors_silently_and_reports_hook() {
    let lost = Arc::new(Mutex::new(Vec::new()));
    let mut c: Carousel<&'static str, &'static str> = Carousel::new(
        CarouselOptions::identity().with_on_continuity_lost(Some({
            let lost = Arc::clone(&lost);
            move |k: &&'static str| lost.lock().unwrap().push(*k)
        })),
    );
    c.update(&["A", "B", "C"], 1, 0);

    let next = ["X", "Y", "Z"];
    let out = c.update(&next, 1, 0);
    assert_eq!(out.displacement, None);
    assert_eq!(out.focus, Some(1));
    assert_eq!(out.continuity, Continuity::Lost);
    assert_eq!(c.focused_key(), Some(&"Y"));
    assert_eq!(*lost.lock().unwrap(), ["B"]);

    // Subsequent cycles are ordinary.
    let out = c.update(&next, 1, 0);
    assert_eq!(out.continuity, Continuity::Held);
    assert_eq!(lost.lock().unwrap().len(), 1);
}

#[test]
fn reordered_list_with_item_still_in_slot_needs_no_correction() {
    let mut c = carousel();
    c.update(&["A", "B", "C"], 1, 0);
    let out = c.update(&["C", "B", "A"], 1, 0);
    assert_eq!(out.displacement, None);
    assert_eq!(out.continuity, Continuity::Held);
    assert_eq!(c.focused_key(), Some(&"B"));
}

#[test]
fn forward_wrap_increments_loop_offset() {
    let mut c = carousel();
    let items = ["A", "B", "C"];
    c.update(&items, 2, 0);

    let out = c.update(&items, 0, 1);
    assert_eq!(out.loop_delta, 1);
    assert_eq!(c.loop_offset(), 1);
    assert_eq!(window_keys(&c, &items), ["C:0", "A:1", "B:1"]);

    let out = c.update(&items, 1, 2);
    assert_eq!(out.loop_delta, 0);
    assert_eq!(c.loop_offset(), 1);
    assert_eq!(window_keys(&c, &items), ["A:1", "B:1", "C:1"]);
}

#[test]
fn backward_wrap_decrements_loop_offset() {
    let mut c = carousel();
    let items = ["A", "B", "C"];
    c.update(&items, 0, 10);

    let out = c.update(&items, 2, 9);
    assert_eq!(out.loop_delta, -1);
    assert_eq!(c.loop_offset(), -1);
    assert_eq!(window_keys(&c, &items), ["B:-1", "C:-1", "A:0"]);
}

#[test]
fn crossing_the_seam_and_back_restores_render_keys() {
    let mut c = carousel();
    let items = ["A", "B", "C"];
    c.update(&items, 1, 0);
    let before = window_keys(&c, &items);

    c.update(&items, 2, 1);
    c.update(&items, 0, 2);
    assert_eq!(c.loop_offset(), 1);
    c.update(&items, 2, 1);
    assert_eq!(c.loop_offset(), 0);
    c.update(&items, 1, 0);
    assert_eq!(window_keys(&c, &items), before);
}

#[test]
fn interior_steps_never_touch_loop_offset() {
    let mut c = carousel();
    let items = ["A", "B", "C", "D"];
    c.update(&items, 1, 0);
    assert_eq!(c.update(&items, 2, 1).loop_delta, 0);
    assert_eq!(c.update(&items, 1, 0).loop_delta, 0);
    // Backward onto the first slot and forward onto the last slot are not crossings.
    assert_eq!(c.update(&items, 0, -1).loop_delta, 0);
    c.update(&items, 2, 1);
    assert_eq!(c.update(&items, 3, 2).loop_delta, 0);
    assert_eq!(c.loop_offset(), 0);
}

#[test]
fn single_item_list_loops_on_every_step() {
    let mut c = carousel();
    let items = ["A"];
    c.update(&items, 0, 0);
    assert_eq!(c.update(&items, 0, 1).loop_delta, 1);
    assert_eq!(c.update(&items, 0, 2).loop_delta, 1);
    assert_eq!(c.update(&items, 0, 1).loop_delta, -1);
    assert_eq!(c.loop_offset(), 1);
    assert_eq!(window_keys(&c, &items), ["A:0", "A:1", "A:2"]);
}

#[test]
fn overflowing_counter_delta_is_treated_as_no_movement() {
    let mut c = carousel();
    let items = ["A", "B", "C"];
    c.update(&items, 2, i64::MIN);
    let out = c.update(&items, 0, i64::MAX);
    assert_eq!(out.loop_delta, 0);
    assert_eq!(c.loop_offset(), 0);
    assert_eq!(c.focused_key(), Some(&"A"));
}

#[test]
fn unapplied_correction_is_requested_again_without_state_change() {
    let mut c = carousel();
    c.update(&["A", "B", "C"], 1, 0);
    let next = ["B", "X", "Y"];
    let first = c.update(&next, 1, 0);
    let snapshot = c.snapshot().cloned();
    let window = window_keys(&c, &next);

    let again = c.update(&next, 1, 0);
    assert_eq!(again, first);
    assert_eq!(c.snapshot().cloned(), snapshot);
    assert_eq!(window_keys(&c, &next), window);
    assert_eq!(c.focused_key(), Some(&"B"));
}

#[test]
fn replacement_returning_tracked_item_to_focus_skips_loop_tracking() {
    let mut c = carousel();
    c.update(&["A", "B", "C"], 0, 0);
    let out = c.update(&["B", "C", "A"], 0, 0);
    assert_eq!(out.displacement, Some(Displacement::silent(2)));

    // Another refresh puts the tracked item back under the focus while the counter moved
    // forward onto the first slot.
    let next = ["A", "C", "B"];
    let out = c.update(&next, 0, 1);
    assert_eq!(out.displacement, None);
    assert_eq!(out.loop_delta, 0);
    assert_eq!(out.focus, Some(0));
    assert_eq!(out.continuity, Continuity::Held);
    assert_eq!(c.loop_offset(), 0);
    assert_eq!(c.focused_key(), Some(&"A"));
    assert_eq!(c.snapshot().and_then(|s| s.pending_target), None);
    assert_eq!(window_keys(&c, &next), ["B:-1", "A:0", "C:0"]);

    // The list is committed: the next cycle with the same inputs is a no-op.
    let snapshot = c.snapshot().cloned();
    assert_eq!(c.update(&next, 0, 1).loop_delta, 0);
    assert_eq!(c.snapshot().cloned(), snapshot);
}

#[test]
fn navigation_supersedes_unapplied_correction() {
    let mut c = carousel();
    c.update(&["A", "B", "C"], 1, 0);
    let next = ["B", "X", "Y"];
    c.update(&next, 1, 0);

    let out = c.update(&next, 2, 1);
    assert_eq!(out.displacement, None);
    assert_eq!(out.focus, Some(2));
    assert_eq!(c.focused_key(), Some(&"Y"));
    assert_eq!(c.snapshot().and_then(|s| s.pending_target), None);
}

#[test]
fn empty_list_renders_nothing_and_keeps_tracked_key() {
    let mut c = carousel();
    c.update(&["A", "B", "C"], 1, 0);

    let out = c.update(&[], 0, 0);
    assert_eq!(out, CycleOutcome::empty());
    assert!(c.render_window(&[]).is_empty());
    assert_eq!(c.focused_key(), Some(&"B"));

    let back = ["C", "B"];
    let out = c.update(&back, 0, 0);
    assert_eq!(out.displacement, Some(Displacement::silent(1)));
    assert_eq!(out.focus, Some(1));
}

#[test]
fn out_of_range_position_is_clamped() {
    let mut c = carousel();
    let items = ["A", "B", "C"];
    let out = c.update(&items, 7, 0);
    assert_eq!(out.focus, Some(2));
    assert_eq!(c.focused_key(), Some(&"C"));
    assert_eq!(c.render_window(&items).len(), 3);
}

#[test]
fn disabled_carousel_is_empty_and_side_effect_free() {
    let mut c: Carousel<&'static str, &'static str> =
        Carousel::new(CarouselOptions::identity().with_enabled(false));
    let items = ["A", "B", "C"];
    assert_eq!(c.update(&items, 1, 0), CycleOutcome::empty());
    assert!(c.snapshot().is_none());
    assert!(c.render_window(&items).is_empty());
    assert!(c.preload_keys(&items).is_empty());

    c.set_enabled(true);
    c.update(&items, 1, 0);
    assert_eq!(c.focused_key(), Some(&"B"));

    c.set_enabled(false);
    assert!(c.snapshot().is_none());
    assert_eq!(c.focus(), None);
}

#[test]
fn set_options_keeps_tracking_state() {
    let mut c = carousel();
    let items = ["A", "B", "C", "D", "E"];
    c.update(&items, 4, 0);
    c.update(&items, 0, 1);
    assert_eq!(c.loop_offset(), 1);

    c.update_options(|o| o.preload_radius = 2);
    assert_eq!(c.loop_offset(), 1);
    assert_eq!(
        window_keys(&c, &items),
        ["D:0", "E:0", "A:1", "B:1", "C:1"]
    );
}

#[test]
fn finite_mode_pads_with_placeholders() {
    let mut c: Carousel<&'static str, &'static str> = Carousel::new(
        CarouselOptions::identity()
            .with_preload_radius(2)
            .with_finite(true),
    );
    let items = ["A", "B", "C"];
    c.update(&items, 0, 0);
    let window = c.render_window(&items);
    assert_eq!(window.len(), 5);
    let offsets: Vec<i64> = window.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, [-2, -1, 0, 1, 2]);
    assert!(window[0].content.is_placeholder());
    assert!(window[1].content.is_placeholder());
    assert_eq!(window[2].content.item(), Some(&"A"));
    assert_eq!(window[4].content.item(), Some(&"C"));
    // Placeholders keep the wraparound key scheme.
    assert_eq!(window[0].key_string(), "B:-1");
    assert_eq!(window[1].key_string(), "C:-1");
}

#[test]
fn finite_mode_radius_past_list_length_never_reads_out_of_bounds() {
    let items = [7u64, 8];
    let window = build_window(
        &items,
        WindowParams {
            focus: 1,
            loop_offset: 0,
            preload_radius: 5,
            wrap_mode: WrapMode::Finite,
        },
        |x| *x,
    );
    assert_eq!(window.len(), 11);
    let real: Vec<u64> = window.iter().filter_map(|s| s.content.item().copied()).collect();
    assert_eq!(real, [7, 8]);
}

#[test]
fn infinite_window_keys_stay_unique_when_radius_exceeds_len() {
    let items = [1u64, 2];
    let window = build_window(
        &items,
        WindowParams {
            focus: 0,
            loop_offset: 0,
            preload_radius: 3,
            wrap_mode: WrapMode::Infinite,
        },
        |x| *x,
    );
    let keys: Vec<String> = window.iter().map(|s| s.key.to_string()).collect();
    assert_eq!(keys, ["2:-2", "1:-1", "2:-1", "1:0", "2:0", "1:1", "2:1"]);
}

#[test]
fn huge_radius_saturates_instead_of_wrapping() {
    assert_eq!(crate::window::raw_bounds(3, 2), (1, 5));
    assert_eq!(crate::window::raw_bounds(0, usize::MAX), (-i64::MAX, i64::MAX));
    let (first, last) = crate::window::raw_bounds(5, i64::MAX as usize + 1);
    assert!(first <= last);

    let params = WindowParams {
        focus: 0,
        loop_offset: 0,
        preload_radius: usize::MAX,
        wrap_mode: WrapMode::Finite,
    };
    assert_eq!(params.slot_count(), usize::MAX);
    // An empty list never touches the radius.
    let empty: [u64; 0] = [];
    assert!(build_window(&empty, params, |x| *x).is_empty());
}

#[test]
fn preload_keys_are_distinct_and_skip_placeholders() {
    let items = ["A", "B", "C", "D"];
    let mut c = carousel();
    c.update(&items, 0, 0);
    assert_eq!(c.preload_keys(&items), ["D", "A", "B"]);

    c.update_options(|o| o.wrap_mode = WrapMode::Finite);
    assert_eq!(c.preload_keys(&items), ["A", "B"]);

    c.update_options(|o| {
        o.wrap_mode = WrapMode::Infinite;
        o.preload_radius = 4;
    });
    assert_eq!(c.preload_keys(&items), ["A", "B", "C", "D"]);
}

#[test]
fn restored_snapshot_reproduces_window() {
    let items = ["A", "B", "C"];
    let mut c1 = carousel();
    c1.update(&items, 2, 0);
    c1.update(&items, 0, 1);
    c1.update(&items, 1, 2);
    let snapshot = c1.snapshot().cloned().unwrap();

    let mut c2 = carousel();
    c2.restore_snapshot(snapshot);
    assert!(c2.render_window(&items).is_empty());
    let out = c2.update(&items, 1, 2);
    assert_eq!(out.loop_delta, 0);
    assert_eq!(window_keys(&c2, &items), window_keys(&c1, &items));
    assert_eq!(c2.snapshot(), c1.snapshot());
}

#[test]
fn reset_forgets_loop_offset_and_identity() {
    let mut c = carousel();
    let items = ["A", "B"];
    c.update(&items, 1, 0);
    c.update(&items, 0, 1);
    assert_eq!(c.loop_offset(), 1);
    c.reset();
    assert_eq!(c.loop_offset(), 0);
    assert_eq!(c.focused_key(), None);
    assert_eq!(c.update(&items, 0, 1).continuity, Continuity::Fresh);
}

#[test]
fn custom_key_mapping_tracks_items_by_id() {
    #[derive(Debug, PartialEq)]
    struct Card {
        id: u64,
        title: &'static str,
    }
    let mut c: Carousel<Card, u64> = Carousel::new(CarouselOptions::new(|card: &Card| card.id));
    let first = [
        Card { id: 1, title: "one" },
        Card { id: 2, title: "two" },
    ];
    c.update(&first, 1, 0);

    // Same ids re-supplied as fresh objects, plus a new card in front.
    let refreshed = [
        Card { id: 9, title: "new" },
        Card { id: 1, title: "one" },
        Card { id: 2, title: "two (edited)" },
    ];
    let out = c.update(&refreshed, 1, 0);
    assert_eq!(out.displacement, Some(Displacement::silent(1)));
    let window = c.render_window(&refreshed);
    assert_eq!(window[1].offset, 0);
    assert_eq!(window[1].content.item().map(|card| card.title), Some("two (edited)"));
    assert_eq!(window[1].key_string(), "2:0");
}

#[test]
fn nav_direction_between_counter_readings() {
    assert_eq!(NavDirection::between(3, 5), Some(NavDirection::Forward));
    assert_eq!(NavDirection::between(5, 3), Some(NavDirection::Backward));
    assert_eq!(NavDirection::between(4, 4), None);
    assert_eq!(NavDirection::between(i64::MAX, i64::MIN), None);
}

#[test]
fn render_key_display_format() {
    let key = RenderKey { key: "poster-7", lap: -2 };
    assert_eq!(key.to_string(), "poster-7:-2");
}

#[test]
fn property_window_shape_and_keys() {
    for seed in [1u64, 7, 42, 1337, 2025] {
        let mut rng = Lcg::new(seed);
        for _ in 0..200 {
            let len = rng.gen_range_usize(1, 9);
            let items: Vec<u64> = (0..len as u64).map(|i| 100 + i).collect();
            let params = WindowParams {
                focus: rng.gen_range_usize(0, len),
                loop_offset: rng.gen_range_i64(-3, 4),
                preload_radius: rng.gen_range_usize(0, 13),
                wrap_mode: if rng.gen_bool() {
                    WrapMode::Finite
                } else {
                    WrapMode::Infinite
                },
            };
            let window = build_window(&items, params, |x| *x);
            let radius = params.preload_radius as i64;
            assert_eq!(window.len(), 2 * params.preload_radius + 1);

            for (slot, offset) in window.iter().zip(-radius..=radius) {
                assert_eq!(slot.offset, offset);
                let raw = params.focus as i64 + offset;
                let outside = raw < 0 || raw >= len as i64;
                let backing = items[raw.rem_euclid(len as i64) as usize];
                assert_eq!(slot.key.key, backing);
                assert_eq!(
                    slot.key.lap,
                    expected_lap(params.loop_offset, raw, len as i64)
                );
                match params.wrap_mode {
                    WrapMode::Finite => assert_eq!(slot.content.is_placeholder(), outside),
                    WrapMode::Infinite => assert_eq!(slot.content.item(), Some(&backing)),
                }
            }

            for (i, a) in window.iter().enumerate() {
                for b in &window[i + 1..] {
                    assert_ne!(a.key, b.key, "duplicate render key (seed={seed})");
                }
            }
        }
    }
}

#[test]
fn property_cycles_are_idempotent_and_preserve_continuity() {
    for seed in [3u64, 99, 2024] {
        let mut rng = Lcg::new(seed);
        let mut c: Carousel<u64, u64> = Carousel::new(
            CarouselOptions::identity().with_preload_radius(rng.gen_range_usize(0, 4)),
        );
        let mut next_id = 0u64;
        let mut items: Vec<u64> = (0..5)
            .map(|_| {
                next_id += 1;
                next_id
            })
            .collect();
        let mut position = 0usize;
        let mut counter = 0i64;

        for _ in 0..300 {
            let tracked = c.focused_key().copied();
            let replaced = match rng.gen_range_usize(0, 4) {
                0 => {
                    rng.shuffle(&mut items);
                    true
                }
                1 => {
                    let at = rng.gen_range_usize(0, items.len() + 1);
                    next_id += 1;
                    items.insert(at, next_id);
                    true
                }
                2 if items.len() > 1 => {
                    let at = rng.gen_range_usize(0, items.len());
                    items.remove(at);
                    position = position.min(items.len() - 1);
                    true
                }
                _ => {
                    let step: i64 = if rng.gen_bool() { 1 } else { -1 };
                    counter += step;
                    position = (position as i64 + step).rem_euclid(items.len() as i64) as usize;
                    false
                }
            };

            let out = c.update(&items, position, counter);
            let snapshot = c.snapshot().cloned();
            let window: Vec<RenderKey<u64>> =
                c.render_window(&items).into_iter().map(|s| s.key).collect();

            if replaced {
                if let Some(tracked) = tracked.filter(|k| items.contains(k)) {
                    let focus = out.focus.unwrap();
                    assert_eq!(items[focus], tracked, "continuity lost (seed={seed})");
                }
            }

            let again = c.update(&items, position, counter);
            assert_eq!(again.focus, out.focus);
            assert_eq!(again.displacement, out.displacement);
            assert_eq!(again.loop_delta, 0);
            assert_eq!(c.snapshot().cloned(), snapshot);
            let window_again: Vec<RenderKey<u64>> =
                c.render_window(&items).into_iter().map(|s| s.key).collect();
            assert_eq!(window_again, window);
            assert!(out.loop_delta.abs() <= 1);

            // The host applies the correction, as a navigation controller would.
            if let Some(d) = out.displacement {
                position = (position as i64 + d.delta) as usize;
                let applied = c.update(&items, position, counter);
                assert_eq!(applied.displacement, None);
                assert_eq!(applied.focus, out.focus);
            }
        }
    }
}

#[test]
fn example_basic_smoke() {
    let items = ["red", "green", "blue", "amber"];
    let mut c: Carousel<&'static str, &'static str> =
        Carousel::new(CarouselOptions::identity().with_preload_radius(2));
    let mut counter = 0i64;
    let mut position = 0usize;
    c.update(&items, position, counter);
    for _ in 0..6 {
        counter += 1;
        position = (position + 1) % items.len();
        c.update(&items, position, counter);
        assert_eq!(c.render_window(&items).len(), 5);
    }
    // Six forward steps over four items crosses the seam once.
    assert_eq!(c.loop_offset(), 1);
    assert_eq!(c.focused_key(), Some(&"blue"));
}
