// Example: drive a looping carousel with animated steps and a mid-session refresh.
use carousel::CarouselOptions;
use carousel_adapter::{Controller, Easing};

fn print_frame(c: &Controller<&str, &str>, shift: f32) {
    let slots: Vec<String> = c
        .window()
        .iter()
        .map(|slot| format!("{}@{:.2}", slot.key, slot.offset as f32 + shift))
        .collect();
    println!("  {}", slots.join("  "));
}

fn main() {
    let mut c = Controller::new(CarouselOptions::identity().with_preload_radius(2))
        .with_step_animation(120, Easing::EaseInOutCubic);
    c.set_items(vec!["mon", "tue", "wed"], 0);

    let mut now_ms = 0u64;
    for step in 0..4 {
        c.next(now_ms);
        println!("step {step}: focused={:?}", c.focused_item());
        // Simulate ~60fps until the step settles.
        while let Some(shift) = c.tick(now_ms) {
            print_frame(&c, shift);
            now_ms += 40;
        }
        print_frame(&c, 0.0);
    }

    // The host refreshes the list; the focused day stays in focus.
    let out = c.set_items(vec!["sun", "mon", "tue", "wed", "thu"], now_ms);
    println!(
        "refresh: continuity={:?} focused={:?}",
        out.continuity,
        c.focused_item()
    );
    print_frame(&c, 0.0);
}
