// Example: step through an infinite carousel and print the render window.
use carousel::{Carousel, CarouselOptions};

fn main() {
    let items = ["red", "green", "blue", "amber"];
    let mut c: Carousel<&str, &str> =
        Carousel::new(CarouselOptions::identity().with_preload_radius(2));

    let mut position = 0usize;
    let mut counter = 0i64;
    c.update(&items, position, counter);

    for _ in 0..6 {
        counter += 1;
        position = (position + 1) % items.len();
        let out = c.update(&items, position, counter);

        let keys: Vec<String> = c
            .render_window(&items)
            .iter()
            .map(|slot| slot.key_string())
            .collect();
        println!(
            "focus={position} loop_delta={:+} loop_offset={} window={keys:?}",
            out.loop_delta,
            c.loop_offset()
        );
    }
}
