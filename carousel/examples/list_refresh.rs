// Example: keep the same item in focus when the host replaces the list.
use carousel::{Carousel, CarouselOptions, SlotContent, WrapMode};

#[derive(Debug)]
struct Photo {
    id: u64,
    caption: &'static str,
}

fn main() {
    let mut c: Carousel<Photo, u64> = Carousel::new(
        CarouselOptions::new(|p: &Photo| p.id)
            .with_wrap_mode(WrapMode::Finite)
            .with_on_continuity_lost(Some(|id: &u64| println!("photo {id} disappeared"))),
    );

    let first = vec![
        Photo { id: 10, caption: "beach" },
        Photo { id: 11, caption: "harbour" },
        Photo { id: 12, caption: "lighthouse" },
    ];
    let mut position = 1;
    c.update(&first, position, 0);

    // A refresh prepends two photos; the viewer was looking at "harbour".
    let refreshed = vec![
        Photo { id: 20, caption: "sunrise" },
        Photo { id: 21, caption: "dunes" },
        Photo { id: 10, caption: "beach" },
        Photo { id: 11, caption: "harbour" },
        Photo { id: 12, caption: "lighthouse" },
    ];
    let out = c.update(&refreshed, position, 0);
    if let Some(d) = out.displacement {
        println!("move by {} over {}ms", d.delta, d.duration_ms);
        position = (position as i64 + d.delta) as usize;
        c.update(&refreshed, position, 0);
    }

    for slot in c.render_window(&refreshed) {
        match slot.content {
            SlotContent::Item(p) => println!("{:>3} {} {}", slot.offset, slot.key, p.caption),
            SlotContent::Placeholder => println!("{:>3} {} <empty>", slot.offset, slot.key),
        }
    }

    // The focused photo is dropped entirely.
    let pruned = vec![
        Photo { id: 20, caption: "sunrise" },
        Photo { id: 21, caption: "dunes" },
    ];
    c.update(&pruned, position.min(pruned.len() - 1), 0);
    println!("now tracking {:?}", c.focused_key());
}
