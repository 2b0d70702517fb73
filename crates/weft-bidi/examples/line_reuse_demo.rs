use weft_bidi::{BaseDirection, RunFactory, resolve_levels};

fn main() {
    // One paragraph, resolved once; the factory is then reused for every
    // line the breaker produces, so only the first call allocates scratch.
    let paragraph = "one שתיים three ארבע five";
    let resolved = resolve_levels(paragraph, BaseDirection::Ltr);

    let mut factory = RunFactory::new();
    println!("Paragraph: {paragraph:?}");

    // Pretend the line breaker chose these character ranges. The last range
    // deliberately overshoots; the factory clamps it.
    for (begin, end) in [(0, 10), (10, 22), (22, 40)] {
        let layout = factory.create_layout(&resolved.levels, begin, end);
        println!("line [{begin},{end}): {layout}");
    }
}
