use weft_bidi::{BaseDirection, RunFactory, resolve_levels};

fn main() {
    let text = "abc אבג def";
    let resolved = resolve_levels(text, BaseDirection::Auto);

    let mut factory = RunFactory::new();
    let layout = factory.create_layout(&resolved.levels, 0, resolved.levels.len());

    println!("Text: {text:?}");
    println!("Primary direction: {:?}", resolved.direction);
    println!("Runs: {}", layout.run_count());
    println!("Layout: {layout}");
    println!();

    // Paint the runs in visual order, reversing characters where the run
    // displays right-to-left. The shared single-run layouts report an
    // open-ended length, so clamp to the line like a real caller.
    let chars: Vec<char> = text.chars().collect();
    let mut display = String::new();
    for slot in 0..layout.run_count() {
        let run = layout.visual_run(slot);
        let start = layout.run_start(run);
        let end = (start + layout.run_length(run)).min(chars.len());
        if layout.is_reversed(run) {
            display.extend(chars[start..end].iter().rev());
        } else {
            display.extend(&chars[start..end]);
        }
    }
    println!("Visual order: {display:?}");
}
