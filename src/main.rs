use anyhow::Result;

use crate::deck::state::SlideCounter;

mod config;
mod deck;

fn main() -> Result<()> {
    let config = config::load_or_create_config()?;

    let mut counter = SlideCounter::new(config.total_slides)?;
    counter.set_current_index(config.start_index);

    println!("Demonstrating slide navigation:");
    println!("- Total slides: {}", counter.total_slides());
    println!("- Current slide: {}", counter.current_index());

    println!("\nNavigating forward:");
    println!("- Current slide: {}", counter.next_slide());
    println!("- Current slide: {}", counter.next_slide());

    println!("\nNavigating backward:");
    println!("- Current slide: {}", counter.previous_slide());

    println!("\nChecking the first-slide boundary:");
    println!("- Jump to slide 0. Current: {}", counter.set_current_index(0));
    println!("- Attempt previous. Current: {}", counter.previous_slide());
    println!("- Can go back: {}", counter.has_previous_slide());

    let last = counter.total_slides() as isize - 1;
    println!("\nChecking the last-slide boundary:");
    println!(
        "- Jump to slide {}. Current: {}",
        last,
        counter.set_current_index(last)
    );
    println!("- Attempt next. Current: {}", counter.next_slide());
    println!("- Can go forward: {}", counter.has_next_slide());

    Ok(())
}
