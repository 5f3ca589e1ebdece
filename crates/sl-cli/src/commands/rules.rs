use sl_session::reply::HELP_TEXT;

pub fn run() -> Result<(), String> {
    println!("  One of the suspects is a murderer. Everyone else was together");
    println!("  somewhere else when it happened, and their stories line up.");
    println!("  The murderer's story does not: nobody can vouch for it, and it");
    println!("  tends to sound less convincing.");
    println!();
    println!("  Every question costs one clue. When the clues run out you get");
    println!("  one final accusation.");
    println!();
    println!("{HELP_TEXT}");
    Ok(())
}
