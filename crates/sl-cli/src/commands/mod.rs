pub mod play;
pub mod rules;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sl_core::Roster;
use sl_session::TruthLog;

/// Suspect profiles: name, motive, behavior. The murderer is not marked.
fn suspect_table(roster: &Roster) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Motive", "Behavior"]);

    for suspect in roster.iter() {
        table.add_row(vec![
            suspect.name.clone(),
            suspect.motive.to_string(),
            suspect.behavior.to_string(),
        ]);
    }

    table
}

/// Every testimony, labelled true or lie.
fn truth_table(truth: &TruthLog) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Speaker", "Testimony", "Reliability"]);

    for entry in &truth.entries {
        let tag = if entry.truthful { "TRUE" } else { "LIE" };
        table.add_row(vec![
            tag.to_string(),
            entry.speaker.clone(),
            format!("\"{}\"", entry.text),
            format!("{}/100", entry.reliability),
        ]);
    }

    table
}

fn print_truth_log(truth: &TruthLog) {
    println!();
    println!("  {}", "FINAL TRUTH LOG".bold());
    println!("{}", truth_table(truth));
    println!("  The murderer was: {}", truth.murderer.bold());
    println!();
}
