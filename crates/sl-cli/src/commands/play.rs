use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sl_core::{Case, CaseConfig};
use sl_session::{Reply, Session, closing_remark};

pub fn run(detective: Option<&str>, suspects: usize, export: Option<&Path>) -> Result<(), String> {
    let config = CaseConfig::default().with_suspect_count(suspects);
    let (case, rng) =
        Case::from_config(&config).map_err(|e| format!("failed to generate case: {e}"))?;
    tracing::info!(suspects = case.roster().len(), "case ready");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("  {} Welcome to Sleuth!", "Case opened.".bold());
    let detective = match detective {
        Some(name) => title_case(name),
        None => {
            let typed = prompt(&mut reader, "Please enter your name, Detective: ")?;
            title_case(typed.as_deref().unwrap_or(""))
        }
    };
    let detective = if detective.is_empty() {
        "Anonymous".to_string()
    } else {
        detective
    };
    println!(
        "\n  We look forward to justice prevailing under your watch, Detective {detective}.\n"
    );

    let mut session = Session::new(case, detective, rng);

    println!("  {}", "SUSPECT PROFILES".bold());
    println!("{}", super::suspect_table(session.roster()));

    let mut announced_final = false;
    let closing = loop {
        let question = if session.awaiting_final_guess() {
            if !announced_final {
                println!("\n  You've used all clues. Make your final guess!");
                announced_final = true;
            }
            "Enter your final guess (guess <name>): "
        } else {
            println!(
                "\n  Clues used: {}/{}",
                session.clues_used(),
                session.max_clues()
            );
            "Enter command (ask <name> | guess <name> | exit): "
        };

        let input = match prompt(&mut reader, question)? {
            Some(line) => line,
            None => {
                tracing::debug!("stdin closed, leaving the case");
                "exit".to_string()
            }
        };

        match session.process(&input) {
            Ok(reply) => {
                print_reply(&reply);
                if reply.verdict().is_some() {
                    break reply;
                }
            }
            Err(e) => println!("{}", format!("  Input error: {e}").yellow()),
        }
    };

    if let Some(verdict) = closing.verdict() {
        let remark = closing_remark(&verdict.detective, verdict.solved);
        println!("\n  {}", remark.italic());
    }

    let truth = session.truth_log();
    if !matches!(closing, Reply::Abandoned(_)) {
        super::print_truth_log(&truth);
    }

    if let Some(path) = export {
        let json = serde_json::to_string_pretty(&truth)
            .map_err(|e| format!("failed to serialize truth log: {e}"))?;
        std::fs::write(path, json)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("  Truth log written to {}", path.display());
    }

    Ok(())
}

/// Print a question and read one line. `None` on EOF.
fn prompt(reader: &mut impl BufRead, question: &str) -> Result<Option<String>, String> {
    print!("{question}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Statement {
            speaker,
            text,
            reliability,
            verified_by,
        } => {
            println!("\n  {} says: \"{text}\"", speaker.bold());
            println!("  Reliability: {reliability}/100");
            if let Some(other) = verified_by {
                println!("  {}", format!("Verified by {other}.").green());
            }
        }
        Reply::Accusation(verdict) => {
            let text = reply.to_string();
            let (head, tail) = text.split_once("\n\n").unwrap_or((text.as_str(), ""));
            println!("\n  {head}\n");
            if verdict.solved {
                println!("  {}", tail.green().bold());
            } else {
                println!("  {}", tail.red().bold());
            }
        }
        Reply::Forfeit { .. } => {
            for line in reply.to_string().lines() {
                println!("  {}", line.red());
            }
        }
        _ => {
            println!();
            for line in reply.to_string().lines() {
                println!("  {line}");
            }
        }
    }
}

/// Capitalise the first letter of each word, lowercase the rest.
fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("sherlock holmes"), "Sherlock Holmes");
        assert_eq!(title_case("  jANE   marple "), "Jane Marple");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn prompt_reads_and_trims() {
        let mut input = io::Cursor::new("  ask Aria \nexit\n");
        assert_eq!(prompt(&mut input, "> ").unwrap().as_deref(), Some("ask Aria"));
        assert_eq!(prompt(&mut input, "> ").unwrap().as_deref(), Some("exit"));
        assert_eq!(prompt(&mut input, "> ").unwrap(), None);
    }
}
