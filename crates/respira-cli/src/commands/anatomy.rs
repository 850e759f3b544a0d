use clap::Subcommand;
use respira_core::{AnatomyAtlas, AnatomyInfo};

#[derive(Subcommand)]
pub enum AnatomyAction {
    /// Show one anatomical part
    Show {
        /// Part identifier (e.g. "larynx", "alveoli")
        part: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all known parts
    List,
    /// Keyword search over the atlas
    Search {
        /// Term to look for in titles, descriptions and functions
        keyword: String,
    },
}

pub fn run(action: AnatomyAction) -> Result<(), Box<dyn std::error::Error>> {
    let atlas = AnatomyAtlas::respiratory();
    match action {
        AnatomyAction::Show { part, json } => match atlas.get(&part) {
            Some(info) if json => println!("{}", serde_json::to_string_pretty(info)?),
            Some(info) => print_part(info),
            // A miss is not an error; fall back to a placeholder.
            None => println!(
                "No entry for '{part}'. Run `respira-cli anatomy list` to see known parts."
            ),
        },
        AnatomyAction::List => {
            for id in atlas.part_ids() {
                let title = atlas.get(id).map(|i| i.title.as_str()).unwrap_or(id);
                println!("{id:<12} {title}");
            }
        }
        AnatomyAction::Search { keyword } => {
            let matches = atlas.search(&keyword);
            if matches.is_empty() {
                println!("No matches for '{keyword}'.");
            } else {
                for (id, info) in matches {
                    println!("{id:<12} {}", info.title);
                }
            }
        }
    }
    Ok(())
}

fn print_part(info: &AnatomyInfo) {
    println!("{}", info.title);
    println!("\n{}", info.description);
    println!("\nFun fact: {}", info.fun_fact);
    println!("\nFunctions:");
    for function in &info.functions {
        println!("  - {function}");
    }
    println!("\nNote: {}", info.medical_note);
}
