use chrono::Datelike;
use clap::Subcommand;
use dincharya_core::content::BACKGROUND_IMAGE;
use dincharya_core::{match_birth_date, parse_birth_date, ValidationError, CHARACTERS};

use crate::display;

#[derive(Subcommand)]
pub enum CharacterAction {
    /// List all six characters
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the character matching a birth date
    Match {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CharacterAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CharacterAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&CHARACTERS)?);
            } else {
                for character in &CHARACTERS {
                    println!("{:<13} {}", character.name, character.traits);
                }
            }
        }
        CharacterAction::Match { date, json } => {
            let date = parse_birth_date(&date).ok_or(ValidationError::InvalidBirthDate(date))?;
            let character = match_birth_date(date);
            if json {
                let out = serde_json::json!({
                    "date": date,
                    "day_of_month": date.day(),
                    "character": character,
                    "background": BACKGROUND_IMAGE,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("You are like...");
                display::character_card(character);
            }
        }
    }
    Ok(())
}
