//! Spell lookup commands (spell, spells)

use std::process::ExitCode;

use crate::avatar::{decorate, MagicalObject};
use crate::spell::{MagicWords, Spell, UnknownIncantation};
use crate::suggest::{format_suggestion, suggest};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the spell command
pub fn run_spell(words: &str, avatars: bool) -> ExitCode {
    match Spell::from_words(words) {
        Some(spell) => {
            println!("{}", decorate(spell.avatar(), spell.magic_words.as_str(), avatars));
            ExitCode::from(EXIT_SUCCESS)
        }
        None => {
            eprintln!("Error: {}", UnknownIncantation(words.to_string()));
            let known = incantations();
            if let Some(hint) = format_suggestion(&suggest(words, &known, 3)) {
                eprintln!("{}", hint);
            }
            eprintln!();
            eprintln!("Known incantations:");
            for incantation in known {
                eprintln!("  {}", incantation);
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the spells command
pub fn run_spells(avatars: bool) -> ExitCode {
    for words in MagicWords::ALL {
        let spell = Spell::new(words);
        println!("{}", decorate(spell.avatar(), words.as_str(), avatars));
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn incantations() -> Vec<&'static str> {
    MagicWords::ALL.iter().map(MagicWords::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incantations_in_order() {
        assert_eq!(incantations(), vec!["abracadabra", "alakazam", "hocus pocus", "presto chango"]);
    }

    #[test]
    fn test_suggestion_for_misspelled_spell() {
        let known = incantations();
        assert_eq!(suggest("abracadbra", &known, 3), vec!["abracadabra"]);
    }
}
