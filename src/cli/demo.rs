//! Demo command: the Spellman household's first attempt at presto chango

use std::error::Error;
use std::process::ExitCode;

use crate::familiar::{Cat, Familiar, Toad};
use crate::present::failure_message;
use crate::witch::{MagicalBeing, Witch};

use super::EXIT_SUCCESS;

/// Execute the demo command
///
/// Sabrina has no hat, so the spell is expected to fail; the demo still
/// exits successfully.
pub fn run_demo() -> ExitCode {
    println!();

    let salem = Cat::named(Some("Salem Saberhagen".to_string()));
    salem.speak();

    let witch_one = Witch::new(Some("Sabrina".to_string()), Some(salem.into()));
    match attempt(&witch_one) {
        Ok(toad) => toad.speak(),
        Err(e) => println!("{}", failure_message(e.as_ref())),
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn attempt(witch: &Witch) -> Result<Toad, Box<dyn Error>> {
    Ok(witch.turn_familiar_into_toad()?)
}
