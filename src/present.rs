//! Human-readable messages for spell outcomes.

use std::error::Error;

use crate::error::ChangoSpellError;

const SPELL_FAILED_PREFIX: &str = "Spell Failed.";
const UNKNOWN_FAILURE: &str = "Something went wrong, are you feeling OK?";

/// Message shown for a failed presto chango.
///
/// Only the hat gets its own message; everything else shares the generic one.
pub fn spell_error_message(error: &ChangoSpellError) -> String {
    match error {
        ChangoSpellError::HatMissingOrNotMagical => format!(
            "{} Did you forget your hat, or does it need its batteries charged?",
            SPELL_FAILED_PREFIX
        ),
        _ => SPELL_FAILED_PREFIX.to_string(),
    }
}

/// Message for any error that reached the driver.
///
/// Spell errors are routed through [`spell_error_message`]; anything else
/// gets a generic reply.
pub fn failure_message(error: &(dyn Error + 'static)) -> String {
    match error.downcast_ref::<ChangoSpellError>() {
        Some(spell_error) => spell_error_message(spell_error),
        None => UNKNOWN_FAILURE.to_string(),
    }
}
