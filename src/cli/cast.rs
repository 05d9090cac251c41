//! Cast and speak command implementations

use std::path::Path;
use std::process::ExitCode;

use crate::avatar::{self, decorate, MagicalObject};
use crate::config::CovenConfig;
use crate::error::ChangoSpellError;
use crate::familiar::{Familiar, Toad};
use crate::present::spell_error_message;
use crate::suggest::{format_suggestion, suggest};
use crate::witch::{MagicalBeing, Witch};

use super::{read_coven, witch_label, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the cast command
pub fn run_cast(
    input: &Path,
    witch_filter: Option<&str>,
    json: bool,
    config: &CovenConfig,
) -> ExitCode {
    let parsed = match read_coven(input) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };

    let strict = config.cast.strict;
    for warning in &parsed.warnings {
        let level = if strict { "Error" } else { "Warning" };
        eprintln!("{}: line {}: {}", level, warning.line, warning.message);
    }
    if strict && !parsed.warnings.is_empty() {
        return ExitCode::from(EXIT_ERROR);
    }

    let witches: Vec<&Witch> = match witch_filter {
        Some(name) => parsed.witches.iter().filter(|w| w.name() == Some(name)).collect(),
        None => parsed.witches.iter().collect(),
    };

    if witches.is_empty() {
        match witch_filter {
            Some(name) => {
                eprintln!("Error: No witch named '{}' found in input", name);
                let names: Vec<&str> = parsed.witches.iter().filter_map(|w| w.name()).collect();
                if let Some(hint) = format_suggestion(&suggest(name, &names, 3)) {
                    eprintln!("{}", hint);
                }
            }
            None => eprintln!("Error: No witches found in input file"),
        }
        return ExitCode::from(EXIT_ERROR);
    }

    let mut failures = 0;
    for witch in witches {
        let outcome = witch.turn_familiar_into_toad();
        match &outcome {
            Ok(_) => tracing::info!(witch = witch_label(witch), "familiar turned into a toad"),
            Err(e) => {
                failures += 1;
                tracing::info!(witch = witch_label(witch), error = e.code(), "spell failed");
            }
        }

        if json {
            println!("{}", cast_report(witch, &outcome));
        } else {
            println!("{}", describe_outcome(witch, &outcome, config.display.avatars));
        }
    }

    if failures > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// One line of text output for a cast attempt.
pub(crate) fn describe_outcome(
    witch: &Witch,
    outcome: &Result<Toad, ChangoSpellError>,
    avatars: bool,
) -> String {
    let label = witch_label(witch);
    match outcome {
        Ok(toad) => {
            let kind = witch.familiar().map(|f| f.kind().as_str()).unwrap_or("familiar");
            let text = format!(
                "{}: {} the {} is now a toad",
                label,
                toad.name().unwrap_or_default(),
                kind
            );
            decorate(toad.avatar(), &text, avatars)
        }
        Err(e) => decorate(witch.avatar(), &format!("{}: {}", label, spell_error_message(e)), avatars),
    }
}

/// JSON report for a cast attempt.
pub(crate) fn cast_report(
    witch: &Witch,
    outcome: &Result<Toad, ChangoSpellError>,
) -> serde_json::Value {
    match outcome {
        Ok(toad) => serde_json::json!({
            "witch": witch.name(),
            "ok": true,
            "toad": toad,
        }),
        Err(e) => {
            let mut obj = serde_json::json!({
                "witch": witch.name(),
                "ok": false,
                "error": e.code(),
                "message": spell_error_message(e),
            });
            if let ChangoSpellError::SpellFailed { reason } = e {
                obj["reason"] = serde_json::json!(reason);
            }
            obj
        }
    }
}

/// Execute the speak command
pub fn run_speak(input: &Path) -> ExitCode {
    let parsed = match read_coven(input) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };

    for warning in &parsed.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }

    if parsed.witches.is_empty() {
        eprintln!("Error: No witches found in input file");
        return ExitCode::from(EXIT_ERROR);
    }

    for witch in &parsed.witches {
        match witch.familiar() {
            Some(familiar) => {
                let name = familiar.name().unwrap_or(familiar.kind().as_str());
                println!("{}: {}", name, familiar.speech());
            }
            None => eprintln!("{} {} has no familiar", avatar::WITCH, witch_label(witch)),
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
