//! "Did you mean" hints for misspelled incantations and witch names

/// Edit distance between two strings (insertions, deletions, substitutions).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, a_char) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(a_char != *b_char);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b_chars.len()]
}

/// Up to three candidates within `max_distance` of `query`, closest first.
///
/// Comparison ignores case.
pub fn suggest<'a>(query: &str, candidates: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let query = query.to_lowercase();
    let mut scored: Vec<(&str, usize)> = candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein_distance(&query, &candidate.to_lowercase())))
        .filter(|(_, distance)| *distance <= max_distance)
        .collect();

    scored.sort_by_key(|(_, distance)| *distance);
    scored.into_iter().take(3).map(|(candidate, _)| candidate).collect()
}

/// Format a "did you mean?" line, or `None` with nothing to suggest.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{}'?", only)),
        [first, second] => Some(format!("Did you mean '{}' or '{}'?", first, second)),
        [first, second, third, ..] => {
            Some(format!("Did you mean '{}', '{}', or '{}'?", first, second, third))
        }
    }
}
