//! Entity extraction over the finalized token sequence.

use crate::elements::DateEntities;
use crate::lexicon;
use crate::token::is_digits;

/// Century prepended to two-digit year candidates.
pub const DEFAULT_CENTURY_PREFIX: &str = "19";

/// Walk the finalized tokens once and claim year/day/month slots.
///
/// Numerals above 31 are year evidence: four digits directly, two digits
/// behind `century_prefix`, any other shape contradicts and clears the
/// slot. Numerals in 1–31 toggle the day slot — a second sighting means
/// neither is trusted. Month names match fuzzily at `month_cutoff`; the
/// first match wins.
pub fn extract_entities(tokens: &[&str], month_cutoff: f64, century_prefix: &str) -> DateEntities {
    let mut entities = DateEntities::default();

    for &token in tokens {
        if is_digits(token) {
            let Ok(value) = token.parse::<u64>() else {
                continue;
            };
            if value > 31 {
                match token.len() {
                    4 => entities.year = Some(token.to_string()),
                    2 => entities.year = Some(format!("{century_prefix}{token}")),
                    _ => {
                        if entities.year.take().is_some() {
                            tracing::debug!(token, "contradictory year evidence, slot cleared");
                        }
                    }
                }
            } else if value > 0 {
                if entities.day.take().is_some() {
                    tracing::debug!(token, "second day candidate, slot cleared");
                } else {
                    entities.day = Some(token.to_string());
                }
            }
        } else if let Some(month) = lexicon::closest_month(token, month_cutoff) {
            if entities.month.is_none() {
                entities.month = Some(month.to_string());
            } else {
                tracing::debug!(token, "month already set, ignoring");
            }
        }
    }

    entities
}

/// True when three or more purely-numeric tokens are present — the signal
/// that the input was a formatted numeric date better left to the generic
/// format parser than to the word-merging heuristics.
pub fn has_three_digit_groups(tokens: &[&str]) -> bool {
    tokens.iter().filter(|t| is_digits(t)).count() >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(tokens: &[&str]) -> DateEntities {
        extract_entities(tokens, lexicon::MONTH_CUTOFF, DEFAULT_CENTURY_PREFIX)
    }

    #[test]
    fn four_digit_year() {
        let entities = extract(&["1992"]);
        assert_eq!(entities.year.as_deref(), Some("1992"));
    }

    #[test]
    fn two_digit_year_gets_century() {
        let entities = extract(&["98"]);
        assert_eq!(entities.year.as_deref(), Some("1998"));
    }

    #[test]
    fn century_prefix_configurable() {
        let entities = extract_entities(&["98"], lexicon::MONTH_CUTOFF, "20");
        assert_eq!(entities.year.as_deref(), Some("2098"));
    }

    #[test]
    fn odd_shape_clears_year() {
        let entities = extract(&["1992", "300"]);
        assert_eq!(entities.year, None);
    }

    #[test]
    fn day_in_range() {
        let entities = extract(&["15", "aprel"]);
        assert_eq!(entities.day.as_deref(), Some("15"));
        assert_eq!(entities.month.as_deref(), Some("aprel"));
    }

    #[test]
    fn second_day_candidate_clears_slot() {
        let entities = extract(&["15", "17"]);
        assert_eq!(entities.day, None);
    }

    #[test]
    fn first_month_wins() {
        let entities = extract(&["may", "iyun"]);
        assert_eq!(entities.month.as_deref(), Some("may"));
    }

    #[test]
    fn misspelled_month_resolves_canonical() {
        let entities = extract(&["sentabr"]);
        assert_eq!(entities.month.as_deref(), Some("sentyabr"));
    }

    #[test]
    fn zero_is_ignored() {
        let entities = extract(&["0"]);
        assert_eq!(entities, DateEntities::default());
    }

    #[test]
    fn detector_counts_digit_groups() {
        assert!(has_three_digit_groups(&["17", ":", "06", ":", "1992"]));
        assert!(!has_three_digit_groups(&["1992", "ci", "il", "17", "aprel"]));
        assert!(!has_three_digit_groups(&[]));
    }
}
