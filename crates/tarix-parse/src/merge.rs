//! Composite-number assembly over the collapsed token stream.
//!
//! Runs of adjacent spelled-out numerals combine into single integers by
//! magnitude comparison ("min doqquz yüz beş" → 1905); non-numeral tokens
//! are hard boundaries. The scan carries a small state machine whose one
//! subtle piece is [`MergeMode`]: the magnitude-overtake branch finalizes
//! the running number early, and `Confuse` suppresses the duplicate
//! finalize the fallthrough branch would otherwise emit in the same step.

use crate::token::Token;

/// Scan mode. `Confuse` is entered by the magnitude-overtake branch and
/// consumed by the new-number branch of the same scan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    Safe,
    Confuse,
}

/// Result of the pairwise merge rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged(String),
    /// The magnitudes do not compose: equal digit count, or a short
    /// multiplier on the right. The caller treats the operands as two
    /// separate numbers.
    Unmerged,
}

/// Combine an accumulated number with the next fragment by digit count.
///
/// A longer accumulator absorbs the fragment additively (1000 + 900 →
/// 1900); a fragment of three or more digits multiplies a shorter
/// accumulator (2 × 1000 → 2000); anything else does not compose.
pub fn merge_pair(accumulated: &str, fragment: &str) -> MergeOutcome {
    let (a, b) = match (accumulated.parse::<u64>(), fragment.parse::<u64>()) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return MergeOutcome::Unmerged,
    };

    if accumulated.len() > fragment.len() {
        MergeOutcome::Merged((a + b).to_string())
    } else if accumulated.len() < fragment.len() && fragment.len() >= 3 {
        MergeOutcome::Merged((a * b).to_string())
    } else {
        MergeOutcome::Unmerged
    }
}

/// State carried across one merge pass. Never reused between calls.
struct MergeState {
    /// Digits of the number currently being assembled; empty = none.
    accumulated: String,
    /// Raw numeral fragments contributing to `accumulated`.
    fragments: Vec<String>,
    mode: MergeMode,
}

/// Merge adjacent numeral tokens into composite integers and flatten the
/// sequence into a space-joined string.
pub fn merge_numerals(tokens: &[Token]) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut state = MergeState {
        accumulated: String::new(),
        fragments: Vec::new(),
        mode: MergeMode::Safe,
    };

    for (i, token) in tokens.iter().enumerate() {
        if !token.is_numeric() {
            // Word boundary: whatever was building is complete.
            if !state.accumulated.is_empty() {
                out.push(std::mem::take(&mut state.accumulated));
            }
            out.push(token.text.clone());
            state.fragments.clear();
            continue;
        }

        if state.accumulated.is_empty() {
            state.accumulated = token.text.clone();
            state.fragments.push(token.text.clone());
            continue;
        }

        step_numeral(&mut state, &mut out, tokens, i);
    }

    if !state.accumulated.is_empty() {
        out.push(state.accumulated);
    }

    out.join(" ")
}

/// One scan step for a numeral token while a number is in progress.
fn step_numeral(state: &mut MergeState, out: &mut Vec<String>, tokens: &[Token], i: usize) {
    let text = tokens[i].text.as_str();

    // Magnitude overtake: the incoming magnitude sits between the last
    // fragment and the running total, so the total is already complete
    // and a new, larger-rooted number starts here ("2003" then "10").
    // No early return — the step falls through like the branches below.
    let last_len = state.fragments.last().map_or(0, String::len);
    if state.accumulated.len() > text.len() && last_len < text.len() {
        tracing::debug!(finalized = %state.accumulated, next = text, "magnitude overtake");
        out.push(state.accumulated.clone());
        state.accumulated = text.to_string();
        state.fragments.push(text.to_string());
        state.mode = MergeMode::Confuse;
    }

    // Merge eligibility: distinct magnitude on both comparisons, and both
    // this token and its predecessor spelled out (digit groups never fuse
    // with word-derived numbers).
    let last_len = state.fragments.last().map_or(0, String::len);
    let spelled_pair = tokens[i].spelled && i > 0 && tokens[i - 1].spelled;
    if last_len != text.len() && state.accumulated.len() != text.len() && spelled_pair {
        match merge_pair(&state.accumulated, text) {
            MergeOutcome::Merged(value) => {
                state.accumulated = value;
                state.fragments.push(text.to_string());
            }
            MergeOutcome::Unmerged => {
                // Equal-magnitude neighbors stay two separate numbers.
                tracing::debug!(left = %state.accumulated, right = text, "unmergeable pair");
                out.push(std::mem::take(&mut state.accumulated));
                state.mode = MergeMode::Safe;
                state.accumulated = text.to_string();
                state.fragments = vec![text.to_string()];
            }
        }
        return;
    }

    // A new, unrelated number begins. Confuse mode means the overtake
    // branch already emitted the previous total this very step.
    state.fragments.clear();
    if !state.accumulated.is_empty() && state.mode == MergeMode::Safe {
        out.push(state.accumulated.clone());
    }
    state.mode = MergeMode::Safe;
    state.accumulated = text.to_string();
    state.fragments.push(text.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, bool)]) -> Vec<Token> {
        pairs.iter().map(|(t, s)| Token::new(*t, *s)).collect()
    }

    fn spelled(texts: &[&str]) -> Vec<Token> {
        texts.iter().map(|t| Token::new(*t, true)).collect()
    }

    #[test]
    fn pair_additive() {
        assert_eq!(merge_pair("1000", "5"), MergeOutcome::Merged("1005".into()));
        assert_eq!(merge_pair("1000", "900"), MergeOutcome::Merged("1900".into()));
        assert_eq!(merge_pair("90", "9"), MergeOutcome::Merged("99".into()));
    }

    #[test]
    fn pair_multiplicative() {
        assert_eq!(merge_pair("2", "1000"), MergeOutcome::Merged("2000".into()));
        assert_eq!(merge_pair("19", "100"), MergeOutcome::Merged("1900".into()));
    }

    #[test]
    fn pair_unmergeable() {
        // Equal digit counts.
        assert_eq!(merge_pair("80", "10"), MergeOutcome::Unmerged);
        // Larger fragment but below the multiplier threshold.
        assert_eq!(merge_pair("5", "10"), MergeOutcome::Unmerged);
    }

    #[test]
    fn additive_chain() {
        // min doqquz yüz beş, after collapse: 1000 900 5.
        let out = merge_numerals(&spelled(&["1000", "900", "5"]));
        assert_eq!(out, "1905");
    }

    #[test]
    fn multiplicative_start() {
        let out = merge_numerals(&spelled(&["2", "1000"]));
        assert_eq!(out, "2000");
    }

    #[test]
    fn overtake_finalizes_once() {
        // 2, 1000, 3 builds 2003; 10 overtakes (3 < 10 < 2003) and the
        // confuse transition must not emit 2003 a second time.
        let out = merge_numerals(&spelled(&["2", "1000", "3", "10", "5"]));
        assert_eq!(out, "2003 15");
    }

    #[test]
    fn overtake_then_boundary() {
        let out = merge_numerals(&spelled(&["1000", "900", "5", "10", "2"]));
        assert_eq!(out, "1905 12");
    }

    #[test]
    fn equal_length_starts_new_number() {
        // 90 + 5 = 95; "10" matches its length, so 95 closes and 10 + 3
        // builds 13.
        let out = merge_numerals(&spelled(&["90", "5", "10", "3"]));
        assert_eq!(out, "95 13");
    }

    #[test]
    fn unmerged_pair_survives_as_two_numbers() {
        let out = merge_numerals(&spelled(&["5", "10"]));
        assert_eq!(out, "5 10");
    }

    #[test]
    fn words_are_hard_boundaries() {
        let out = merge_numerals(&tokens(&[
            ("2", true),
            ("1000", true),
            ("ci", false),
            ("5", true),
        ]));
        assert_eq!(out, "2000 ci 5");
    }

    #[test]
    fn digit_groups_never_fuse() {
        let out = merge_numerals(&tokens(&[("1000", true), ("5", false)]));
        assert_eq!(out, "1000 5");
    }

    #[test]
    fn trailing_number_finalized() {
        let out = merge_numerals(&spelled(&["10", "9"]));
        assert_eq!(out, "19");
    }

    #[test]
    fn empty_input() {
        assert_eq!(merge_numerals(&[]), "");
    }
}
