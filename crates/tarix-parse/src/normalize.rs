//! Lexical normalization: map spelled-out number words to digit tokens.

use crate::lexicon;
use crate::token::Token;

/// Replace every token fuzzily matching the canonical number table at
/// `cutoff` with its decimal value, flagged as spelled-out. Everything
/// else — literal digit groups included — passes through unflagged.
pub fn normalize(tokens: Vec<String>, cutoff: f64) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|text| match lexicon::closest_number(&text, cutoff) {
            Some(value) => Token::new(value.to_string(), true),
            None => Token::new(text, false),
        })
        .collect()
}
