//! Pre-pass merging "<digit> 100" pairs into one three-digit token.

use crate::token::{is_digits, Token};

/// Collapse a `"100"` token into an immediately preceding single-digit
/// token: üç yüz → 3, 100 → 300. The `"100"` token's origin flag is
/// carried onto the merged slot; every other token copies through.
pub fn collapse_hundreds(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.text == "100" {
            if let Some(prev) = out.last_mut() {
                if prev.text.len() == 1 && is_digits(&prev.text) {
                    if let Ok(digit) = prev.text.parse::<u64>() {
                        prev.text = (digit * 100).to_string();
                        prev.spelled = token.spelled;
                        continue;
                    }
                }
            }
        }
        out.push(token);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, bool)]) -> Vec<Token> {
        pairs.iter().map(|(t, s)| Token::new(*t, *s)).collect()
    }

    #[test]
    fn collapses_single_digit_before_hundred() {
        let out = collapse_hundreds(tokens(&[("3", true), ("100", true), ("5", false)]));
        assert_eq!(out, tokens(&[("300", true), ("5", false)]));
    }

    #[test]
    fn carries_origin_flag_of_hundred() {
        let out = collapse_hundreds(tokens(&[("3", true), ("100", false)]));
        assert_eq!(out, tokens(&[("300", false)]));
    }

    #[test]
    fn leading_hundred_untouched() {
        let out = collapse_hundreds(tokens(&[("100", true), ("5", true)]));
        assert_eq!(out, tokens(&[("100", true), ("5", true)]));
    }

    #[test]
    fn multi_digit_predecessor_untouched() {
        let out = collapse_hundreds(tokens(&[("12", true), ("100", true)]));
        assert_eq!(out, tokens(&[("12", true), ("100", true)]));
    }

    #[test]
    fn word_predecessor_untouched() {
        let out = collapse_hundreds(tokens(&[("a", false), ("100", true)]));
        assert_eq!(out, tokens(&[("a", false), ("100", true)]));
    }

    #[test]
    fn repeated_collapse_sites() {
        // min doqquz yuz … üç yüz: each 100 absorbs only its own digit.
        let out = collapse_hundreds(tokens(&[
            ("1000", true),
            ("9", true),
            ("100", true),
            ("3", true),
            ("100", true),
        ]));
        assert_eq!(out, tokens(&[("1000", true), ("900", true), ("300", true)]));
    }
}
