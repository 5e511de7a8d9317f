//! Raw-text segmentation and stem-aware token splitting.

use unicode_normalization::UnicodeNormalization;

use crate::lexicon;
use crate::stem::Stemmer;

/// Case-fold the Azerbaijani way before segmentation: NFKC first, then
/// dotted capital İ lowers to plain `i` and dotless capital I to `ı`.
/// The locale-independent `to_lowercase` gets both wrong (İ grows a
/// combining dot, I folds to dotted i).
fn fold_case(input: &str) -> String {
    let mapped: String = input
        .nfkc()
        .map(|c| match c {
            'İ' => 'i',
            'I' => 'ı',
            c => c,
        })
        .collect();
    mapped.to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split folded text into words (alphanumeric runs) and standalone
/// punctuation characters. Whitespace separates and is dropped.
fn segment(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if is_word_char(c) {
            let start = i;
            while i < chars.len() && is_word_char(chars[i]) {
                i += 1;
            }
            out.push(chars[start..i].iter().collect());
            continue;
        }

        out.push(c.to_string());
        i += 1;
    }

    out
}

/// Tokenize raw text into word/punctuation tokens.
///
/// Known number words and preserved punctuation pass through verbatim,
/// stoplisted tokens are dropped, and everything else is stemmed — when the
/// stemmer shortens a word, the removed suffix becomes its own token after
/// suffix shortening at `suffix_cutoff`.
pub fn tokenize<S: Stemmer>(input: &str, stemmer: &S, suffix_cutoff: f64) -> Vec<String> {
    let folded = fold_case(input);
    let mut tokens = Vec::new();

    for elem in segment(&folded) {
        if lexicon::number_value(&elem).is_some() || lexicon::PRESERVED.contains(&elem.as_str()) {
            tokens.push(elem);
        } else if lexicon::ELIMINATED.contains(&elem.as_str()) {
            continue;
        } else {
            push_root_and_suffix(&elem, stemmer, suffix_cutoff, &mut tokens);
        }
    }

    tokens
}

/// Stem one word; emit the root (unless the degenerate stem consumed the
/// whole word) followed by the shortened suffix, if any was removed.
fn push_root_and_suffix<S: Stemmer>(
    word: &str,
    stemmer: &S,
    suffix_cutoff: f64,
    out: &mut Vec<String>,
) {
    let root = stemmer.stem(word);
    let root_len = root.chars().count();
    if root_len > 0 {
        out.push(root);
    }

    let word_len = word.chars().count();
    if root_len < word_len {
        let suffix: String = word.chars().skip(root_len).collect();
        out.push(lexicon::shorten_suffix(&suffix, suffix_cutoff));
    }
}
