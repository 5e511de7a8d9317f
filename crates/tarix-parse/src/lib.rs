//! Token pipeline for colloquial Azerbaijani date expressions: tokenize,
//! fuzzy-map number words, collapse hundreds, merge adjacent numerals, and
//! extract year/month/day entities.

pub mod collapse;
pub mod elements;
pub mod extract;
pub mod lexicon;
pub mod merge;
pub mod normalize;
pub mod stem;
pub mod token;
pub mod tokenizer;

pub use elements::DateEntities;
pub use stem::{RootStemmer, Stemmer};
pub use token::Token;

/// One-shot conversion with the default cutoffs and built-in stemmer.
///
/// # Example
/// ```
/// let converted = tarix_parse::convert("iki min uch on doqquz aprel");
/// assert_eq!(converted, "2003 19 aprel");
/// ```
pub fn convert(input: &str) -> String {
    let tokens = tokenizer::tokenize(input, &RootStemmer, lexicon::SUFFIX_CUTOFF);
    let tokens = normalize::normalize(tokens, lexicon::NUMBER_CUTOFF);
    let tokens = collapse::collapse_hundreds(tokens);
    merge::merge_numerals(&tokens)
}
