//! The conversion pipeline from raw text to extracted date entities.

use serde::Serialize;

use tarix_parse::elements::DateEntities;
use tarix_parse::stem::{RootStemmer, Stemmer};
use tarix_parse::{collapse, extract, merge, normalize, tokenizer};

use crate::config::AppConfig;
use crate::fallback;

/// How the generic-format fallback path resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Fallback {
    /// Fewer than three bare digit groups; entity extraction stands alone.
    NotNeeded,
    /// The compacted digit groups parsed against the format list.
    Parsed(String),
    /// Three or more digit groups, but no format matched. This is the one
    /// terminal failure the pipeline reports: date not recoverable.
    Unparseable,
}

/// Result of one pipeline invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// The flattened token sequence with merged numerals.
    pub converted: String,
    pub entities: DateEntities,
    pub fallback: Fallback,
}

/// Synchronous, stateless conversion pipeline. The tables it reads are
/// process-wide constants; everything mutable is local to one `run` call,
/// so a shared reference can serve concurrent callers.
pub struct Pipeline<S = RootStemmer> {
    config: AppConfig,
    stemmer: S,
}

impl Pipeline<RootStemmer> {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            stemmer: RootStemmer,
        }
    }
}

impl<S: Stemmer> Pipeline<S> {
    /// Build a pipeline around an external stemmer implementation.
    pub fn with_stemmer(config: AppConfig, stemmer: S) -> Self {
        Self { config, stemmer }
    }

    #[tracing::instrument(name = "convert", skip(self, input), fields(input = %input))]
    pub fn run(&self, input: &str) -> Conversion {
        let matching = &self.config.matching;

        let tokens = tokenizer::tokenize(input, &self.stemmer, matching.suffix_cutoff);
        let tokens = normalize::normalize(tokens, matching.number_cutoff);
        let tokens = collapse::collapse_hundreds(tokens);
        let converted = merge::merge_numerals(&tokens);

        let parts: Vec<&str> = converted.split(' ').collect();
        let entities = extract::extract_entities(
            &parts,
            matching.month_cutoff,
            &self.config.extract.century_prefix,
        );

        let fallback = if extract::has_three_digit_groups(&parts) {
            let compact = converted.replace(' ', "");
            match fallback::parse_numeric_date(&compact) {
                Some(date) => Fallback::Parsed(fallback::to_iso(date)),
                None => Fallback::Unparseable,
            }
        } else {
            Fallback::NotNeeded
        };

        tracing::debug!(converted = %converted, ?fallback, "pipeline finished");
        Conversion {
            converted,
            entities,
            fallback,
        }
    }
}
