//! Canonical tables for Azerbaijani number words, ordinal suffixes, and
//! month names, plus the fuzzy lookups that tolerate misspellings and
//! transliteration variants.
//!
//! The tables are ordered slices rather than maps: fuzzy lookups resolve
//! score ties to the first entry in table order, so iteration order is part
//! of the contract.

/// Similarity cutoff for mapping a word to a canonical number word.
pub const NUMBER_CUTOFF: f64 = 0.81;

/// Similarity cutoff for shortening an ordinal suffix.
pub const SUFFIX_CUTOFF: f64 = 0.7;

/// Similarity cutoff for recognizing a month name.
pub const MONTH_CUTOFF: f64 = 0.85;

/// Spelled-out number words and their transliteration variants.
/// Many-to-one: every common misspelling keys the same value.
pub static NUMBER_WORDS: &[(&str, u64)] = &[
    ("sifir", 0),
    ("bir", 1),
    ("iki", 2),
    ("üç", 3),
    ("üc", 3),
    ("uc", 3),
    ("uç", 3),
    ("üş", 3),
    ("uch", 3),
    ("dörd", 4),
    ("dört", 4),
    ("dord", 4),
    ("dort", 4),
    ("beş", 5),
    ("bes", 5),
    ("besin", 5),
    ("altı", 6),
    ("alti", 6),
    ("yeddi", 7),
    ("yedti", 7),
    ("yetti", 7),
    ("yedi", 7),
    ("yeti", 7),
    ("sekkiz", 8),
    ("sekgiz", 8),
    ("seggiz", 8),
    ("sekiz", 8),
    ("segiz", 8),
    ("sekkizinci", 8),
    ("səkkiz", 8),
    ("səkgiz", 8),
    ("səggiz", 8),
    ("səkiz", 8),
    ("səgiz", 8),
    ("doqquz", 9),
    ("doqkuz", 9),
    ("dokkuz", 9),
    ("doquz", 9),
    ("dokuz", 9),
    ("on", 10),
    ("iyirmi", 20),
    ("yirmi", 20),
    ("otuz", 30),
    ("otus", 30),
    ("qırx", 40),
    ("qirx", 40),
    ("əlli", 50),
    ("elli", 50),
    ("əli", 50),
    ("eli", 50),
    ("altmış", 60),
    ("altmis", 60),
    ("altmiş", 60),
    ("altımış", 60),
    ("altimis", 60),
    ("altimish", 60),
    ("yetmiş", 70),
    ("yetmish", 70),
    ("yetmis", 70),
    ("səksən", 80),
    ("səhsən", 80),
    ("səysən", 80),
    ("səgsən", 80),
    ("həşdat", 80),
    ("həşdad", 80),
    ("həştat", 80),
    ("seksen", 80),
    ("sehsen", 80),
    ("seysen", 80),
    ("segsen", 80),
    ("hesdat", 80),
    ("hesdad", 80),
    ("hestat", 80),
    ("heshdat", 80),
    ("heshdad", 80),
    ("heshtat", 80),
    ("doxsan", 90),
    ("dogsan", 90),
    ("doğsan", 90),
    ("yüz", 100),
    ("yuz", 100),
    ("yeddiyuz", 700),
    ("sekkizuz", 800),
    ("doqquzuz", 900),
    ("min", 1000),
    ("ikimin", 2000),
];

/// Long ordinal-suffix spellings → canonical short form
/// (birinci → "inci" → "ci", so "1 ci" after conversion).
pub static SUFFIX_FORMS: &[(&str, &str)] = &[
    ("inci", "ci"),
    ("ıncı", "ci"),
    ("üncü", "cu"),
    ("uncu", "cu"),
    ("nci", "ci"),
    ("ncı", "ci"),
    ("ncü", "cu"),
    ("ncu", "cu"),
];

/// Canonical month spellings, index 0 = yanvar.
pub static MONTHS: [&str; 12] = [
    "yanvar", "fevral", "mart", "aprel", "may", "iyun", "iyul", "avqust",
    "sentyabr", "oktyabr", "noyabr", "dekabr",
];

/// Punctuation kept as standalone tokens, never stemmed.
pub static PRESERVED: &[&str] = &[",", ".", ":", "/", "\"", "'"];

/// Tokens dropped from the stream entirely.
pub static ELIMINATED: &[&str] = &["0", "in"];

/// Exact lookup against the number-word table.
pub fn number_value(word: &str) -> Option<u64> {
    NUMBER_WORDS
        .iter()
        .find(|(spelling, _)| *spelling == word)
        .map(|(_, value)| *value)
}

/// Best fuzzy match against the number-word table at `cutoff`.
pub fn closest_number(word: &str, cutoff: f64) -> Option<u64> {
    closest(word, NUMBER_WORDS.iter().map(|(s, v)| (*s, *v)), cutoff)
}

/// Shorten an ordinal suffix to its canonical form; suffixes with no close
/// table entry are kept verbatim.
pub fn shorten_suffix(suffix: &str, cutoff: f64) -> String {
    closest(suffix, SUFFIX_FORMS.iter().map(|(l, s)| (*l, *s)), cutoff)
        .map(str::to_string)
        .unwrap_or_else(|| suffix.to_string())
}

/// Best fuzzy match against the canonical month list at `cutoff`.
pub fn closest_month(word: &str, cutoff: f64) -> Option<&'static str> {
    closest(word, MONTHS.iter().map(|m| (*m, *m)), cutoff)
}

/// Similarity ratio in [0, 1]: twice the longest common subsequence over
/// the combined length (one minus normalized insert/delete distance).
/// Substitution-free on purpose — transliteration variants differ by
/// dropped or doubled letters, and this metric scores `besh`/`bes` at
/// 0.857 where normalized Levenshtein would reject it at 0.75.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    2.0 * common_subsequence_len(&a, &b) as f64 / (a.len() + b.len()) as f64
}

/// Longest common subsequence length, single-row DP.
fn common_subsequence_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Scan candidates in table order, keeping the best score at or above
/// `cutoff`. Ties resolve to the earlier entry (strict-greater replace).
fn closest<'c, T, I>(word: &str, candidates: I, cutoff: f64) -> Option<T>
where
    I: IntoIterator<Item = (&'c str, T)>,
{
    let mut best: Option<(f64, T)> = None;
    for (candidate, value) in candidates {
        let score = similarity_ratio(word, candidate);
        if score < cutoff {
            continue;
        }
        if score == 1.0 {
            return Some(value);
        }
        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, value));
        }
    }
    best.map(|(_, value)| value)
}
