//! Morphological stemming seam.
//!
//! The pipeline consumes stemming as a black box: word in, root out. The
//! trait keeps the tokenizer independent of any particular analyzer; the
//! shipped [`RootStemmer`] covers the nominal inflection that shows up in
//! date expressions and nothing more.

use crate::lexicon;

/// Reduces a word to its root.
pub trait Stemmer {
    /// Return the root of `word`. May return the word unchanged when no
    /// rule applies, and may return an empty string for a word that is
    /// entirely a suffix — callers must guard before computing suffix
    /// length.
    fn stem(&self, word: &str) -> String;
}

/// Which stem ending a suffix attaches to. Azerbaijani picks the
/// consonant-initial genitive/ordinal variants after vowel-final stems and
/// the vowel-initial variants after consonant-final stems.
#[derive(Clone, Copy)]
enum Attach {
    Vowel,
    Consonant,
    Any,
}

/// Nominal inflection suffixes, longest first within each family.
const INFLECTIONS: &[(&str, Attach)] = &[
    // ordinals: birinci, altıncı
    ("ıncı", Attach::Consonant),
    ("inci", Attach::Consonant),
    ("uncu", Attach::Consonant),
    ("üncü", Attach::Consonant),
    ("ncı", Attach::Vowel),
    ("nci", Attach::Vowel),
    ("ncu", Attach::Vowel),
    ("ncü", Attach::Vowel),
    // genitive: ayının, minin
    ("nın", Attach::Vowel),
    ("nin", Attach::Vowel),
    ("nun", Attach::Vowel),
    ("nün", Attach::Vowel),
    ("ın", Attach::Consonant),
    ("in", Attach::Consonant),
    ("un", Attach::Consonant),
    ("ün", Attach::Consonant),
    // ablative / locative: ildən, ayda
    ("dan", Attach::Any),
    ("dən", Attach::Any),
    ("da", Attach::Any),
    ("də", Attach::Any),
    // possessive: marti, beshi
    ("ı", Attach::Consonant),
    ("i", Attach::Consonant),
    ("u", Attach::Consonant),
    ("ü", Attach::Consonant),
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'ə' | 'i' | 'ı' | 'o' | 'ö' | 'u' | 'ü')
}

/// Single-pass longest-suffix stripper for Azerbaijani nominal inflection.
///
/// Segmentation is often ambiguous without a lexicon ("ikinci" could be
/// ik + inci or iki + nci), so among form-valid splits a root that is a
/// known number word or month wins; otherwise the longest suffix does.
/// Keeps at least two root characters (three before a vowel-attaching
/// suffix, so "minin" resolves to min + in rather than mi + nin) and never
/// touches digit groups or bare month roots.
#[derive(Debug, Default, Clone, Copy)]
pub struct RootStemmer;

impl Stemmer for RootStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().all(|c| c.is_ascii_digit()) {
            return word.to_string();
        }
        if lexicon::MONTHS.contains(&word) {
            return word.to_string();
        }

        let mut first_valid: Option<&str> = None;
        for (suffix, attach) in INFLECTIONS {
            let Some(root) = word.strip_suffix(suffix) else {
                continue;
            };
            let Some(last) = root.chars().last() else {
                continue;
            };
            let fits = match attach {
                Attach::Vowel => root.chars().count() >= 3 && is_vowel(last),
                Attach::Consonant => root.chars().count() >= 2 && !is_vowel(last),
                Attach::Any => root.chars().count() >= 2,
            };
            if !fits {
                continue;
            }
            if lexicon::number_value(root).is_some() || lexicon::MONTHS.contains(&root) {
                return root.to_string();
            }
            first_valid.get_or_insert(root);
        }

        first_valid.unwrap_or(word).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        RootStemmer.stem(word)
    }

    #[test]
    fn strips_ordinals() {
        assert_eq!(stem("ikinci"), "iki");
        assert_eq!(stem("birinci"), "bir");
        assert_eq!(stem("uchuncu"), "uch");
        assert_eq!(stem("doqquzuncu"), "doqquz");
        assert_eq!(stem("onuncu"), "on");
        assert_eq!(stem("dördüncü"), "dörd");
    }

    #[test]
    fn known_root_beats_longer_suffix() {
        // ıncı would leave "alt"; the lexicon prefers altı + ncı.
        assert_eq!(stem("altıncı"), "altı");
    }

    #[test]
    fn strips_genitive() {
        assert_eq!(stem("ilin"), "il");
        assert_eq!(stem("minin"), "min");
        assert_eq!(stem("sekkizin"), "sekkiz");
        assert_eq!(stem("ayının"), "ayı");
    }

    #[test]
    fn strips_possessive() {
        assert_eq!(stem("marti"), "mart");
        assert_eq!(stem("beshi"), "besh");
    }

    #[test]
    fn month_roots_untouched() {
        assert_eq!(stem("iyun"), "iyun");
        assert_eq!(stem("iyul"), "iyul");
        assert_eq!(stem("aprel"), "aprel");
    }

    #[test]
    fn inflected_months_still_stem() {
        assert_eq!(stem("iyunun"), "iyun");
        assert_eq!(stem("martın"), "mart");
        assert_eq!(stem("aprelin"), "aprel");
    }

    #[test]
    fn short_roots_kept_whole() {
        assert_eq!(stem("gün"), "gün");
        assert_eq!(stem("on"), "on");
    }

    #[test]
    fn digits_untouched() {
        assert_eq!(stem("1992"), "1992");
        assert_eq!(stem("06"), "06");
    }
}
