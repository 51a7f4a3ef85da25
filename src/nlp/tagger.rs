//! Rule-based part-of-speech tagging
//!
//! English uses a closed-class lexicon followed by suffix heuristics, which is
//! enough to separate content words (nouns, verbs, adjectives) from function
//! words. Other languages fall back to stopword-driven tagging: function words
//! are `Other`, everything else is a noun.

use rustc_hash::FxHashMap;

use super::model::Language;
use crate::types::PosTag;

const EN_DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "my", "your", "his", "her", "its",
    "our", "their", "much", "many", "more", "most", "few", "less", "least", "several",
];

const EN_PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "who", "whom",
    "whose", "which", "what", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "themselves", "someone", "something", "anyone", "anything", "everyone",
    "everything", "nobody", "nothing", "mine", "yours", "hers", "ours", "theirs",
];

const EN_PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
    "off", "over", "under", "within", "without", "across", "along", "among", "around",
    "behind", "beyond", "despite", "toward", "towards", "upon", "via", "per", "than",
];

const EN_CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "whereas",
    "if", "unless", "since", "whether", "however", "moreover", "furthermore", "therefore",
    "thus", "hence", "consequently", "nevertheless", "nonetheless", "additionally",
];

/// Auxiliaries, modals and frequent irregular verbs
const EN_VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "can", "could", "will", "would", "shall", "should", "may", "might", "must", "make",
    "makes", "made", "take", "takes", "took", "taken", "get", "gets", "got", "go", "goes",
    "went", "gone", "say", "says", "said", "see", "sees", "saw", "seen", "know", "knows",
    "knew", "known", "think", "thinks", "thought", "come", "comes", "came", "give", "gives",
    "gave", "given", "find", "finds", "found", "need", "needs", "help", "helps", "use", "uses",
    "show", "shows", "shown", "keep", "keeps", "kept", "let", "lets", "put", "puts", "run",
    "runs", "ran", "become", "becomes", "became", "seem", "seems", "remain", "remains",
    "grow", "grows", "grew", "lead", "leads", "led", "allow", "allows", "provide", "provides",
];

const EN_ADVERBS: &[&str] = &[
    "not", "very", "also", "too", "just", "only", "even", "still", "already", "often", "never",
    "always", "sometimes", "here", "there", "now", "then", "soon", "again", "almost", "quite",
    "rather", "well", "when", "where", "why", "how", "ever", "once", "perhaps", "instead",
];

const EN_VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "izes", "ises", "ify", "ifies"];

const EN_ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "ic", "less", "ish", "al", "ary", "istic",
];

/// Part-of-speech tagger for a single language
#[derive(Debug, Clone)]
pub struct PosTagger {
    language: Language,
    lexicon: FxHashMap<&'static str, PosTag>,
}

impl PosTagger {
    pub fn new(language: Language) -> Self {
        let mut lexicon = FxHashMap::default();
        if language == Language::English {
            // later tables win on overlap
            let tables: [(&[&str], PosTag); 6] = [
                (EN_PREPOSITIONS, PosTag::Preposition),
                (EN_DETERMINERS, PosTag::Determiner),
                (EN_PRONOUNS, PosTag::Pronoun),
                (EN_ADVERBS, PosTag::Adverb),
                (EN_CONJUNCTIONS, PosTag::Conjunction),
                (EN_VERBS, PosTag::Verb),
            ];
            for (words, tag) in tables {
                for &word in words {
                    lexicon.insert(word, tag);
                }
            }
        }
        Self { language, lexicon }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Tag one word
    ///
    /// `surface` is the original form, `norm` its lowercase form, `position`
    /// the word's index within the sentence.
    pub fn tag(&self, surface: &str, norm: &str, position: usize, is_stopword: bool) -> PosTag {
        if is_numeral(norm) {
            return PosTag::Numeral;
        }

        if self.language != Language::English {
            return if is_stopword {
                PosTag::Other
            } else if position > 0 && starts_uppercase(surface) {
                PosTag::ProperNoun
            } else {
                PosTag::Noun
            };
        }

        if let Some(&tag) = self.lexicon.get(norm) {
            return tag;
        }
        if position > 0 && starts_uppercase(surface) {
            return PosTag::ProperNoun;
        }

        let len = norm.chars().count();
        if len > 4 && norm.ends_with("ly") {
            return PosTag::Adverb;
        }
        if len > 4 && EN_VERB_SUFFIXES.iter().any(|s| norm.ends_with(s)) {
            return PosTag::Verb;
        }
        if len > 4 && EN_ADJECTIVE_SUFFIXES.iter().any(|s| norm.ends_with(s)) {
            return PosTag::Adjective;
        }
        if is_stopword {
            return PosTag::Other;
        }
        PosTag::Noun
    }
}

fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%'))
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_en(word: &str, position: usize) -> PosTag {
        PosTagger::new(Language::English).tag(word, &word.to_lowercase(), position, false)
    }

    #[test]
    fn test_closed_class_words() {
        assert_eq!(tag_en("the", 0), PosTag::Determiner);
        assert_eq!(tag_en("it", 1), PosTag::Pronoun);
        assert_eq!(tag_en("of", 2), PosTag::Preposition);
        assert_eq!(tag_en("However", 0), PosTag::Conjunction);
        assert_eq!(tag_en("were", 2), PosTag::Verb);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tag_en("promising", 3), PosTag::Verb);
        assert_eq!(tag_en("optimistic", 2), PosTag::Adjective);
        assert_eq!(tag_en("quickly", 1), PosTag::Adverb);
        assert_eq!(tag_en("doctors", 2), PosTag::Noun);
    }

    #[test]
    fn test_proper_noun_only_after_first_word() {
        assert_eq!(tag_en("Doctors", 0), PosTag::Noun);
        assert_eq!(tag_en("Ankara", 3), PosTag::ProperNoun);
    }

    #[test]
    fn test_numerals() {
        assert_eq!(tag_en("2024", 1), PosTag::Numeral);
        assert_eq!(tag_en("3.5", 1), PosTag::Numeral);
        assert_eq!(tag_en("50%", 1), PosTag::Numeral);
    }

    #[test]
    fn test_non_english_fallback() {
        let tagger = PosTagger::new(Language::Turkish);
        assert_eq!(tagger.tag("ve", "ve", 1, true), PosTag::Other);
        assert_eq!(tagger.tag("zeka", "zeka", 1, false), PosTag::Noun);
        assert_eq!(tagger.tag("Ankara", "ankara", 2, false), PosTag::ProperNoun);
    }
}
