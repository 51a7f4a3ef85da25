//! Per-language word lists
//!
//! Connectives, curated stopword additions and abbreviations. These are
//! closed lists chosen per locale, not derived from data.

use super::model::Language;

/// Discourse connectives that earn a sentence the similarity boost
pub fn connectives(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "however",
            "but",
            "because",
            "therefore",
            "thus",
            "hence",
            "consequently",
            "moreover",
            "furthermore",
            "additionally",
            "nevertheless",
            "nonetheless",
        ],
        Language::Turkish => &[
            "ancak",
            "fakat",
            "lakin",
            "ama",
            "çünkü",
            "zira",
            "dolayısıyla",
            "böylece",
            "ayrıca",
            "dahası",
        ],
        Language::German => &[
            "jedoch", "aber", "weil", "denn", "deshalb", "daher", "außerdem", "trotzdem", "somit",
            "folglich",
        ],
        Language::French => &[
            "cependant", "mais", "parce", "car", "donc", "ainsi", "toutefois", "pourtant",
            "néanmoins", "puisque",
        ],
        Language::Spanish => &[
            "pero", "porque", "además", "entonces", "aunque", "asimismo", "consecuentemente",
            "sino", "igualmente",
        ],
        Language::Italian => &[
            "però", "perché", "quindi", "inoltre", "tuttavia", "dunque", "infatti", "pertanto",
        ],
        Language::Portuguese => &[
            "porém", "porque", "portanto", "outrossim", "contudo", "todavia", "entretanto",
            "assim",
        ],
        Language::Dutch => &[
            "maar", "omdat", "daarom", "echter", "bovendien", "dus", "toch", "immers",
        ],
    }
}

/// Conjunctions and short function words added on top of the stopword list
///
/// Connectives are always included as well.
pub fn extra_stopwords(language: Language) -> Vec<&'static str> {
    let base: &[&str] = match language {
        Language::English => &[
            "and", "or", "nor", "so", "yet", "since", "although", "though", "also", "besides",
            "meanwhile", "instead", "otherwise", "indeed",
        ],
        Language::Turkish => &[
            "ve", "veya", "ile", "bu", "şu", "için", "gibi", "kadar", "üstelik", "hatta",
            "örneğin",
        ],
        Language::German => &["und", "oder", "sowie", "auch"],
        Language::French => &["et", "ou", "aussi", "puis"],
        Language::Spanish => &["y", "o", "también", "pues"],
        Language::Italian => &["e", "o", "anche", "poi"],
        Language::Portuguese => &["e", "ou", "também", "pois"],
        Language::Dutch => &["en", "of", "ook", "want"],
    };
    base.iter()
        .chain(connectives(language).iter())
        .copied()
        .collect()
}

/// Lowercased abbreviations (without the final period) that do not end a sentence
pub fn abbreviations(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "inc", "ltd",
            "corp", "fig", "approx", "dept", "gen", "gov", "mt", "jan", "feb", "mar", "apr",
            "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "a.m", "p.m",
        ],
        Language::Turkish => &[
            "dr", "prof", "doç", "sn", "vb", "vs", "örn", "bkz", "yy", "av", "müh", "yrd", "şti",
            "ltd",
        ],
        Language::German => &[
            "z.b", "bzw", "usw", "dr", "prof", "nr", "ca", "vgl", "d.h", "u.a", "hr", "fr",
        ],
        Language::French => &["m", "mme", "mlle", "dr", "p.ex", "cf", "av", "bd"],
        Language::Spanish => &["sr", "sra", "srta", "dr", "dra", "ud", "uds", "p.ej", "av"],
        Language::Italian => &["sig", "sig.ra", "dott", "prof", "avv", "ing", "ecc"],
        Language::Portuguese => &["sr", "sra", "dr", "dra", "prof", "av", "ex"],
        Language::Dutch => &["dhr", "mevr", "dr", "prof", "bijv", "o.a", "m.a.w"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_lists() {
        for language in Language::ALL {
            assert!(!connectives(language).is_empty());
            assert!(!abbreviations(language).is_empty());
            assert!(extra_stopwords(language).len() > connectives(language).len());
        }
    }

    #[test]
    fn test_lists_are_lowercase() {
        for language in Language::ALL {
            for word in extra_stopwords(language)
                .iter()
                .chain(abbreviations(language).iter())
            {
                assert_eq!(*word, word.to_lowercase(), "{word} in {language:?}");
            }
        }
    }
}
