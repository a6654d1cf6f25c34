//! Fixed vocabularies used by tokenization, scoring and labeling.
//!
//! Word lists are written in their natural spelling and brought into the
//! form they are compared in (normalized or canonical) when first used.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::normalize::{canonicalize, normalize};

const STOPWORDS_RAW: &[&str] = &[
    // german
    "der", "die", "das", "und", "oder", "nicht", "mit", "von", "im", "in", "am", "an", "auf",
    "für", "aus", "den", "dem", "des", "ein", "eine", "einer", "eines", "einem", "einen", "zu",
    "zum", "zur", "über", "noch", "sich", "so", "als", "bei", "nach", "vor", "bis", "wir", "ihr",
    "sie", "er", "es", "man", "auch", "mehr", "weniger", "gegen", "weil", "dass", "da", "beim",
    "ohne", "wird", "werden", "hat", "haben", "sei", "sind", "war", "waren", "kann", "können",
    "müssen", "muss", "soll", "sollen", "sollte", "sollten", "immer", "heute", "morgen",
    "gestern",
    // english
    "the", "a", "an", "and", "or", "of", "to", "in", "on", "for", "by", "with", "from", "as",
    "at", "is", "are", "be", "was", "were", "this", "that", "these", "those", "it", "its", "into",
    "about", "over", "under", "more", "new", "must", "should", "can", "could", "would", "today",
    "yesterday", "tomorrow",
];

const WEAK_TOKENS_RAW: &[&str] = &[
    "regierung", "bund", "amt", "behörde", "beamte", "behörden", "menschen", "leute", "jahr",
    "jahre", "kommentar", "bericht", "berichte", "video", "fotos", "bilder", "streit", "kritik",
    "skandal", "schutz", "schützen", "branche", "unternehmen", "regel", "regeln", "arbeit",
    "arbeiten", "arbeitsmarkt", "probleme", "problem", "wohnung", "wohnungen", "restaurant",
    "restaurants", "thema", "themen", "news", "forschung", "wissenschaft", "studie", "studien",
    "medizin", "gesundheit", "verspricht", "hilfe", "hilft", "neuartig", "angebot", "blick",
    "hintergrund",
];

const WEAK_TAGS_RAW: &[&str] = &[
    "politik", "wirtschaft", "kultur", "sport", "wissen", "wissenschaft", "gesundheit", "inland",
    "ausland", "panorama", "welt", "schweiz", "deutschland", "meinung", "analyse", "news",
    "nachrichten", "politics", "economy", "business", "culture", "science", "health", "world",
    "opinion",
];

const ANCHORS_RAW: &[&str] = &[
    // countries, regions, cities
    "ukraine", "russland", "usa", "vereinigte-staaten", "kalifornien", "israel", "gaza",
    "westjordanland", "palästina", "nato", "uno", "vereinte-nationen", "eu", "europa",
    "frankreich", "spanien", "italien", "polen", "iran", "irak", "syrien", "china", "brüssel",
    "berlin", "bern", "new-york", "großbritannien", "vereinigtes-koenigreich", "uk",
    // health
    "alzheimer", "demenz", "depression", "postpartum", "krebs", "covid", "corona", "grippe",
];

/// Canonical spelling followed by the variants folded into it.
const SYNONYMS_RAW: &[(&str, &[&str])] = &[
    // organizations
    ("uno", &["un", "united", "onu"]),
    ("vereinte-nationen", &["vereinte", "vereinten", "vereinten-nationen", "nations", "nation", "nationen"]),
    ("nato", &["otan"]),
    ("eu", &[]),
    ("europa", &["europe"]),
    // usa
    ("usa", &["us", "u.s.", "amerika", "america"]),
    ("vereinigte-staaten", &["vereinigte", "staaten", "states"]),
    ("kalifornien", &["california"]),
    ("new-york", &["york"]),
    // middle east
    ("gaza", &["gazastreifen"]),
    ("westjordanland", &["cisjordanien", "west-bank", "westbank"]),
    ("palästina", &["palestine"]),
    ("israel", &[]),
    ("iran", &[]),
    ("irak", &["iraq"]),
    ("syrien", &["syria"]),
    // uk
    ("uk", &[]),
    ("vereinigtes-koenigreich", &["vereinigtes", "koenigreich", "königreich", "kingdom"]),
    ("großbritannien", &["britannien", "britain"]),
    // countries and cities
    ("deutschland", &["germany"]),
    ("österreich", &["austria"]),
    ("schweiz", &["switzerland"]),
    ("frankreich", &["france"]),
    ("spanien", &["spain"]),
    ("italien", &["italy"]),
    ("polen", &["poland"]),
    ("china", &[]),
    ("russland", &["russia"]),
    ("ukraine", &[]),
    ("brüssel", &["brussels", "bruxelles"]),
    ("berlin", &[]),
    ("bern", &[]),
    // health
    ("alzheimer", &[]),
    ("demenz", &["dementia"]),
    ("depression", &["depressionen"]),
    ("postpartum", &["postpartal"]),
    ("krebs", &["cancer"]),
    ("corona", &["coronavirus"]),
    ("covid", &[]),
    ("grippe", &["influenza"]),
];

lazy_static! {
    /// Stopwords in normalized form.
    pub static ref STOPWORDS: HashSet<String> =
        STOPWORDS_RAW.iter().map(|w| normalize(w)).collect();

    /// Normalized variant -> canonical spelling. Every canonical spelling maps to itself.
    pub static ref SYNONYMS: HashMap<String, String> = {
        let mut map = HashMap::new();
        for (canonical, variants) in SYNONYMS_RAW {
            let canonical = normalize(canonical);
            for variant in variants.iter() {
                map.insert(normalize(variant), canonical.clone());
            }
            map.insert(canonical.clone(), canonical);
        }
        map
    };

    /// Generic words that never count as strong evidence, in canonical form.
    pub static ref WEAK_TOKENS: HashSet<String> =
        WEAK_TOKENS_RAW.iter().map(|w| canonicalize(w)).collect();

    /// Section-like tags in normalized form, matched before canonicalization.
    pub static ref WEAK_TAGS: HashSet<String> =
        WEAK_TAGS_RAW.iter().map(|w| normalize(w)).collect();

    /// Canonical anchor tokens.
    pub static ref ANCHORS: HashSet<String> = ANCHORS_RAW.iter().map(|w| canonicalize(w)).collect();
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

pub fn is_weak_token(token: &str) -> bool {
    WEAK_TOKENS.contains(token)
}

pub fn is_weak_tag(token: &str) -> bool {
    WEAK_TAGS.contains(token)
}

pub fn is_anchor(token: &str) -> bool {
    ANCHORS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_are_normalized() {
        assert!(is_stopword("fur"));
        assert!(is_stopword("uber"));
        assert!(is_stopword("konnen"));
        assert!(!is_stopword("für"));
    }

    #[test]
    fn test_anchors_are_canonical() {
        for anchor in ANCHORS.iter() {
            assert_eq!(&canonicalize(anchor), anchor);
        }
        assert!(is_anchor("ukraine"));
        assert!(is_anchor("palastina"));
        assert!(is_anchor("grossbritannien"));
    }

    #[test]
    fn test_synonym_targets_map_to_themselves() {
        for canonical in SYNONYMS.values() {
            assert_eq!(SYNONYMS.get(canonical), Some(canonical));
        }
    }

    #[test]
    fn test_weak_vocabularies() {
        assert!(is_weak_token("regierung"));
        assert!(is_weak_token(&canonicalize("Behörden")));
        assert!(is_weak_tag("politik"));
        assert!(is_weak_tag("news"));
        assert!(!is_weak_tag("ukraine"));
    }
}
