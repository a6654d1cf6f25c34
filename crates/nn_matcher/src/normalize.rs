//! Text normalization, tokenization and canonicalization.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::vocab::{is_stopword, SYNONYMS};

lazy_static! {
    static ref WORD_RE: Regex =
        Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿ0-9]+").expect("word pattern is valid");
}

/// Suffixes tried by [`light_stem`], in order. The order is significant.
const SUFFIXES: [&str; 8] = ["en", "ern", "er", "em", "e", "n", "s", "es"];

const MIN_STEM_CHARS: usize = 4;

fn is_dash(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}'
            | '\u{2011}'
            | '\u{2012}'
            | '\u{2013}'
            | '\u{2014}'
            | '\u{2015}'
            | '\u{2212}'
            | '\u{FE58}'
            | '\u{FE63}'
            | '\u{FF0D}'
    )
}

/// Lower-cases, decomposes (NFKD), drops combining marks, folds `ß` to
/// `ss` and unifies dash-like characters into `-`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        match c {
            'ß' => out.push_str("ss"),
            c if is_dash(c) => out.push('-'),
            c => out.push(c),
        }
    }
    out
}

/// Words longer than two characters that are not stopwords.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let text = normalize(text);
    WORD_RE
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 2 && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Strips at most one suffix, keeping at least four characters.
pub fn light_stem(token: &str) -> &str {
    let len = token.chars().count();
    if len <= MIN_STEM_CHARS {
        return token;
    }
    for suffix in SUFFIXES {
        if token.ends_with(suffix) && len - suffix.len() >= MIN_STEM_CHARS {
            return &token[..token.len() - suffix.len()];
        }
    }
    token
}

/// Maps a token to its canonical form.
///
/// Canonical spellings are returned as they are. Anything else is stemmed
/// and the stem is looked up in the synonym table; on a miss, stemming
/// repeats until the token stops changing.
pub fn canonicalize(token: &str) -> String {
    let normalized = normalize(token);
    if SYNONYMS.get(&normalized) == Some(&normalized) {
        return normalized;
    }
    let mut current = normalized.as_str();
    loop {
        let stemmed = light_stem(current);
        if let Some(canonical) = SYNONYMS.get(stemmed) {
            return canonical.clone();
        }
        if stemmed == current {
            return current.to_string();
        }
        current = stemmed;
    }
}
