// Shared fixtures for the grouping integration tests

#![allow(dead_code)]

use nn_core::{Article, Group};

pub fn article(title: &str, summary: &str, tags: &[&str]) -> Article {
    Article::new(title, summary).with_tags(tags.iter().copied())
}

pub fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}

/// Every article title across all groups, left side first per group.
pub fn all_titles(groups: &[Group]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|g| g.articles())
        .map(|a| a.title.clone())
        .collect()
}

pub fn left_feed() -> Vec<Article> {
    vec![
        article(
            "Ukraine-Krieg: neue Offensive im Osten",
            "Die Armee meldet Geländegewinne bei Charkiw",
            &["Ukraine", "Krieg"],
        ),
        article(
            "Bundesrat beschliesst Rentenreform",
            "Das Rentenalter steigt schrittweise",
            &["Schweiz", "Renten"],
        ),
        article(
            "Waldbrand in Kalifornien ausser Kontrolle",
            "Tausende Menschen werden evakuiert",
            &["Kalifornien", "Waldbrand"],
        ),
        article("Streik legt Bahnverkehr lahm", "Pendler stehen an den Bahnhöfen", &["Bahn"]),
        article(
            "Neue Alzheimer-Therapie zugelassen",
            "Medikament verlangsamt Demenz im Frühstadium",
            &["Gesundheit", "Alzheimer"],
        ),
        article("Kommentar: Ein Jahr voller Probleme", "", &["Meinung"]),
    ]
}

pub fn right_feed() -> Vec<Article> {
    vec![
        article(
            "Fussball: Meister steht fest",
            "Am letzten Spieltag fiel die Entscheidung",
            &["Sport"],
        ),
        article(
            "Offensive im Osten der Ukraine",
            "Russland verlegt Truppen nach Charkiw",
            &["Ukraine"],
        ),
        article(
            "Alzheimer: Medikament erhält Zulassung",
            "Die Therapie soll Demenz im Frühstadium bremsen",
            &["Alzheimer", "Medizin"],
        ),
        article(
            "Kalifornien: Waldbrand zwingt Tausende zur Flucht",
            "",
            &["Waldbrand"],
        ),
        article("Bahnstreik: Pendler stranden", "Bahnhöfe überfüllt", &["Bahn", "Streik"]),
        article("Neue Rekorde an der Börse", "", &["Wirtschaft"]),
    ]
}
