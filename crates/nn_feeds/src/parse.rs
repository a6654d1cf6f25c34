//! RSS/Atom documents into plain-text [`Article`]s.

use atom_syndication::Feed;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use nn_core::{Article, Error, Result};
use rss::Channel;
use scraper::{Html, Selector};

use crate::sources::FeedSource;

pub const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M";

lazy_static! {
    static ref IMG_SELECTOR: Selector = Selector::parse("img[src]").expect("img selector is valid");
}

/// Parses an RSS 2.0 channel, falling back to Atom.
pub fn parse_feed(bytes: &[u8], source: &FeedSource) -> Result<Vec<Article>> {
    if let Ok(channel) = Channel::read_from(bytes) {
        return Ok(channel
            .items()
            .iter()
            .filter_map(|item| from_rss_item(item, source))
            .collect());
    }

    if let Ok(feed) = Feed::read_from(bytes) {
        return Ok(feed
            .entries()
            .iter()
            .filter_map(|entry| from_atom_entry(entry, source))
            .collect());
    }

    Err(Error::Feed(format!(
        "{} is neither an RSS nor an Atom document",
        source.url
    )))
}

fn from_rss_item(item: &rss::Item, source: &FeedSource) -> Option<Article> {
    let title = item.title().map(plain_text).unwrap_or_default();
    let url = item
        .link()
        .map(str::to_string)
        .or_else(|| {
            item.guid()
                .filter(|g| g.is_permalink())
                .map(|g| g.value().to_string())
        })
        .unwrap_or_default();
    if title.is_empty() && url.is_empty() {
        return None;
    }

    let markup = item.description().or_else(|| item.content()).unwrap_or_default();
    let image = item
        .enclosure()
        .filter(|e| e.mime_type().starts_with("image/"))
        .map(|e| e.url().to_string())
        .or_else(|| media_url(item.extensions()))
        .or_else(|| first_image(markup));

    Some(Article {
        title,
        summary: plain_text(markup),
        tags: item
            .categories()
            .iter()
            .map(|c| plain_text(c.name()))
            .filter(|t| !t.is_empty())
            .collect(),
        source: source.name.clone(),
        published: item.pub_date().map(format_published).unwrap_or_default(),
        url,
        image,
    })
}

fn from_atom_entry(entry: &atom_syndication::Entry, source: &FeedSource) -> Option<Article> {
    let title = plain_text(&entry.title().value);
    let url = entry
        .links()
        .iter()
        .find(|l| l.rel() == "alternate")
        .or_else(|| entry.links().first())
        .map(|l| l.href().to_string())
        .unwrap_or_default();
    if title.is_empty() && url.is_empty() {
        return None;
    }

    let markup = entry
        .summary()
        .map(|s| s.value.as_str())
        .or_else(|| entry.content().and_then(|c| c.value()))
        .unwrap_or_default();
    let image = entry
        .links()
        .iter()
        .find(|l| {
            l.rel() == "enclosure" && l.mime_type().map_or(false, |m| m.starts_with("image/"))
        })
        .map(|l| l.href().to_string())
        .or_else(|| first_image(markup));

    let published = entry.published().unwrap_or_else(|| entry.updated());

    Some(Article {
        title,
        summary: plain_text(markup),
        tags: entry
            .categories()
            .iter()
            .map(|c| plain_text(c.label().unwrap_or_else(|| c.term())))
            .filter(|t| !t.is_empty())
            .collect(),
        source: source.name.clone(),
        published: published.with_timezone(&Utc).format(PUBLISHED_FORMAT).to_string(),
        url,
        image,
    })
}

/// `media:content` / `media:thumbnail` url, if present.
fn media_url(extensions: &rss::extension::ExtensionMap) -> Option<String> {
    let media = extensions.get("media")?;
    ["content", "thumbnail"]
        .iter()
        .filter_map(|name| media.get(*name))
        .flatten()
        .find_map(|ext| ext.attrs().get("url").cloned())
}

/// Text content of a markup fragment with entities decoded and whitespace collapsed.
pub fn plain_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `src` of the first `<img>` in a markup fragment.
pub fn first_image(markup: &str) -> Option<String> {
    if !markup.contains("<img") {
        return None;
    }
    let fragment = Html::parse_fragment(markup);
    let src = fragment
        .select(&IMG_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string);
    src
}

/// RFC 2822 or RFC 3339 date as `YYYY-MM-DD HH:MM` (UTC); empty when unparseable.
pub fn format_published(raw: &str) -> String {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|d| d.with_timezone(&Utc).format(PUBLISHED_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> FeedSource {
        FeedSource::new("srf", "SRF", "https://www.srf.ch/news/bnf/rss/1646").unwrap()
    }

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>SRF News</title>
    <link>https://www.srf.ch/news</link>
    <description>Neuste Beiträge</description>
    <item>
      <title>Ukraine-Krieg: neue Offensive</title>
      <link>https://www.srf.ch/news/1</link>
      <description><![CDATA[<p>Die <b>Armee</b> meldet Gel&auml;ndegewinne.</p><img src="https://img.srf.ch/1.jpg"/>]]></description>
      <category>International</category>
      <category>Ukraine</category>
      <pubDate>Wed, 01 May 2024 13:45:00 +0200</pubDate>
    </item>
    <item>
      <title>Wahlen in Polen</title>
      <guid isPermaLink="true">https://www.srf.ch/news/2</guid>
      <description>Knappes Resultat</description>
      <enclosure url="https://img.srf.ch/2.jpg" length="0" type="image/jpeg"/>
      <pubDate>not a date</pubDate>
    </item>
    <item>
      <title>Bahnstreik</title>
      <link>https://www.srf.ch/news/3</link>
      <media:content url="https://img.srf.ch/3.jpg" medium="image"/>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Beispiel</title>
  <id>urn:example:feed</id>
  <updated>2024-05-02T08:00:00Z</updated>
  <entry>
    <title>Waldbrand in Kalifornien</title>
    <id>urn:example:1</id>
    <link rel="alternate" href="https://example.org/waldbrand"/>
    <updated>2024-05-02T08:00:00Z</updated>
    <published>2024-05-01T22:30:00-02:00</published>
    <summary type="html">&lt;p&gt;Tausende auf der Flucht&lt;/p&gt;</summary>
    <category term="waldbrand" label="Waldbrand"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss() {
        let articles = parse_feed(RSS.as_bytes(), &source()).unwrap();
        assert_eq!(articles.len(), 3);

        let first = &articles[0];
        assert_eq!(first.title, "Ukraine-Krieg: neue Offensive");
        assert_eq!(first.summary, "Die Armee meldet Geländegewinne.");
        assert_eq!(first.tags, vec!["International", "Ukraine"]);
        assert_eq!(first.source, "SRF");
        assert_eq!(first.published, "2024-05-01 11:45");
        assert_eq!(first.url, "https://www.srf.ch/news/1");
        assert_eq!(first.image.as_deref(), Some("https://img.srf.ch/1.jpg"));

        let second = &articles[1];
        assert_eq!(second.url, "https://www.srf.ch/news/2");
        assert_eq!(second.published, "");
        assert_eq!(second.image.as_deref(), Some("https://img.srf.ch/2.jpg"));

        assert_eq!(articles[2].image.as_deref(), Some("https://img.srf.ch/3.jpg"));
        assert!(articles[2].summary.is_empty());
    }

    #[test]
    fn test_parse_atom() {
        let articles = parse_feed(ATOM.as_bytes(), &source()).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Waldbrand in Kalifornien");
        assert_eq!(articles[0].summary, "Tausende auf der Flucht");
        assert_eq!(articles[0].url, "https://example.org/waldbrand");
        assert_eq!(articles[0].tags, vec!["Waldbrand"]);
        assert_eq!(articles[0].published, "2024-05-02 00:30");
    }

    #[test]
    fn test_parse_rejects_other_documents() {
        let result = parse_feed(b"<html><body>nope</body></html>", &source());
        assert!(matches!(result, Err(Error::Feed(_))));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("<p>Hallo&nbsp;<i>Welt</i></p>\n\n  !"), "Hallo Welt !");
        assert_eq!(plain_text("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(plain_text(""), "");
    }

    #[test]
    fn test_first_image() {
        assert_eq!(
            first_image(r#"<p>x</p><img alt="a" src=" https://a.example/i.png ">"#).as_deref(),
            Some("https://a.example/i.png")
        );
        assert_eq!(first_image("<p>no image</p>"), None);
    }

    #[test]
    fn test_format_published() {
        assert_eq!(format_published("Tue, 30 Apr 2024 22:05:00 GMT"), "2024-04-30 22:05");
        assert_eq!(format_published("2024-04-30T22:05:00+02:00"), "2024-04-30 20:05");
        assert_eq!(format_published("gestern"), "");
    }
}
