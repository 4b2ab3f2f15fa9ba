//! HTML extraction: page titles and declared favicon links

use scraper::{Html, Selector};
use url::Url;

/// Sentinel returned when a page has no readable title.
pub const NO_TITLE: &str = "No title found";

/// `rel` keywords that mark a link element as an icon resource.
const ICON_RELS: [&str; 4] = [
    "icon",
    "shortcut icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
];

/// Extract the trimmed text of the first `<title>` element.
///
/// Returns the [`NO_TITLE`] sentinel when the element is absent or empty.
/// Scoring treats the sentinel as "no evidence", never as a matchable title.
pub fn extract_title(html: &str) -> String {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("title") {
        if let Some(element) = document.select(&selector).next() {
            let title = element.text().collect::<String>().trim().to_string();
            if !title.is_empty() {
                return title;
            }
        }
    }

    NO_TITLE.to_string()
}

/// Icon URLs declared in the document's `<link>` metadata, resolved against
/// `base`, in document order. Undeclared conventional locations (e.g. a bare
/// `/favicon.ico`) are not probed.
pub fn declared_icons(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("link[rel][href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut icons = Vec::new();
    for element in document.select(&selector) {
        let rel = element.value().attr("rel").unwrap_or_default().to_lowercase();
        if !ICON_RELS.contains(&rel.as_str()) {
            continue;
        }
        if let Some(href) = element.value().attr("href") {
            if let Ok(url) = base.join(href) {
                icons.push(url);
            }
        }
    }

    icons
}
