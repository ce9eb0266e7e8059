//! Extract track links from a rendered playlist page.

use crate::macros::{regex, selector};
use crate::site;
use indexmap::IndexSet;
use scraper::Html;

/// Collect the unique track URLs linked from `html`, in document order.
///
/// A link is a track if it has the shape `https://soundcloud.com/OWNER/SLUG`
/// (optionally followed by more path, a query or a fragment) and `SLUG` is not
/// a reserved section name. Site-relative links are resolved first.
pub fn track_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let pattern = regex!(r"^https://soundcloud\.com/([^/]+)/([^/?#]+)(?:[/?#]|$)");

    let mut links: IndexSet<String> = IndexSet::new();
    for anchor in document.select(selector!("a[href]")) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = site::absolutize(href);

        if let Some(captures) = pattern.captures(&href) {
            if !site::is_reserved(&captures[2]) {
                links.insert(href);
            }
        }
    }

    log::debug!("Extracted {} track links", links.len());
    links.into_iter().collect()
}
