//! Constants describing the scraped site, and URL helpers built on them.

use url::Url;

/// Canonical origin that site-relative links are resolved against.
pub const ORIGIN: &str = "https://soundcloud.com";

/// Suffix the site appends to every page title.
pub const TITLE_SUFFIX: &str = " | SoundCloud";

/// Title recorded when a track page has no usable title.
pub const UNKNOWN_TITLE: &str = "Unknown title";

/// Second path segments that name site sections or menu items rather than tracks.
pub const RESERVED_SLUGS: [&str; 12] = [
    "sets",
    "albums",
    "tracks",
    "followers",
    "library",
    "pages",
    "charts",
    "explore",
    "search",
    "you",
    "creators.soundcloud.com",
    "blog.soundcloud.com",
];

/// A link whose visible text contains any of these (case-insensitively) is a purchase link.
pub const PURCHASE_KEYWORDS: [&str; 2] = ["buy", "purchase"];

/// Resolve a site-relative `href` (one starting with `/`) against [`ORIGIN`].
/// Any other `href` is returned as is.
pub fn absolutize(href: &str) -> String {
    if !href.starts_with('/') {
        return href.to_string();
    }

    Url::parse(ORIGIN)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", ORIGIN, href))
}

pub fn is_reserved(slug: &str) -> bool {
    let slug = slug.to_lowercase();
    RESERVED_SLUGS.contains(&slug.as_str())
}

pub fn is_purchase_text(text: &str) -> bool {
    let text = text.to_lowercase();
    PURCHASE_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutizes_relative_links() {
        assert_eq!(
            absolutize("/artist1/track1"),
            "https://soundcloud.com/artist1/track1"
        );
        assert_eq!(
            absolutize("/purchase/xyz"),
            "https://soundcloud.com/purchase/xyz"
        );
    }

    #[test]
    fn keeps_other_links() {
        assert_eq!(
            absolutize("https://artist.bandcamp.com/track/song"),
            "https://artist.bandcamp.com/track/song"
        );
        assert_eq!(absolutize("relative/path"), "relative/path");
    }

    #[test]
    fn reserved_slugs_ignore_case() {
        assert!(is_reserved("sets"));
        assert!(is_reserved("Albums"));
        assert!(is_reserved("BLOG.SOUNDCLOUD.COM"));
        assert!(!is_reserved("my-song"));
    }

    #[test]
    fn detects_purchase_text() {
        assert!(is_purchase_text("Buy it here"));
        assert!(is_purchase_text("PURCHASE on Bandcamp"));
        assert!(!is_purchase_text("Free download"));
        assert!(!is_purchase_text(""));
    }
}
