//! Drive a browser to a playlist page and scroll until all of it is loaded.

use crate::types;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A rendered page that can be navigated and scrolled.
pub trait Page {
    fn navigate(&self, url: &str) -> types::UnitResult;
    fn scroll_height(&self) -> types::U64Result;
    fn scroll_to_bottom(&self) -> types::UnitResult;
    /// The current HTML of the page, including dynamically loaded content.
    fn content(&self) -> types::StringResult;
}

impl Page for Tab {
    fn navigate(&self, url: &str) -> types::UnitResult {
        self.navigate_to(url)?.wait_until_navigated()?;
        Ok(())
    }

    fn scroll_height(&self) -> types::U64Result {
        let height = self.evaluate("document.body.scrollHeight", false)?.value;
        height
            .as_ref()
            .and_then(|value| value.as_f64())
            .map(|value| value as u64)
            .ok_or_else(|| format!("Unexpected page height: {:?}", height).into())
    }

    fn scroll_to_bottom(&self) -> types::UnitResult {
        self.evaluate("window.scrollTo(0, document.body.scrollHeight);", false)?;
        Ok(())
    }

    fn content(&self) -> types::StringResult {
        Ok(self.get_content()?)
    }
}

/// How to wait for a page to finish loading.
#[derive(Clone, Debug, PartialEq)]
pub struct Scroll {
    /// Wait after navigating, before the first measurement.
    pub render_wait: Duration,
    /// Wait after every scroll, for new content to arrive.
    pub pause: Duration,
    /// Stop after this many scrolls even if the page keeps growing.
    pub max_scrolls: Option<usize>,
}

impl Default for Scroll {
    fn default() -> Self {
        Self {
            render_wait: Duration::from_secs(3),
            pause: Duration::from_secs(2),
            max_scrolls: None,
        }
    }
}

/// Open `url` and keep scrolling to the bottom until the page height stops changing.
///
/// Without `max_scrolls`, a page that never stops growing is scrolled forever.
pub fn load_full_playlist<P: Page + ?Sized>(
    page: &P,
    url: &str,
    scroll: &Scroll,
) -> types::UnitResult {
    page.navigate(url)?;
    thread::sleep(scroll.render_wait);

    let mut last_height = page.scroll_height()?;
    let mut scrolls = 0;
    loop {
        if scroll.max_scrolls.is_some_and(|max| scrolls >= max) {
            log::warn!(
                "Stopped after {} scrolls, the playlist may be incomplete",
                scrolls
            );
            break;
        }

        page.scroll_to_bottom()?;
        scrolls += 1;
        thread::sleep(scroll.pause);

        let new_height = page.scroll_height()?;
        log::debug!("Scroll {}: height {} -> {}", scrolls, last_height, new_height);
        if new_height == last_height {
            break;
        }
        last_height = new_height;
    }

    Ok(())
}

/// A browser with a single tab, closed when dropped.
pub struct Session {
    // Keeps the browser process alive for as long as the tab is used
    _browser: Browser,
    tab: Arc<Tab>,
}

impl Session {
    pub fn launch(headless: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .build()?;
        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;
        log::debug!("Browser launched (headless: {})", headless);
        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::debug!("Closing browser");
    }
}
