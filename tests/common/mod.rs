//! Integration testing helper functions.

use buylinks::inspect::{Fetch, FetchError};
use buylinks::load::Page;
use buylinks::Config;
use std::cell::Cell;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

pub fn setup(mut args: Vec<&str>) -> Result<Config, Box<dyn Error>> {
    args.insert(0, "buylinks");
    let args = args.into_iter().map(|s| String::from(s));
    Config::build(args)
}

/// A config that does not wait between scrolls and writes its output to `dir`.
pub fn instant(dir: &Path) -> Config {
    setup(vec!["-p", "0", "-w", "0", "-o", dir.to_str().unwrap()]).unwrap()
}

/// A playlist page that grows once per scroll until all of `html` is shown.
pub struct FakePlaylist {
    html: String,
    growth: usize,
    scrolls: Cell<usize>,
}

impl FakePlaylist {
    pub fn new(html: &str, growth: usize) -> Self {
        Self {
            html: String::from(html),
            growth,
            scrolls: Cell::new(0),
        }
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }
}

impl Page for FakePlaylist {
    fn navigate(&self, _url: &str) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn scroll_height(&self) -> Result<u64, Box<dyn Error>> {
        Ok(1000 * self.scrolls.get().min(self.growth) as u64)
    }

    fn scroll_to_bottom(&self) -> Result<(), Box<dyn Error>> {
        self.scrolls.set(self.scrolls.get() + 1);
        Ok(())
    }

    fn content(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.html.clone())
    }
}

/// Serves canned track pages; unknown URLs fail like an unreachable host.
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, u16>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(String::from(url), Ok(String::from(html)));
        self
    }

    pub fn status(mut self, url: &str, code: u16) -> Self {
        self.pages.insert(String::from(url), Err(code));
        self
    }
}

impl Fetch for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(code)) => Err(FetchError::Status(*code)),
            None => Err(FetchError::Transport(format!("{}: Connection refused", url))),
        }
    }
}

pub fn track_page(title: &str, links: &[(&str, &str)]) -> String {
    let anchors = links
        .iter()
        .map(|(href, text)| format!("<a href=\"{}\">{}</a>", href, text))
        .collect::<Vec<String>>()
        .join("\n");
    format!(
        "<html><head><title>{} | SoundCloud</title></head><body>{}</body></html>",
        title, anchors
    )
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
