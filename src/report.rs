//! Record the outcome of every inspected track.

use crate::inspect::TrackInfo;
use crate::types;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const FOUND_FILE: &str = "purchase_links.txt";
pub const NOT_FOUND_FILE: &str = "not_found_purchase_links.txt";

/// Writes tracks with a purchase link to one log and the rest to another,
/// echoing every outcome to the console.
pub struct Report<W: Write, C: Write = io::Stdout> {
    found: W,
    not_found: W,
    console: C,
    found_count: usize,
    not_found_count: usize,
}

impl<C: Write> Report<BufWriter<File>, C> {
    /// Create (or truncate) both output files in `dir`, echoing outcomes to `console`.
    pub fn create(dir: &Path, console: C) -> Result<Self, Box<dyn std::error::Error>> {
        let open = |name: &str| -> io::Result<BufWriter<File>> {
            let path = dir.join(name);
            log::debug!("Writing to {}", path.display());
            Ok(BufWriter::new(File::create(path)?))
        };
        Ok(Report::new(open(FOUND_FILE)?, open(NOT_FOUND_FILE)?, console))
    }
}

impl<W: Write, C: Write> Report<W, C> {
    pub fn new(found: W, not_found: W, console: C) -> Self {
        Self {
            found,
            not_found,
            console,
            found_count: 0,
            not_found_count: 0,
        }
    }

    pub fn record(&mut self, url: &str, info: &TrackInfo) -> types::UnitResult {
        match &info.purchase_link {
            Some(link) => {
                write!(self.found, "{}: {}\n\n", info.title, link)?;
                writeln!(self.console, "{} -> {}", url, link)?;
                self.found_count += 1;
            }
            None => {
                write!(self.not_found, "{}\n{}\n\n", info.title, url)?;
                writeln!(self.console, "{} -> No purchase link found.", url)?;
                self.not_found_count += 1;
            }
        }
        Ok(())
    }

    pub fn found_count(&self) -> usize {
        self.found_count
    }

    pub fn not_found_count(&self) -> usize {
        self.not_found_count
    }

    /// Flush both logs and hand back the writers.
    pub fn finish(mut self) -> Result<(W, W), Box<dyn std::error::Error>> {
        self.found.flush()?;
        self.not_found.flush()?;
        self.console.flush()?;
        Ok((self.found, self.not_found))
    }
}
