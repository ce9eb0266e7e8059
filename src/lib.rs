mod macros;

pub mod extract;
mod info;
pub mod inspect;
pub mod load;
pub mod report;
pub mod site;
mod types;
mod util;

use inspect::Fetch;
use load::Page;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use url::Url;

#[derive(Debug)]
pub struct Config {
    /// Asked for interactively when not given on the command line
    pub playlist_url: Option<String>,
    pub verbose: bool,
    pub headless: bool,
    pub scroll: load::Scroll,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playlist_url: None,
            verbose: false,
            headless: true,
            scroll: load::Scroll::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Parse options and the optional playlist URL.
    ///
    /// # Errors
    /// - If an option is not recognized, or lacks its value
    /// - If more than one URL is given
    pub fn build(mut args: impl Iterator<Item = String>) -> types::ConfigResult {
        args.next(); // Consume program name

        let mut config = Config::default();

        while let Some(arg) = args.next() {
            if arg == "--help" {
                info::help();
                process::exit(0);
            }

            if !arg.starts_with('-') || arg.len() == 1 {
                if config.playlist_url.is_some() {
                    return Err(format!("Unexpected argument: {}. See 'help'", arg).into());
                }
                config.playlist_url = Some(arg);
                continue;
            }

            for s in arg[1..].chars() {
                match s {
                    'h' => {
                        info::help();
                        process::exit(0);
                    }
                    'v' => config.verbose = true,
                    's' => config.headless = false,
                    'p' => config.scroll.pause = util::parse_seconds(args.next(), s)?,
                    'w' => config.scroll.render_wait = util::parse_seconds(args.next(), s)?,
                    'm' => {
                        config.scroll.max_scrolls = Some(Config::parse_max_scrolls(args.next())?)
                    }
                    'o' => {
                        config.output_dir = args
                            .next()
                            .map(PathBuf::from)
                            .ok_or("Option '-o' requires a directory. See 'help'")?
                    }
                    _ => return Err(format!("Unrecognized option '{}'. See 'help'", s).into()),
                };
            }
        }

        Ok(config)
    }

    fn parse_max_scrolls(value: Option<String>) -> Result<usize, String> {
        let value = value.ok_or("Option '-m' requires a number. See 'help'")?;
        match value.parse::<usize>() {
            Ok(max) if max > 0 => Ok(max),
            _ => Err(format!("Invalid maximum number of scrolls: {}", value)),
        }
    }

    /// The playlist URL from the command line, or else the one entered at the prompt.
    fn playlist_url<R: BufRead>(&self, reader: R) -> types::StringResult {
        let url = match &self.playlist_url {
            Some(url) => url.clone(),
            None => util::prompt("Enter the URL of a public SoundCloud playlist: ", reader)?,
        };

        if url.is_empty() {
            return Err("No playlist URL given".into());
        }
        if let Err(e) = Url::parse(&url) {
            return Err(format!("{} is not a URL: {}", url, e).into());
        }
        Ok(url)
    }
}

/// Load the playlist, collect its tracks, and look for a purchase link for each.
pub fn run<R: BufRead>(config: Config, reader: R) -> types::UnitResult {
    let url = config.playlist_url(reader)?;

    println!("Loading full playlist. This may take a moment...");
    let links = {
        let session = load::Session::launch(config.headless)?;
        collect_tracks(&config, session.tab(), &url)?
    }; // The browser is closed here, it is not needed for the track pages

    process_tracks(&config, &inspect::HttpFetcher::new(), &links)
}

/// Fully load the playlist at `url` in `page` and extract its track links.
pub fn collect_tracks<P: Page + ?Sized>(
    config: &Config,
    page: &P,
    url: &str,
) -> types::VecStringResult {
    load::load_full_playlist(page, url, &config.scroll)?;

    println!("Extracting track links from the playlist...");
    Ok(extract::track_links(&page.content()?))
}

/// Inspect every track and write the outcomes to the output files in `config.output_dir`.
pub fn process_tracks<F: Fetch + ?Sized>(
    config: &Config,
    fetcher: &F,
    links: &[String],
) -> types::UnitResult {
    process_tracks_with(config, fetcher, links, io::stdout())
}

/// Like [`process_tracks`], but echoes the per-track outcomes to `console`.
pub fn process_tracks_with<F: Fetch + ?Sized, C: Write>(
    config: &Config,
    fetcher: &F,
    links: &[String],
    console: C,
) -> types::UnitResult {
    if links.is_empty() {
        println!("No track links found.");
        return Ok(());
    }

    println!("\nFound tracks:");
    links.iter().for_each(|link| println!("{}", link));

    let mut report = report::Report::create(&config.output_dir, console)?;
    println!("\nAttempting to retrieve purchase links for tracks:");
    for link in links {
        let info = inspect::track_info(fetcher, link);
        report.record(link, &info)?;
    }

    log::info!(
        "{} tracks with a purchase link, {} without",
        report.found_count(),
        report.not_found_count()
    );
    report.finish()?;

    Ok(())
}
