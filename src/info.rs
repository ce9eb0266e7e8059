//! Informational functions.

use crate::report;

pub fn help() {
    println!(
        "\
buylinks - Find purchase links for the tracks of a SoundCloud playlist

USAGE
    buylinks [OPTIONS] [URL]

    Loads the playlist at URL in a headless browser, scrolling until every
    track is listed, then visits each track page looking for a link whose
    text mentions 'buy' or 'purchase'.

    If URL is omitted, it is asked for interactively.

OUTPUT
    {}
        'TITLE: LINK' for every track with a purchase link
    {}
        'TITLE' and the track URL for every other track

    Both files are overwritten on every run.

OPTIONS
    -h      Show this help message
    -v      Verbosely show what is being processed (or set RUST_LOG)
    -p SECS Pause after every scroll, default 2
    -w SECS Wait for the playlist to render before scrolling, default 3
    -m N    Stop scrolling after N scrolls, default unlimited
    -o DIR  Write the output files to DIR instead of the current directory
    -s      Show the browser window instead of running headless

EXAMPLE
    buylinks -m 50 -o ~/music https://soundcloud.com/artist/sets/playlist
",
        report::FOUND_FILE,
        report::NOT_FOUND_FILE
    );
}
