use std::{env, io, process};

fn main() {
    let config = buylinks::Config::build(env::args()).unwrap_or_else(|e| {
        eprintln!("Problem parsing arguments: {}", e);
        process::exit(1);
    });

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = buylinks::run(config, io::stdin().lock()) {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}
