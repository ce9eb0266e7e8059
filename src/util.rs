use crate::types;
use std::io::{self, BufRead, Write};

/// Show `prompt` and read a single trimmed line from `reader`.
pub fn prompt<R: BufRead>(prompt: &str, mut reader: R) -> types::StringResult {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn parse_seconds(value: Option<String>, option: char) -> Result<std::time::Duration, String> {
    let value = value.ok_or_else(|| format!("Option '-{}' requires a value. See 'help'", option))?;
    value
        .parse::<f64>()
        .ok()
        .and_then(|seconds| std::time::Duration::try_from_secs_f64(seconds).ok())
        .ok_or_else(|| format!("Invalid number of seconds for '-{}': {}", option, value))
}
