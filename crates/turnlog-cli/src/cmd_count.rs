use crate::config::MarkerConfig;
use anyhow::Context;
use std::path::Path;
use turnlog_parse::{extract_region, parse};

pub fn execute(file: &Path, markers: Option<&Path>, strip_banners: bool) -> anyhow::Result<()> {
    let config = MarkerConfig::resolve(markers)?;
    let table = config.table()?;

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading log file {}", file.display()))?;
    let body = if strip_banners {
        extract_region(&raw, &config.banners.begin, &config.banners.end)
    } else {
        raw.as_str()
    };

    let turns = parse(body, &table);
    println!("{}", turns.len());
    Ok(())
}
