use crate::config::MarkerConfig;
use anyhow::{bail, Context};
use clap::ValueEnum;
use std::path::Path;
use turnlog_core::{MessageRecord, Turn};
use turnlog_parse::{extract_region, parse, render_turns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of {role, content} records
    Json,
    /// One JSON record per line
    Jsonl,
    /// Marker-tagged text (TOKEN: content)
    Text,
}

pub struct ParseParams<'a> {
    pub file: &'a Path,
    pub markers: Option<&'a Path>,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
    pub strip_banners: bool,
    pub preview: Option<usize>,
    pub deny_empty: bool,
}

pub fn execute(params: ParseParams) -> anyhow::Result<()> {
    let config = MarkerConfig::resolve(params.markers)?;
    let table = config.table()?;

    let raw = std::fs::read_to_string(params.file)
        .with_context(|| format!("reading log file {}", params.file.display()))?;
    let body = if params.strip_banners {
        extract_region(&raw, &config.banners.begin, &config.banners.end)
    } else {
        raw.as_str()
    };

    let turns = parse(body, &table);

    if turns.is_empty() {
        if params.deny_empty {
            bail!("no turns parsed from {}", params.file.display());
        }
        eprintln!(
            "warning: no turns parsed from {} (no configured marker matched)",
            params.file.display()
        );
    }

    if let Some(n) = params.preview {
        print_preview(&turns, n);
    }

    let rendered = match params.format {
        OutputFormat::Json => {
            let records: Vec<MessageRecord> = turns.iter().map(MessageRecord::from).collect();
            let mut s = serde_json::to_string_pretty(&records)?;
            s.push('\n');
            s
        }
        OutputFormat::Jsonl => {
            let mut s = String::new();
            for turn in &turns {
                s.push_str(&serde_json::to_string(&MessageRecord::from(turn))?);
                s.push('\n');
            }
            s
        }
        OutputFormat::Text => render_turns(&turns, &table),
    };

    match params.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} turns to {}", turns.len(), path.display());
        }
        None => {
            print!("{rendered}");
            eprintln!("Parsed {} turns.", turns.len());
        }
    }
    Ok(())
}

/// First and last `n` turns to stderr, truncated, as a sanity check
/// before the output is handed on.
fn print_preview(turns: &[Turn], n: usize) {
    const PREVIEW_CHARS: usize = 150;
    if turns.is_empty() || n == 0 {
        return;
    }
    eprintln!("Preview (first {n}):");
    for turn in turns.iter().take(n) {
        eprintln!("  {}. [{}] {}", turn.sequence_index, turn.role, snippet(&turn.content, PREVIEW_CHARS));
    }
    if turns.len() > n {
        eprintln!("Preview (last {n}):");
        for turn in turns.iter().skip(turns.len().saturating_sub(n)) {
            eprintln!("  {}. [{}] {}", turn.sequence_index, turn.role, snippet(&turn.content, PREVIEW_CHARS));
        }
    }
}

fn snippet(content: &str, max_chars: usize) -> String {
    let first_line = content.lines().next().unwrap_or("");
    if first_line.chars().count() > max_chars || content.lines().count() > 1 {
        let truncated: String = first_line.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        first_line.to_string()
    }
}
