use crate::role::Role;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker table is empty; at least one token is required")]
    Empty,
    #[error("duplicate marker token: {token}")]
    DuplicateToken { token: String },
    #[error("unknown role: {value} (expected \"user\" or \"assistant\")")]
    UnknownRole { value: String },
}

/// A successful marker match on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    pub role: Role,
    /// Inline content on the marker line itself, after the token and an
    /// optional colon, with surrounding whitespace removed. May be empty.
    pub inline: &'a str,
}

/// Ordered set of `(marker token, canonical role)` pairs.
///
/// Tokens are unique and compared case-sensitively. A token only matches
/// at the start of a line (after stripping whitespace) and must be
/// followed by a colon, whitespace, or end of line, so `USER` does not
/// fire inside `USERNAME:`. When several tokens match the same line, the
/// longest one wins; equal lengths are broken by declaration order.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    entries: Vec<(String, Role)>,
}

impl MarkerTable {
    /// Build a table, rejecting empty input and duplicate tokens eagerly.
    /// Duplicates are a caller bug regardless of which roles they map to.
    pub fn new<I, S>(entries: I) -> Result<Self, MarkerError>
    where
        I: IntoIterator<Item = (S, Role)>,
        S: Into<String>,
    {
        let entries: Vec<(String, Role)> = entries
            .into_iter()
            .map(|(token, role)| (token.into(), role))
            .collect();
        if entries.is_empty() {
            return Err(MarkerError::Empty);
        }
        for (i, (token, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == token) {
                return Err(MarkerError::DuplicateToken {
                    token: token.clone(),
                });
            }
        }
        Ok(MarkerTable { entries })
    }

    pub fn entries(&self) -> &[(String, Role)] {
        &self.entries
    }

    /// First configured token for a role, used when rendering turns back
    /// into marker form.
    pub fn token_for(&self, role: Role) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, r)| *r == role)
            .map(|(token, _)| token.as_str())
    }

    /// Test one raw line against the table.
    ///
    /// Returns `None` for continuation lines and for tokens that are not
    /// configured here; an unrecognized token is not a marker at all.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<MarkerMatch<'a>> {
        let stripped = line.trim();
        let mut best: Option<(&str, Role)> = None;
        for (token, role) in &self.entries {
            if !stripped.starts_with(token.as_str()) {
                continue;
            }
            let rest = &stripped[token.len()..];
            let boundary_ok = match rest.chars().next() {
                None => true,
                Some(c) => c == ':' || c.is_whitespace(),
            };
            if !boundary_ok {
                continue;
            }
            // Strictly-greater keeps the earliest entry on equal length.
            match best {
                Some((seen, _)) if token.len() <= seen.len() => {}
                _ => best = Some((token.as_str(), *role)),
            }
        }
        let (token, role) = best?;
        let rest = &stripped[token.len()..];
        let inline = rest.strip_prefix(':').unwrap_or(rest).trim();
        Some(MarkerMatch { role, inline })
    }
}
