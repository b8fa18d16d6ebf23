use turnlog_core::{MarkerTable, Role, Turn};

/// Segment a raw dialogue log into role-tagged, ordered turns.
///
/// Single forward pass over `raw`, one line at a time. A line that
/// matches a configured marker closes the turn being accumulated (if
/// its trimmed content is non-empty) and opens a new one, seeded with
/// whatever inline content follows the marker on the same line. Any
/// other line is appended verbatim to the open turn, or discarded when
/// no turn has started yet. Unrecognized role tokens are ordinary text,
/// never a turn with a substituted role.
///
/// Total over all inputs: malformed logs and marker-free logs yield an
/// empty vec, not an error.
pub fn parse(raw: &str, markers: &MarkerTable) -> Vec<Turn> {
    let mut turns: Vec<Turn> = Vec::new();
    let mut open: Option<(Role, String)> = None;

    for line in raw.lines() {
        if let Some(m) = markers.match_line(line) {
            flush(&mut turns, open.take());
            open = Some((m.role, m.inline.to_string()));
        } else if let Some((_, acc)) = open.as_mut() {
            // Original line, not the stripped one: internal indentation
            // belongs to the content.
            if !acc.is_empty() {
                acc.push('\n');
            }
            acc.push_str(line);
        }
        // No open turn: pre-marker noise, dropped silently.
    }
    flush(&mut turns, open);
    turns
}

/// Commit an open turn if it has any content left after trimming.
fn flush(turns: &mut Vec<Turn>, open: Option<(Role, String)>) {
    if let Some((role, acc)) = open {
        let content = acc.trim();
        if !content.is_empty() {
            turns.push(Turn {
                role,
                content: content.to_string(),
                sequence_index: turns.len(),
            });
        }
    }
}
