use turnlog_core::{MarkerTable, Turn};

/// Join turns back into marker-tagged text.
///
/// Each turn renders as `TOKEN: content` using the first token the table
/// configures for its role, so `parse(render_turns(turns, m), m)`
/// reproduces the same role/content sequence. A role the table has no
/// token for renders under its canonical name, which will not re-parse;
/// tables built from a parse always cover every role they emitted.
pub fn render_turns(turns: &[Turn], markers: &MarkerTable) -> String {
    let mut out = String::new();
    for turn in turns {
        let token = markers.token_for(turn.role).unwrap_or(turn.role.as_str());
        out.push_str(token);
        out.push_str(": ");
        out.push_str(&turn.content);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use turnlog_core::{MarkerTable, Role};

    fn markers() -> MarkerTable {
        MarkerTable::new([("USER", Role::User), ("GEMINI", Role::Assistant)]).unwrap()
    }

    #[test]
    fn renders_with_configured_tokens() {
        let turns = parse("USER: q\nGEMINI: a\n", &markers());
        assert_eq!(render_turns(&turns, &markers()), "USER: q\nGEMINI: a\n");
    }

    #[test]
    fn round_trip_preserves_role_and_content_sequence() {
        let raw = "garbage preamble\nUSER:\nfirst line\n  second line\nGEMINI: short reply\nUSER: follow-up   \n";
        let m = markers();
        let turns = parse(raw, &m);
        let rendered = render_turns(&turns, &m);
        let reparsed = parse(&rendered, &m);
        assert_eq!(turns, reparsed);
    }

    #[test]
    fn multiline_content_survives_round_trip() {
        let m = markers();
        let turns = parse("USER: a\nb\n\nc\nGEMINI: d\n", &m);
        let reparsed = parse(&render_turns(&turns, &m), &m);
        assert_eq!(turns, reparsed);
        assert_eq!(reparsed[0].content, "a\nb\n\nc");
    }
}
