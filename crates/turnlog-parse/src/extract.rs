/// Slice out the conversation body between two banner lines.
///
/// Voice-log dumps often wrap the dialogue in banners like
/// `===== FULL TRANSCRIPT (auto) =====` / `===== END OF TRANSCRIPT =====`.
/// The region starts after the first line containing `begin` and ends
/// before the next line containing `end`. If either banner is missing
/// the whole input is returned, so un-bannered logs pass through
/// unchanged. The result is trimmed either way.
pub fn extract_region<'a>(raw: &'a str, begin: &str, end: &str) -> &'a str {
    let mut offset = 0;
    let mut body_start: Option<usize> = None;
    let mut body_end: Option<usize> = None;

    for line in raw.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if body_start.is_none() {
            if line.contains(begin) {
                body_start = Some(offset);
            }
        } else if line.contains(end) {
            body_end = Some(line_start);
            break;
        }
    }

    match (body_start, body_end) {
        (Some(s), Some(e)) => raw[s..e].trim(),
        _ => raw.trim(),
    }
}
