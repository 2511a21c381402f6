use crate::error::Error;
use crate::models::Player;

/// Extract a clean player name from one raw roster line.
///
/// Pasted lists carry all kinds of noise around the actual name: ordinal
/// prefixes ("1-", "03) "), parenthesized or bracketed notes ("(confirmada)",
/// "[reserva]"), trailing comments after a dash, and stray trailing numbers.
/// The transforms run in a fixed order; whatever survives is the name, which
/// may be nothing at all.
pub fn extract_name(line: &str) -> String {
    let name = strip_ordinal_prefix(line);
    let name = strip_delimited(&name, '(', ')');
    let name = strip_delimited(&name, '[', ']');
    let name = strip_dash_comment(&name);
    let name = strip_trailing_number(&name);
    collapse_whitespace(&name)
}

/// Parse a whole pasted roster into players, one per line that still holds a
/// name after cleanup. Ids are the original zero-based line indices, so a
/// discarded line leaves a gap. Everyone starts selected.
pub fn parse_from_text(raw_text: &str) -> Result<Vec<Player>, Error> {
    if raw_text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let players: Vec<Player> = raw_text
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let name = extract_name(line);
            if name.is_empty() {
                None
            } else {
                Some(Player {
                    id: index,
                    name,
                    selected: true,
                })
            }
        })
        .collect();

    if players.is_empty() {
        return Err(Error::NoValidNames);
    }

    Ok(players)
}

/// Drop a leading ordinal marker: digits, then any run of `.` `-` `)` or
/// whitespace, then optionally more digits/dashes. Covers "1.", "2-", "03) "
/// and range-style "1-2" prefixes. A line like "10 20" is consumed whole;
/// purely numeric names are not a thing rosters contain.
fn strip_ordinal_prefix(line: &str) -> String {
    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == line.len() {
        return line.trim().to_string();
    }

    let rest = after_digits
        .trim_start_matches(|c: char| matches!(c, '.' | '-' | ')') || c.is_whitespace())
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '-');

    rest.trim().to_string()
}

/// Remove every delimited group, from each opener to the first closer after
/// it, together with the whitespace around the group. No nesting; an opener
/// with no closer is left in place.
fn strip_delimited(s: &str, open: char, close: char) -> String {
    let mut out = s.to_string();

    while let Some(start) = out.find(open) {
        let end = match out[start..].find(close) {
            Some(offset) => start + offset + close.len_utf8(),
            None => break,
        };
        let head = out[..start].trim_end();
        let tail = out[end..].trim_start();
        out = format!("{head}{tail}");
    }

    out.trim().to_string()
}

/// Cut the line at the first dash, en-dash or em-dash; "Ana - atrasada"
/// becomes "Ana". Applies anywhere in the line, so dashed compound names are
/// truncated too.
fn strip_dash_comment(s: &str) -> String {
    match s.find(|c| matches!(c, '-' | '–' | '—')) {
        Some(i) => s[..i].trim_end().to_string(),
        None => s.trim().to_string(),
    }
}

/// Drop one trailing run of digits, with whatever whitespace sits around it.
/// Turns "Carlos 10" into "Carlos"; an earlier number ("Carlos 10 20" ->
/// "Carlos 10") is left for the caller to judge.
fn strip_trailing_number(s: &str) -> String {
    let trimmed = s.trim_end();
    let without = trimmed.trim_end_matches(|c: char| c.is_ascii_digit());
    if without.len() == trimmed.len() {
        return s.trim().to_string();
    }
    without.trim().to_string()
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
