//! Raw line access to ICS text.
//!
//! Folded content lines are grouped into [`LogicalLine`]s without
//! reassembling the text, so callers can drop or keep lines while leaving
//! every other byte (including line endings) exactly as it was.

/// One content line together with the physical lines it was folded into.
#[derive(Debug, Clone)]
pub struct LogicalLine<'a> {
    /// Physical lines, each including its line ending.
    pub physical: Vec<&'a str>,
}

impl<'a> LogicalLine<'a> {
    /// The content line with folding removed and without line ending.
    pub fn unfolded(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.physical.iter().enumerate() {
            let line = strip_line_ending(line);
            if i == 0 {
                out.push_str(line);
            } else {
                // Drop the single whitespace that marks a continuation
                out.push_str(&line[1..]);
            }
        }
        out
    }

    /// Line ending of the last physical line (`"\r\n"`, `"\n"` or `""`).
    pub fn line_ending(&self) -> &'a str {
        let last = self.physical.last().copied().unwrap_or("");
        &last[strip_line_ending(last).len()..]
    }

    pub fn push_to(&self, out: &mut String) {
        for line in &self.physical {
            out.push_str(line);
        }
    }
}

/// Split text into logical lines. A physical line starting with a space or
/// tab continues the previous one.
pub fn logical_lines(text: &str) -> Vec<LogicalLine<'_>> {
    let mut lines: Vec<LogicalLine<'_>> = Vec::new();

    for physical in text.split_inclusive('\n') {
        let is_continuation = physical.starts_with([' ', '\t']);
        match lines.last_mut() {
            Some(last) if is_continuation => last.physical.push(physical),
            _ => lines.push(LogicalLine {
                physical: vec![physical],
            }),
        }
    }

    lines
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// A content line split into name, parameters and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub name: String,
    pub params: Vec<(String, String)>,
    pub value: String,
}

impl ContentLine {
    /// Split `NAME;KEY=VAL;KEY="quoted:val":value`. The value starts after
    /// the first colon outside double quotes. Returns `None` when there is
    /// no such colon.
    pub fn parse(line: &str) -> Option<Self> {
        let mut in_quotes = false;
        let mut value_start = None;

        for (i, ch) in line.char_indices() {
            match ch {
                '"' => in_quotes = !in_quotes,
                ':' if !in_quotes => {
                    value_start = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let colon = value_start?;
        let head = &line[..colon];
        let value = line[colon + 1..].to_string();

        let mut segments = split_unquoted(head, ';').into_iter();
        let name = segments.next()?.trim().to_string();
        if name.is_empty() {
            return None;
        }

        let params = segments
            .map(|segment| match segment.split_once('=') {
                Some((key, val)) => (key.to_string(), val.trim_matches('"').to_string()),
                None => (segment.to_string(), String::new()),
            })
            .collect();

        Some(ContentLine {
            name,
            params,
            value,
        })
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in s.char_indices() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == sep && !in_quotes {
            parts.push(&s[start..i]);
            start = i + ch.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}
