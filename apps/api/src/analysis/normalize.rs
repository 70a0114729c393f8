//! Text Normalizer — deterministic cleanup applied to extracted text so the
//! scorer receives consistent input regardless of source format.

/// Normalizes extracted resume text. Pure function and a fixed point:
/// normalizing already-normalized text yields the same text.
///
/// Rules, applied in order:
/// 1. Collapse `\r\n` and bare `\r` to `\n`.
/// 2. Collapse runs of 3+ newlines down to exactly 2.
/// 3. Collapse runs of spaces/tabs to a single space (newlines untouched).
/// 4. Drop whitespace immediately preceding a period or comma.
/// 5. Trim leading/trailing whitespace.
pub fn normalize_text(input: &str) -> String {
    let text = input.replace("\r\n", "\n").replace('\r', "\n");
    let text = collapse_blank_lines(&text);
    let text = collapse_horizontal_whitespace(&text);
    let text = strip_space_before_punctuation(&text);
    text.trim().to_string()
}

/// Caps consecutive newlines at two, preserving intentional paragraph breaks.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }
    out
}

/// Collapses runs of spaces and tabs to a single space. Newlines pass through.
fn collapse_horizontal_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c == ' ' || c == '\t' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            in_run = false;
            out.push(c);
        }
    }
    out
}

/// Removes whitespace immediately preceding a period or comma.
fn strip_space_before_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '.' || c == ',' {
            while out.ends_with(|p: char| p.is_whitespace()) {
                out.pop();
            }
        }
        out.push(c);
    }
    out
}
