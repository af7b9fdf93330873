//! Lenient CSV tokenizer for the catalog listing.

/// Splits `text` into rows of trimmed cells.
///
/// Rows end on `\n`, `\r\n` or a lone `\r`. Quoted fields may hold commas and
/// line breaks, and `""` inside quotes stands for a literal quote. Rows whose
/// cells are all empty are skipped. This never fails: an unterminated quote
/// simply runs to the end of the input.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(take_cell(&mut current)),
            '\n' | '\r' => {
                row.push(take_cell(&mut current));
                flush_row(&mut rows, &mut row);
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => current.push(c),
        }
    }

    // The last row goes through the same all-empty check as the others, so a
    // trailing whitespace-only line yields no row.
    if !current.is_empty() || !row.is_empty() {
        row.push(take_cell(&mut current));
        flush_row(&mut rows, &mut row);
    }

    rows
}

fn take_cell(current: &mut String) -> String {
    let cell = current.trim().to_owned();
    current.clear();
    cell
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    let finished = std::mem::take(row);
    if finished.iter().any(|cell| !cell.is_empty()) {
        rows.push(finished);
    }
}
