use crate::domain::{Document, DocumentError};

/// In-memory worksheet backed by a CSV file.
///
/// Rows are kept as ragged vectors; writing past the end of a row grows
/// it. Parsing is quote-aware: a quoted field may contain commas,
/// newlines, and doubled quotes.
#[derive(Debug)]
pub struct CsvDocument {
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn parse(data: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| DocumentError::Malformed(format!("not valid UTF-8: {}", e)))?;
        Ok(Self {
            rows: parse_rows(text)?,
        })
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl Document for CsvDocument {
    fn cell(&self, row: u32, col: u32) -> Option<&str> {
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .map(String::as_str)
    }

    fn set_cell(&mut self, row: u32, col: u32, value: String) {
        let row = row as usize;
        let col = col as usize;
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, String::new);
        }
        cells[col] = value;
    }

    fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
        let lines: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| csv_escape(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }
}

/// Escape a value for CSV: wrap in quotes if it contains comma, quote,
/// or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, DocumentError> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' if field.is_empty() => in_quotes = true,
                ',' => {
                    row.push(std::mem::take(&mut field));
                }
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' if chars.peek() == Some(&'\n') => {}
                _ => field.push(ch),
            }
        }
    }

    if in_quotes {
        return Err(DocumentError::Malformed(
            "unterminated quoted field".to_string(),
        ));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}
