//! CSV tokenizer.
//!
//! Splits raw export text into a header row and records keyed by the literal
//! header text. It knows nothing about what the columns mean; that is the
//! column mapper's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ImportError;

const UTF8_BOM: char = '\u{feff}';
const QUOTE: char = '"';
const DELIMITER: char = ',';

/// One data record, keyed by header text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    values: HashMap<String, String>,
}

impl CsvRow {
    /// Returns the cell under `header`, or `""` when the header is unknown.
    pub fn get(&self, header: &str) -> &str {
        self.values.get(header).map(String::as_str).unwrap_or("")
    }

    /// Looks up an optional column; `None` mapping reads as an empty cell.
    pub fn get_mapped(&self, header: Option<&str>) -> &str {
        header.map(|h| self.get(h)).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of tokenizing a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizedCsv {
    /// Header cells, trimmed, in file order
    pub headers: Vec<String>,
    /// Data rows in file order, blank lines removed
    pub rows: Vec<CsvRow>,
}

/// Tokenizes CSV text.
///
/// Lines are split on CR/LF and blank lines are dropped. Within a line a
/// quote toggles the quoted state wherever it appears, a doubled quote inside
/// a quoted field is a literal quote, and commas split fields only outside
/// quotes. Fields are trimmed after extraction, so `a, "1,250.00"` reads the
/// second cell as `1,250.00`. Rows shorter than the header get `""` for their
/// missing trailing cells and extra cells are ignored.
///
/// Fails with [`ImportError::Structure`] when fewer than two non-blank lines
/// remain, since at least a header and one data row are needed.
pub fn tokenize_csv(content: &str) -> Result<TokenizedCsv, ImportError> {
    let content = content.trim_start_matches(UTF8_BOM);

    let lines: Vec<&str> = content
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ImportError::structure(
            "CSV file must contain a header row and at least one data row",
        ));
    }

    let headers = tokenize_line(lines[0]);

    let rows = lines[1..]
        .iter()
        .map(|line| {
            let cells = tokenize_line(line);
            let values = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let cell = cells.get(i).cloned().unwrap_or_default();
                    (header.clone(), cell)
                })
                .collect();
            CsvRow { values }
        })
        .collect();

    Ok(TokenizedCsv { headers, rows })
}

/// Splits one line into trimmed fields.
fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_csv() {
        let content = "Product Name,Quantity,Market Price\nCharizard,1,350.00\nPikachu,4,2.50";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.headers, vec!["Product Name", "Quantity", "Market Price"]);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].get("Product Name"), "Charizard");
        assert_eq!(result.rows[1].get("Market Price"), "2.50");
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let content = "name,qty\r\n\r\nAlice,1\r\n   \r\nBob,2\r\n";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[1].get("name"), "Bob");
    }

    #[test]
    fn test_quoted_fields() {
        let content = "name,notes\n\"Booster Box, Japanese\",\"He said \"\"mint\"\"\"";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.rows[0].get("name"), "Booster Box, Japanese");
        assert_eq!(result.rows[0].get("notes"), "He said \"mint\"");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let content = " name , qty \n  Umbreon VMAX  ,  2 ";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.headers, vec!["name", "qty"]);
        assert_eq!(result.rows[0].get("name"), "Umbreon VMAX");
        assert_eq!(result.rows[0].get("qty"), "2");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let content = "a,b,c\n1,2\n3,4,5,6";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.rows[0].get("c"), "");
        assert_eq!(result.rows[0].len(), 3);
        assert_eq!(result.rows[1].get("c"), "5");
        assert_eq!(result.rows[1].len(), 3);
    }

    #[test]
    fn test_quoted_field_after_space() {
        let content = "Product Name, Quantity, Market Price\n\"Booster Box, Japanese\", 1, 100\nETB, 2, \"1,250.00\"";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].get("Product Name"), "Booster Box, Japanese");
        assert_eq!(result.rows[0].get("Market Price"), "100");
        assert_eq!(result.rows[1].get("Quantity"), "2");
        assert_eq!(result.rows[1].get("Market Price"), "1,250.00");
    }

    #[test]
    fn test_quote_inside_field_toggles() {
        let result = tokenize_csv("name,size\nSleeves 12\" x 9\" , 3").unwrap();

        assert_eq!(result.rows[0].get("name"), "Sleeves 12 x 9");
        assert_eq!(result.rows[0].get("size"), "3");
    }

    #[test]
    fn test_utf8_bom_is_ignored() {
        let content = "\u{feff}name,qty\nAlice,1";

        let result = tokenize_csv(content).unwrap();

        assert_eq!(result.headers, vec!["name", "qty"]);
    }

    #[test]
    fn test_header_only_is_structural_error() {
        assert!(matches!(
            tokenize_csv("name,qty\n\n  \n"),
            Err(ImportError::Structure(_))
        ));
        assert!(matches!(tokenize_csv(""), Err(ImportError::Structure(_))));
    }

    #[test]
    fn test_unknown_header_reads_empty() {
        let result = tokenize_csv("name\nAlice").unwrap();

        assert_eq!(result.rows[0].get("missing"), "");
        assert_eq!(result.rows[0].get_mapped(None), "");
    }
}
