//! CSV file to pretty-printed JSON file
//!
//! The input is comma-delimited with a header row and no quoting; every cell
//! stays a string. The output is a JSON array of one object per row, field
//! names taken from the header in file order, indented with four spaces.

use std::path::Path;

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use shared::{ModelError, Result};

/// Convert a CSV file to a JSON file, returning the number of rows written.
///
/// Short rows pad the missing trailing fields with `null`; surplus cells are
/// dropped. Fails with `InvalidArgument` when the input has no header row.
pub fn csv_to_json(input: &Path, output: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(input)?;
    let rows = parse_rows(&content)?;
    let count = rows.len();

    let buf = to_pretty_json(&rows)?;
    std::fs::write(output, buf)?;

    tracing::info!(rows = count, output = %output.display(), "converted CSV");
    Ok(count)
}

fn parse_rows(content: &str) -> Result<Vec<Map<String, Value>>> {
    let mut lines = content.lines().filter(|line| !line.is_empty());
    let header: Vec<&str> = lines
        .next()
        .ok_or_else(|| ModelError::InvalidArgument("CSV input has no header row".to_string()))?
        .split(',')
        .collect();

    let rows = lines
        .map(|line| {
            let mut cells = line.split(',');
            header
                .iter()
                .map(|&field| {
                    let value = cells
                        .next()
                        .map(|cell| Value::String(cell.to_string()))
                        .unwrap_or(Value::Null);
                    (field.to_string(), value)
                })
                .collect()
        })
        .collect();
    Ok(rows)
}

// serde_json's default pretty printer indents with two spaces; the output
// format wants four.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(csv: &str) -> (usize, Value) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.json");
        std::fs::write(&input, csv).unwrap();

        let count = csv_to_json(&input, &output).unwrap();
        let json: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        (count, json)
    }

    #[test]
    fn test_rows_keep_order_and_fields() {
        let (count, json) = convert("name,age\nAlice,30\nBob,25\n");
        assert_eq!(count, 2);
        assert_eq!(json[0]["name"], "Alice");
        assert_eq!(json[0]["age"], "30");
        assert_eq!(json[1]["name"], "Bob");
    }

    #[test]
    fn test_cells_stay_strings() {
        let (_, json) = convert("id\n42\n");
        assert_eq!(json[0]["id"], Value::String("42".to_string()));
    }

    #[test]
    fn test_short_row_pads_with_null() {
        let (_, json) = convert("a,b,c\n1,2\n");
        assert_eq!(json[0]["a"], "1");
        assert_eq!(json[0]["b"], "2");
        assert_eq!(json[0]["c"], Value::Null);
    }

    #[test]
    fn test_surplus_cells_are_dropped() {
        let (_, json) = convert("a,b\n1,2,3\n");
        assert_eq!(json[0].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_header_only_gives_empty_array() {
        let (count, json) = convert("a,b\n");
        assert_eq!(count, 0);
        assert_eq!(json, Value::Array(vec![]));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.json");
        std::fs::write(&input, "").unwrap();
        assert!(csv_to_json(&input, &output).is_err());
    }

    #[test]
    fn test_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.json");
        std::fs::write(&input, "name\nAlice\n").unwrap();

        csv_to_json(&input, &output).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("\n    {"));
        assert!(text.contains("\n        \"name\": \"Alice\""));
    }
}
