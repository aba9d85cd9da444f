// ==========================================
// Storefront Catalog - File Parsers
// ==========================================
// Supports: CSV (.csv) / Excel (.xlsx/.xls, first sheet)
// Cells are kept as read; blank rows are skipped
// Rows narrower or wider than the header fail the read
// ==========================================

use crate::importer::catalog_importer_trait::{FileParser, RawRow, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn clean_header(cells: impl Iterator<Item = String>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(idx, h)| {
            if idx == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h
            }
        })
        .collect()
}

fn push_row(rows: &mut Vec<RawRow>, number: usize, cells: Vec<String>) {
    if cells.iter().all(|v| v.is_empty()) {
        return;
    }
    rows.push(RawRow { number, cells });
}

/// Every row must be exactly as wide as the header.
fn ensure_width(number: usize, expected: usize, actual: usize) -> Result<(), String> {
    if expected != actual {
        return Err(format!(
            "row {}: wrong number of fields (expected {}, got {})",
            number, expected, actual
        ));
    }
    Ok(())
}

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !ext.is_empty() && ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(file);

        let mut records = reader.records();
        let header = match records.next() {
            Some(record) => clean_header(record?.iter().map(str::to_string)),
            None => return Err(ImportError::EmptyFile(file_path.display().to_string())),
        };

        let mut rows = Vec::new();
        for (idx, result) in records.enumerate() {
            let record = result?;
            // header is row 1
            let number = idx + 2;
            ensure_width(number, header.len(), record.len()).map_err(ImportError::CsvParseError)?;
            let cells = record.iter().map(str::to_string).collect();
            push_row(&mut rows, number, cells);
        }

        Ok(RawTable { header, rows })
    }
}

// ==========================================
// Excel Parser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut sheet_rows = range.rows();
        let header = match sheet_rows.next() {
            Some(cells) => clean_header(cells.iter().map(|c| c.to_string())),
            None => return Err(ImportError::EmptyFile(file_path.display().to_string())),
        };

        let mut rows = Vec::new();
        for (idx, data_row) in sheet_rows.enumerate() {
            let number = idx + 2;
            let cells: Vec<String> = data_row.iter().map(|cell| cell.to_string()).collect();
            ensure_width(number, header.len(), cells.len()).map_err(ImportError::ExcelParseError)?;
            push_row(&mut rows, number, cells);
        }

        Ok(RawTable { header, rows })
    }
}

// ==========================================
// UniversalFileParser (picks by extension)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_table(file_path),
            "xlsx" | "xls" => ExcelParser.parse_table(file_path),
            other => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(temp_file, "{}", contents).unwrap();
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = csv_file("abbreviation,category_name_EN\nDRK,Drinks\nSNK,Snacks\n");

        let table = CsvParser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.header, vec!["abbreviation", "category_name_EN"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].number, 2);
        assert_eq!(table.rows[1].cell(1), "Snacks");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skips_blank_rows_and_keeps_numbering() {
        let temp_file = csv_file("a,b\nx,1\n,\ny,2\n");

        let table = CsvParser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].number, 4);
    }

    #[test]
    fn test_csv_parser_strips_bom_and_keeps_cells_as_read() {
        let temp_file = csv_file("\u{feff}a,b\n yes,#N/A \n");

        let table = CsvParser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.rows[0].cells, vec![" yes", "#N/A "]);
    }

    #[test]
    fn test_csv_parser_rejects_short_row() {
        let temp_file = csv_file("a,b,c\nx\n");

        let result = CsvParser.parse_table(temp_file.path());

        assert!(matches!(result, Err(ImportError::CsvParseError(_))));
    }

    #[test]
    fn test_csv_parser_rejects_long_row() {
        let temp_file = csv_file("a,b\nx,y\n1,2,3,4\n");

        let result = CsvParser.parse_table(temp_file.path());

        assert!(matches!(result, Err(ImportError::CsvParseError(_))));
    }

    #[test]
    fn test_row_width_must_match_header() {
        assert!(ensure_width(2, 5, 5).is_ok());
        let err = ensure_width(3, 5, 7).unwrap_err();
        assert!(err.contains("row 3"));
    }

    #[test]
    fn test_csv_parser_empty_file() {
        let temp_file = csv_file("");
        let result = CsvParser.parse_table(temp_file.path());
        assert!(matches!(result, Err(ImportError::EmptyFile(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let result = UniversalFileParser.parse_table(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
