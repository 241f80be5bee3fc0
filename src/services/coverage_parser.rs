use crate::config::constants::{
    BRANCH_HEADER_MARKER, COLUMN_SEPARATOR, MIN_ROW_FIELDS, STATEMENTS_HEADER_MARKER, SUMMARY_ROW_PREFIX,
    TABLE_END_MARKER, TEST_FILES_PREFIX,
};
use crate::structs::category_coverage::{CategoryCoverage, CategoryMap};
use crate::structs::file_coverage::FileCoverage;

#[derive(Debug, Clone, PartialEq)]
enum TableRow {
    Category { name: String, coverage: f64 },
    File { name: String, coverage: f64 },
}

/// Parses the text table emitted by istanbul-style coverage reporters.
///
/// The table starts after the line holding both the `% Stmts` and `% Branch`
/// headers and ends at the first line that starts with `---`. Unindented rows
/// without a period are categories, indented rows are files of the category
/// above them.
pub struct CoverageParser<'a> {
    lines: Vec<&'a str>,
    current: usize,
}

impl<'a> CoverageParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n').collect(),
            current: 0,
        }
    }

    /// Returns `None` when the report has no coverage table header.
    pub fn parse(&mut self) -> Option<CategoryMap> {
        let table = self.extract_table()?;
        log::debug!("📋 Coverage table holds {} candidate rows", table.len());

        let mut categories = CategoryMap::new();
        let mut current_category: Option<String> = None;
        let mut skipped = 0usize;

        for line in table {
            match Self::parse_row(line) {
                Some(TableRow::Category { name, coverage }) => {
                    // A repeated header replaces the earlier record but keeps its position.
                    categories.insert(name.clone(), CategoryCoverage::new(coverage));
                    current_category = Some(name);
                }
                Some(TableRow::File { name, coverage }) => {
                    let category = current_category.as_ref().and_then(|key| categories.get_mut(key));
                    match category {
                        Some(category) => category.files.push(FileCoverage { name, coverage }),
                        None => {
                            log::debug!("Skipping file row without a category: {}", name);
                            skipped += 1;
                        }
                    }
                }
                None => skipped += 1,
            }
        }

        log::info!("📊 Parsed {} categories ({} rows skipped)", categories.len(), skipped);
        Some(categories)
    }

    fn extract_table(&mut self) -> Option<Vec<&'a str>> {
        while !self.is_eof() && !Self::is_header(self.current_line()) {
            self.advance();
        }

        if self.is_eof() {
            return None;
        }
        self.advance();

        let mut table = Vec::new();
        while !self.is_eof() {
            let line = self.current_line();
            self.advance();

            if Self::is_header(line) {
                continue;
            }
            if line.trim().starts_with(TABLE_END_MARKER) {
                break;
            }
            if line.trim().is_empty() || line.starts_with(TEST_FILES_PREFIX) {
                continue;
            }
            table.push(line);
        }

        Some(table)
    }

    fn parse_row(line: &str) -> Option<TableRow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(SUMMARY_ROW_PREFIX) || !trimmed.contains(COLUMN_SEPARATOR) {
            return None;
        }

        let fields: Vec<&str> = line.trim_end().split(COLUMN_SEPARATOR).collect();
        if fields.len() < MIN_ROW_FIELDS {
            return None;
        }

        let raw_name = fields[0];
        let name = raw_name.trim();
        if name.is_empty() {
            return None;
        }

        let coverage = match Self::parse_percentage(fields[1]) {
            Some(coverage) => coverage,
            None => {
                log::debug!("Skipping row '{}': unparsable coverage '{}'", name, fields[1].trim());
                return None;
            }
        };

        let indented = raw_name.starts_with(char::is_whitespace);
        if !indented && !name.contains('.') {
            Some(TableRow::Category { name: name.to_string(), coverage })
        } else if indented {
            Some(TableRow::File { name: name.to_string(), coverage })
        } else {
            None
        }
    }

    /// Empty values count as zero, anything else must be a finite number.
    fn parse_percentage(field: &str) -> Option<f64> {
        let value = field.trim();
        let value = value.strip_suffix('%').unwrap_or(value).trim();
        if value.is_empty() {
            return Some(0.0);
        }
        value.parse::<f64>().ok().filter(|coverage| coverage.is_finite())
    }

    fn is_header(line: &str) -> bool {
        line.contains(STATEMENTS_HEADER_MARKER) && line.contains(BRANCH_HEADER_MARKER)
    }

    fn current_line(&self) -> &'a str {
        self.lines[self.current]
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn is_eof(&self) -> bool {
        self.current >= self.lines.len()
    }
}
