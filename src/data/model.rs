use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Column names every source table must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "time",
    "fertility_rate",
    "life_expectancy",
    "pop_mlns",
    "location",
];

// ---------------------------------------------------------------------------
// RawRecord – one row exactly as read, every cell as text
// ---------------------------------------------------------------------------

/// A source row before numeric parsing. Extra columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    pub location: String,
    pub time: String,
    pub fertility_rate: String,
    pub life_expectancy: String,
    pub pop_mlns: String,
}

/// Why a [`RawRecord`] could not become a [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowRejection {
    pub column: &'static str,
    pub value: String,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column '{}' has non-numeric value '{}'", self.column, self.value)
    }
}

// ---------------------------------------------------------------------------
// Row – one country-year record
// ---------------------------------------------------------------------------

/// One country-year record with parsed numeric fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub location: String,
    pub time: i32,
    pub fertility_rate: f64,
    pub life_expectancy: f64,
    /// Population in millions.
    pub pop_mlns: f64,
}

impl Row {
    /// Parse the numeric cells of a raw record.
    ///
    /// The year accepts integral float spellings such as `1960.0`.
    pub fn from_record(record: &RawRecord) -> Result<Self, RowRejection> {
        Ok(Row {
            location: record.location.trim().to_string(),
            time: parse_year(&record.time)?,
            fertility_rate: parse_number("fertility_rate", &record.fertility_rate)?,
            life_expectancy: parse_number("life_expectancy", &record.life_expectancy)?,
            pop_mlns: parse_number("pop_mlns", &record.pop_mlns)?,
        })
    }

    /// Population as a head count.
    pub fn population(&self) -> f64 {
        self.pop_mlns * 1_000_000.0
    }
}

fn parse_number(column: &'static str, text: &str) -> Result<f64, RowRejection> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RowRejection {
            column,
            value: text.to_string(),
        })
}

fn parse_year(text: &str) -> Result<i32, RowRejection> {
    let trimmed = text.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }
    let value = parse_number("time", text)?;
    if value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Ok(value as i32)
    } else {
        Err(RowRejection {
            column: "time",
            value: text.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All accepted rows in source order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
    /// Rows dropped because a numeric cell failed to parse.
    pub skipped_rows: usize,
    pub source: Option<PathBuf>,
}

impl Dataset {
    /// Convert raw records, rejecting (and logging) rows that fail to parse.
    pub fn from_records(records: impl IntoIterator<Item = RawRecord>) -> Self {
        let mut rows = Vec::new();
        let mut skipped_rows = 0;
        for (i, record) in records.into_iter().enumerate() {
            match Row::from_record(&record) {
                Ok(row) => rows.push(row),
                Err(rejection) => {
                    log::warn!("Skipping row {i} ({}): {rejection}", record.location);
                    skipped_rows += 1;
                }
            }
        }
        Dataset {
            rows,
            skipped_rows,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest `pop_mlns` across every row.
    pub fn population_extent(&self) -> Option<(f64, f64)> {
        crate::chart::limits::extent(self.rows.iter().map(|r| r.pop_mlns))
    }
}

// ---------------------------------------------------------------------------
// YearSet – distinct years backing the selector
// ---------------------------------------------------------------------------

/// Distinct year values in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSet {
    years: Vec<i32>,
}

impl YearSet {
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut seen = HashSet::new();
        let years = rows
            .iter()
            .map(|r| r.time)
            .filter(|y| seen.insert(*y))
            .collect();
        YearSet { years }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.years
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    pub fn first(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, time: &str, fr: &str, le: &str, pop: &str) -> RawRecord {
        RawRecord {
            location: location.into(),
            time: time.into(),
            fertility_rate: fr.into(),
            life_expectancy: le.into(),
            pop_mlns: pop.into(),
        }
    }

    #[test]
    fn test_row_parses_numeric_cells() {
        let row = Row::from_record(&record("Peru", "1960", "6.9", "47.7", "10.1")).unwrap();
        assert_eq!(row.location, "Peru");
        assert_eq!(row.time, 1960);
        assert_eq!(row.fertility_rate, 6.9);
        assert_eq!(row.life_expectancy, 47.7);
        assert_eq!(row.pop_mlns, 10.1);
    }

    #[test]
    fn test_row_accepts_float_year() {
        let row = Row::from_record(&record("Chad", "1985.0", "6", "45", "5")).unwrap();
        assert_eq!(row.time, 1985);
    }

    #[test]
    fn test_row_rejects_bad_cells() {
        let err = Row::from_record(&record("X", "1960", "n/a", "50", "1")).unwrap_err();
        assert_eq!(err.column, "fertility_rate");

        let err = Row::from_record(&record("X", "1960.5", "2", "50", "1")).unwrap_err();
        assert_eq!(err.column, "time");

        let err = Row::from_record(&record("X", "1960", "2", "50", "")).unwrap_err();
        assert_eq!(err.column, "pop_mlns");
    }

    #[test]
    fn test_dataset_counts_skipped_rows() {
        let ds = Dataset::from_records(vec![
            record("A", "1960", "2", "60", "1"),
            record("B", "1960", "?", "60", "1"),
            record("C", "1961", "3", "61", "2"),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped_rows, 1);
        assert_eq!(ds.population_extent(), Some((1.0, 2.0)));
    }

    #[test]
    fn test_year_set_is_distinct_in_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            record("A", "1961", "2", "60", "1"),
            record("B", "1960", "2", "60", "1"),
            record("C", "1961", "2", "60", "1"),
            record("D", "1962", "2", "60", "1"),
            record("E", "1960", "2", "60", "1"),
        ]);
        let years = YearSet::from_rows(&ds.rows);
        assert_eq!(years.as_slice(), &[1961, 1960, 1962]);

        let unique: HashSet<i32> = ds.rows.iter().map(|r| r.time).collect();
        assert_eq!(years.len(), unique.len());
        assert!(years.contains(1962));
        assert!(!years.contains(1963));
    }
}
