//! Loads the simulator's results file into an in-memory numeric table.
//!
//! The first line names the columns; every following line is one request
//! with a number per column. The simulator separates fields with `", "`, so
//! whitespace around each field is trimmed.
//!
//! ```ignore
//! RequestID, FirstFitFragments, BestFitFragments, FirstFitNodesTraversed, BestFitNodesTraversed
//! 0, 3, 2, 5, 7
//! 1, 4, 2, 9, 11
//! ```

use crate::errors::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A named column of numbers, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// Header text as it appears in the file (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The values, one per data row.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// The whole results file: columns of equal length keyed by header text.
/// Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: String,
    columns: Vec<Column>,
    rows: usize,
}

/// Normalizes header text for lookups: `RequestID`, `request_id` and
/// `Request Id` all map to `requestid`.
pub fn column_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Table {
    /// Reads the table at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                bail!(ErrorKind::NotFound(source));
            }
            Err(e) => {
                return Err(e).chain_err(|| format!("failed to open results file {}", source));
            }
        };
        let table = Table::from_reader(file, &source)?;
        info!(
            "loaded {} rows x {} columns from {}",
            table.len(),
            table.width(),
            source
        );
        Ok(table)
    }

    /// Reads a table from any reader; `source` names it in error messages.
    pub fn from_reader<R: Read>(rdr: R, source: &str) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let headers = reader
            .headers()
            .map_err(|e| format_error(source, &e))?
            .clone();
        let mut columns = headers
            .iter()
            .map(|name| Column {
                name: name.to_string(),
                values: Vec::new(),
            })
            .collect::<Vec<_>>();

        let mut rows = 0;
        for record in reader.records() {
            let record = record.map_err(|e| format_error(source, &e))?;
            let line = record.position().map_or(0, |p| p.line());
            if record.len() != columns.len() {
                bail!(ErrorKind::DataFormat(
                    source.to_string(),
                    line,
                    format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        record.len()
                    ),
                ));
            }
            for (column, field) in columns.iter_mut().zip(record.iter()) {
                let value = field.parse::<f64>().map_err(|_| {
                    Error::from_kind(ErrorKind::DataFormat(
                        source.to_string(),
                        line,
                        format!("column '{}' is not numeric: {:?}", column.name, field),
                    ))
                })?;
                column.values.push(value);
            }
            rows += 1;
        }
        trace!("parsed {} data rows from {}", rows, source);

        if rows == 0 {
            bail!(ErrorKind::DataFormat(
                source.to_string(),
                1,
                "no data rows after the header".to_string(),
            ));
        }

        Ok(Table {
            source: source.to_string(),
            columns: columns,
            rows: rows,
        })
    }

    /// Where the table was read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Always false for a table returned by the loader.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// All columns in file order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Finds a column by header name, see [`column_key`].
    pub fn column(&self, name: &str) -> Option<&Column> {
        let key = column_key(name);
        self.columns.iter().find(|c| column_key(&c.name) == key)
    }
}

fn format_error(source: &str, err: &csv::Error) -> Error {
    let line = err.position().map_or(0, |p| p.line());
    ErrorKind::DataFormat(source.to_string(), line, err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "RequestID, FirstFitFragments, BestFitFragments, \
                          FirstFitNodesTraversed, BestFitNodesTraversed\n\
                          0, 3, 2, 5, 7\n\
                          1, 4, 2, 9, 11\n\
                          3, 4, 3, 2, 6\n";

    fn data_format_line(result: Result<Table>) -> u64 {
        match result {
            Err(Error(ErrorKind::DataFormat(_, line, _), _)) => line,
            other => panic!("expected a data format error, got {:?}", other),
        }
    }

    #[test]
    fn loads_simulator_output() {
        let table = Table::from_reader(SAMPLE.as_bytes(), "sample").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 5);
        assert_eq!(table.columns()[0].name(), "RequestID");
        assert_eq!(table.columns()[0].values(), &[0.0, 1.0, 3.0]);
        assert_eq!(table.columns()[4].values(), &[7.0, 11.0, 6.0]);
    }

    #[test]
    fn looks_up_columns_by_normalized_name() {
        let table = Table::from_reader(SAMPLE.as_bytes(), "sample").unwrap();
        let column = table.column("first_fit_nodes_traversed").unwrap();
        assert_eq!(column.values(), &[5.0, 9.0, 2.0]);
        assert!(table.column("worst_fit_fragments").is_none());
        assert_eq!(column_key("Request ID"), "requestid");
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let data = "RequestID, FirstFitFragments, BestFitFragments, A, B\n\
                    0, 1, 1, 1, 1\n\
                    1, abc, 1, 1, 1\n";
        assert_eq!(data_format_line(Table::from_reader(data.as_bytes(), "t")), 3);
    }

    #[test]
    fn rejects_ragged_row() {
        let data = "a,b,c,d,e\n1,2,3,4,5\n1,2,3,4\n";
        assert_eq!(data_format_line(Table::from_reader(data.as_bytes(), "t")), 3);
    }

    #[test]
    fn rejects_header_only_file() {
        let data = "a,b,c,d,e\n";
        data_format_line(Table::from_reader(data.as_bytes(), "t"));
        data_format_line(Table::from_reader("".as_bytes(), "t"));
    }

    #[test]
    fn skips_blank_lines() {
        let data = "a,b,c,d,e\n1,2,3,4,5\n\n2,3,4,5,6\n";
        let table = Table::from_reader(data.as_bytes(), "t").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        match Table::load("no/such/results.csv") {
            Err(Error(ErrorKind::NotFound(path), _)) => {
                assert!(path.ends_with("results.csv"))
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
