//! Named series extracted from a results table, and the values derived from
//! them.

use crate::errors::*;
use crate::table::Table;

/// A named, ordered run of values aligned by index to the table rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
}

impl Series {
    /// Creates a new `Series`.
    pub fn new<S: Into<String>>(name: S, values: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            values: values,
        }
    }

    /// The series name, e.g. `first_fit_fragments`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The values in table order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Running total of `series`: element `i` is the sum of elements `0..=i`.
pub fn cumulative_sum(series: &Series) -> Series {
    let values = series
        .values
        .iter()
        .scan(0.0, |total, &v| {
            *total += v;
            Some(*total)
        })
        .collect();
    Series::new(format!("cumulative_{}", series.name), values)
}

/// One request as written by the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    /// Request number; increasing, gaps allowed.
    pub request_id: f64,
    /// Fragments left by first-fit after this request.
    pub first_fit_fragments: f64,
    /// Fragments left by best-fit after this request.
    pub best_fit_fragments: f64,
    /// Free-list nodes first-fit visited.
    pub first_fit_nodes_traversed: f64,
    /// Free-list nodes best-fit visited.
    pub best_fit_nodes_traversed: f64,
}

/// Number of columns the simulator writes.
const EXPECTED_COLUMNS: usize = 5;

/// Resolves the first of `headers` present in `table` into a series called
/// `name`.
fn lookup(table: &Table, name: &str, headers: &[&str]) -> Result<Series> {
    let column = headers
        .iter()
        .filter_map(|h| table.column(h))
        .next()
        .ok_or_else(|| {
            Error::from_kind(ErrorKind::DataFormat(
                table.source().to_string(),
                1,
                format!("missing column {}", headers.join(" or ")),
            ))
        })?;
    debug!("series {} <- column '{}'", name, column.name());
    Ok(Series::new(name, column.values().to_vec()))
}

/// The five series every chart is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSeries {
    /// X axis of every chart.
    pub request_id: Series,
    /// First-fit fragments per request.
    pub first_fit_fragments: Series,
    /// Best-fit fragments per request.
    pub best_fit_fragments: Series,
    /// First-fit nodes traversed per request.
    pub first_fit_nodes: Series,
    /// Best-fit nodes traversed per request.
    pub best_fit_nodes: Series,
}

impl ResultSeries {
    /// Projects the named columns out of `table`. With `strict`, a table
    /// carrying anything besides the five expected columns is rejected;
    /// otherwise extra columns are ignored.
    pub fn extract(table: &Table, strict: bool) -> Result<ResultSeries> {
        if strict && table.width() != EXPECTED_COLUMNS {
            bail!(ErrorKind::DataFormat(
                table.source().to_string(),
                1,
                format!(
                    "expected {} columns, found {}",
                    EXPECTED_COLUMNS,
                    table.width()
                ),
            ));
        }

        Ok(ResultSeries {
            request_id: lookup(table, "request_id", &["RequestID"])?,
            first_fit_fragments: lookup(table, "first_fit_fragments", &["FirstFitFragments"])?,
            best_fit_fragments: lookup(table, "best_fit_fragments", &["BestFitFragments"])?,
            first_fit_nodes: lookup(
                table,
                "first_fit_nodes",
                &["FirstFitNodesTraversed", "FirstFitNodes"],
            )?,
            best_fit_nodes: lookup(
                table,
                "best_fit_nodes",
                &["BestFitNodesTraversed", "BestFitNodes"],
            )?,
        })
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.request_id.len()
    }

    /// True when no request was recorded.
    pub fn is_empty(&self) -> bool {
        self.request_id.is_empty()
    }

    /// The series as rows again, in table order.
    pub fn rows(&self) -> Vec<ResultRow> {
        (0..self.len())
            .map(|i| ResultRow {
                request_id: self.request_id.values[i],
                first_fit_fragments: self.first_fit_fragments.values[i],
                best_fit_fragments: self.best_fit_fragments.values[i],
                first_fit_nodes_traversed: self.first_fit_nodes.values[i],
                best_fit_nodes_traversed: self.best_fit_nodes.values[i],
            })
            .collect()
    }
}
