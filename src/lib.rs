//! fitcharts: charts for first-fit vs best-fit allocator simulations.
//!
//! The simulator writes one row per request (`results.csv`); this crate
//! loads that table, pulls out the fragmentation and traversal series,
//! derives running totals, and writes three comparative line charts.
//!
//! ```ignore
//! let setting = Setting::init("Setting.toml")?;
//! let report = pipeline::run(&setting)?;
//! println!("{}", report.summary);
//! ```
#![recursion_limit = "1024"]

extern crate average;
extern crate csv;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate plotters;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate toml;

pub mod errors;
pub mod chart;
pub mod pipeline;
pub mod series;
mod setting;
pub use setting::Setting;
pub mod summary;
pub mod table;
pub mod writer;

pub use chart::{Canvas, Figure};
pub use errors::{Error, ErrorKind, Result};
pub use pipeline::Report;
pub use series::{cumulative_sum, ResultRow, ResultSeries, Series};
pub use summary::Summary;
pub use table::Table;
