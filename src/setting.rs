//! A flexible chart setting in TOML.

use crate::chart::Canvas;
use crate::errors::*;
use std::fs::File;
use std::io::{ErrorKind as IoErrorKind, Read};
use std::path::{Path, PathBuf};

/// The chart setting. Every field falls back to its default, so an empty
/// (or absent) file reproduces the stock behavior.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Setting {
    /// Path to the simulator results (CSV).
    pub input_path: PathBuf,

    /// Directory that receives the three charts.
    pub output_dir: PathBuf,

    /// Pixels per inch of the written images.
    pub dpi: u32,

    /// Figure width in inches.
    pub width_in: f64,

    /// Figure height in inches.
    pub height_in: f64,

    /// Reject tables that carry columns beyond the expected five.
    pub strict_columns: bool,
}

impl Default for Setting {
    fn default() -> Self {
        Setting {
            input_path: PathBuf::from("results.csv"),
            output_dir: PathBuf::from("."),
            dpi: 300,
            width_in: 10.0,
            height_in: 5.0,
            strict_columns: true,
        }
    }
}

impl Setting {
    /// Initialize from a file; a missing file yields the defaults.
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Setting> {
        let path = path.as_ref();
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(ref e) if e.kind() == IoErrorKind::NotFound => {
                debug!("no setting at {:?}, using defaults", path);
                return Ok(Setting::default());
            }
            Err(e) => return Err(e.into()),
        };
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Setting::parse(&contents)
    }

    /// Parses the TOML text of a setting.
    pub fn parse(contents: &str) -> Result<Setting> {
        Ok(toml::from_str(contents)?)
    }

    /// The canvas every chart is drawn on.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width_in: self.width_in,
            height_in: self.height_in,
            dpi: self.dpi,
        }
    }

    /// Where a chart with the given file name ends up.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
