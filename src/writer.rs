//! Persists figures as PNG files.

use crate::chart::Figure;
use crate::errors::*;
use plotters::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Draws `figure` into a PNG at `path`, replacing any existing file. The
/// image size follows the figure's canvas (3000x1500 at 300 DPI for the
/// default 10x5 inch canvas). On failure the partial file is removed.
pub fn write_png<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<()> {
    let path = path.as_ref();
    let name = path.display().to_string();

    // The bitmap backend only touches the file on present; open it first so
    // an unwritable destination is reported as such.
    File::create(path).chain_err(|| ErrorKind::ImageWrite(name.clone()))?;

    let result = {
        let root = BitMapBackend::new(path, figure.pixel_size()).into_drawing_area();
        figure.draw_on(&root).and_then(|_| {
            root.present()
                .map_err(|e| Error::with_chain(e, ErrorKind::ImageWrite(name.clone())))
        })
    };

    match result {
        Ok(()) => {
            let (w, h) = figure.pixel_size();
            info!("wrote '{}' ({}x{}) to {}", figure.title(), w, h, name);
            Ok(())
        }
        Err(e) => {
            if let Err(rm) = fs::remove_file(path) {
                warn!("failed to remove partial image {}: {}", name, rm);
            }
            Err(e)
        }
    }
}
