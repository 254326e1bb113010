//! The end-to-end pass: load, extract, derive, render, write.

use crate::chart::{self, ChartSpec, Figure};
use crate::errors::*;
use crate::series::{cumulative_sum, ResultSeries};
use crate::setting::Setting;
use crate::summary::Summary;
use crate::table::Table;
use crate::writer;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug)]
pub struct Report {
    /// The written images, in chart order.
    pub charts: Vec<PathBuf>,
    /// Aggregates of the input.
    pub summary: Summary,
}

/// Builds the three figures, in output order, from extracted results.
pub fn figures(results: &ResultSeries, setting: &Setting) -> Result<Vec<(ChartSpec, Figure)>> {
    let canvas = setting.canvas();
    let x = &results.request_id;

    let fragments = chart::render(
        &chart::FRAGMENTS,
        canvas,
        x,
        [&results.first_fit_fragments, &results.best_fit_fragments],
    )?;
    let nodes = chart::render(
        &chart::NODES_TRAVERSED,
        canvas,
        x,
        [&results.first_fit_nodes, &results.best_fit_nodes],
    )?;

    let cumulative_first = cumulative_sum(&results.first_fit_fragments);
    let cumulative_best = cumulative_sum(&results.best_fit_fragments);
    let cumulative = chart::render(
        &chart::CUMULATIVE_FRAGMENTS,
        canvas,
        x,
        [&cumulative_first, &cumulative_best],
    )?;

    Ok(vec![
        (chart::FRAGMENTS, fragments),
        (chart::NODES_TRAVERSED, nodes),
        (chart::CUMULATIVE_FRAGMENTS, cumulative),
    ])
}

/// Runs the whole pipeline once. The first error aborts the run and keeps
/// its kind (`NotFound`, `DataFormat`, ...); charts already written stay on
/// disk.
pub fn run(setting: &Setting) -> Result<Report> {
    let table = Table::load(&setting.input_path)?;
    let results = ResultSeries::extract(&table, setting.strict_columns)?;
    info!("extracted {} requests", results.len());

    let mut charts = Vec::new();
    for (spec, figure) in figures(&results, setting)? {
        let path = setting.output_path(spec.file_name);
        writer::write_png(&figure, &path)?;
        charts.push(path);
    }

    Ok(Report {
        charts: charts,
        summary: Summary::from_results(&results),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_come_in_output_order() {
        let data = "RequestID,FirstFitFragments,BestFitFragments,FirstFitNodesTraversed,BestFitNodesTraversed\n\
                    1,2,1,5,7\n\
                    2,0,1,9,11\n\
                    3,3,1,2,6\n";
        let table = Table::from_reader(data.as_bytes(), "test").unwrap();
        let results = ResultSeries::extract(&table, true).unwrap();
        let figures = figures(&results, &Setting::default()).unwrap();

        let names = figures.iter().map(|f| f.0.file_name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "fragments_vs_request_id.png",
                "nodes_traversed.png",
                "cumulative_fragments.png"
            ]
        );

        let cumulative = figures[2].1.lines();
        let ff = cumulative[0].points().iter().map(|p| p.1).collect::<Vec<_>>();
        let bf = cumulative[1].points().iter().map(|p| p.1).collect::<Vec<_>>();
        assert_eq!(ff, vec![2.0, 2.0, 5.0]);
        assert_eq!(bf, vec![1.0, 2.0, 3.0]);
        assert_eq!(figures[0].1.pixel_size(), (3000, 1500));
    }
}
