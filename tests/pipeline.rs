extern crate fitcharts;
extern crate tempfile;

use fitcharts::{pipeline, Error, ErrorKind, Setting};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const RESULTS: &str = "RequestID, FirstFitFragments, BestFitFragments, FirstFitNodesTraversed, BestFitNodesTraversed\n\
                       0, 3, 2, 5, 7\n\
                       1, 4, 2, 9, 11\n\
                       2, 4, 3, 2, 6\n\
                       4, 6, 3, 14, 9\n";

const CHARTS: [&str; 3] = [
    "fragments_vs_request_id.png",
    "nodes_traversed.png",
    "cumulative_fragments.png",
];

fn setting(dir: &Path) -> Setting {
    Setting {
        input_path: dir.join("results.csv"),
        output_dir: dir.to_path_buf(),
        dpi: 20,
        ..Setting::default()
    }
}

#[test]
fn writes_all_three_charts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), RESULTS).unwrap();

    let report = pipeline::run(&setting(dir.path())).unwrap();
    assert_eq!(report.charts.len(), 3);
    for (path, name) in report.charts.iter().zip(CHARTS.iter()) {
        assert_eq!(path, &dir.path().join(name));
        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
    assert_eq!(report.summary.requests, 4);
    assert_eq!(report.summary.first_fit.total_fragments, 17.0);
}

#[test]
fn single_row_input_still_renders() {
    let dir = tempdir().unwrap();
    let single = "RequestID,FirstFitFragments,BestFitFragments,FirstFitNodesTraversed,BestFitNodesTraversed\n\
                  7,1,1,1,1\n";
    fs::write(dir.path().join("results.csv"), single).unwrap();

    let report = pipeline::run(&setting(dir.path())).unwrap();
    assert!(report.charts.iter().all(|p| p.exists()));
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempdir().unwrap();
    match pipeline::run(&setting(dir.path())) {
        Err(Error(ErrorKind::NotFound(path), _)) => assert!(path.ends_with("results.csv")),
        other => panic!("expected not found, got {:?}", other),
    }
    for name in CHARTS.iter() {
        assert!(!dir.path().join(name).exists());
    }
}

#[test]
fn non_numeric_cell_names_the_row() {
    let dir = tempdir().unwrap();
    let bad = "RequestID,FirstFitFragments,BestFitFragments,FirstFitNodesTraversed,BestFitNodesTraversed\n\
               0,1,1,1,1\n\
               1,abc,1,1,1\n";
    fs::write(dir.path().join("results.csv"), bad).unwrap();

    match pipeline::run(&setting(dir.path())) {
        Err(Error(ErrorKind::DataFormat(_, line, reason), _)) => {
            assert_eq!(line, 3);
            assert!(reason.contains("abc"));
        }
        other => panic!("expected data format error, got {:?}", other),
    }
    assert!(!dir.path().join(CHARTS[0]).exists());
}

#[test]
fn unwritable_output_is_an_image_write_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), RESULTS).unwrap();
    let setting = Setting {
        output_dir: dir.path().join("does-not-exist"),
        ..setting(dir.path())
    };

    match pipeline::run(&setting) {
        Err(Error(ErrorKind::ImageWrite(path), _)) => assert!(path.ends_with(CHARTS[0])),
        other => panic!("expected image write error, got {:?}", other),
    }
}

#[test]
fn rerun_overwrites_with_same_geometry() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), RESULTS).unwrap();
    let setting = setting(dir.path());

    let first = pipeline::run(&setting).unwrap();
    let first_bytes = first
        .charts
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect::<Vec<_>>();
    let second = pipeline::run(&setting).unwrap();
    assert_eq!(first.charts, second.charts);
    for (path, before) in second.charts.iter().zip(first_bytes.iter()) {
        assert_eq!(&fs::read(path).unwrap(), before);
    }
}

#[test]
fn huge_fragment_counts_still_render() {
    let dir = tempdir().unwrap();
    let huge = "RequestID,FirstFitFragments,BestFitFragments,FirstFitNodesTraversed,BestFitNodesTraversed\n\
                0,0,1,1,1\n\
                1,1.7e308,1,1,1\n";
    fs::write(dir.path().join("results.csv"), huge).unwrap();

    let report = pipeline::run(&setting(dir.path())).unwrap();
    assert_eq!(report.charts.len(), 3);
    assert!(report.charts.iter().all(|p| p.exists()));
}
