//! Error types for fitcharts.

/// Creates the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    errors {
        NotFound(path: String) {
            description("input file not found")
            display("input file not found: {}", path)
        }
        DataFormat(path: String, line: u64, reason: String) {
            description("malformed results data")
            display("malformed data in {} at line {}: {}", path, line, reason)
        }
        EmptySeries(name: String) {
            description("nothing to plot")
            display("series '{}' is empty, nothing to plot", name)
        }
        MisalignedSeries(name: String, expected: usize, actual: usize) {
            description("series lengths disagree")
            display("series '{}' has {} points, expected {}", name, actual, expected)
        }
        ImageWrite(path: String) {
            description("error in writing the chart image")
            display("failed to write chart image: {}", path)
        }
        Render(reason: String) {
            description("error in rendering the chart")
            display("failed to render chart: {}", reason)
        }
    }

    foreign_links {
        Io(::std::io::Error);
        Csv(::csv::Error);
        Toml(::toml::de::Error);
    }
}
