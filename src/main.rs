//! Renders the first-fit vs best-fit charts from `results.csv`.
//!
//! Takes no arguments. An optional `Setting.toml` in the working directory
//! overrides paths and resolution; `RUST_LOG` controls diagnostics.

extern crate chrono;
extern crate env_logger;
extern crate fitcharts;
#[macro_use]
extern crate log;

use fitcharts::{pipeline, Setting};
use std::io::Write;
use std::process;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let t = chrono::Utc::now();
            writeln!(
                buf,
                "{} {}:{}: {}",
                t.format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        })
        .init();
}

fn run() -> fitcharts::Result<()> {
    let setting = Setting::init("Setting.toml")?;
    debug!("{:?}", setting);
    let report = pipeline::run(&setting)?;
    println!("{}", report.summary);
    Ok(())
}

pub fn main() {
    init_logger();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}
