// Application layer: wires config, services and printers for each entry point.

pub mod runner;

pub use runner::{run_messaging, run_report, ReportOverrides};
