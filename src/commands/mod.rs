mod analyze;
mod capture;
mod parse;

pub use analyze::{run_analyze, AnalyzeArgs};
pub use capture::run_capture;
pub use parse::{run_parse, ParseArgs};
