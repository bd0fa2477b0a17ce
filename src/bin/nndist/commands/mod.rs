mod scan;

pub use scan::{Outcome, run_scan};
