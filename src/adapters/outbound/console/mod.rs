//! Console adapters for progress reporting on stderr

mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
