//! Use cases orchestrating the dependency diff workflow

mod diff_reports;

pub use diff_reports::DiffReportsUseCase;
