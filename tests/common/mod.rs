mod classify_runner;
pub use classify_runner::ClassifyRunnerBuilder;
