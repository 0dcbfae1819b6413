// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (dataset fetch/refresh). Frontends (GUI/CLI) implement this to surface
/// status to users.
pub trait Progress {
    /// Called at the start with the total number of source files.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one source file has been fetched and cached.
    fn item_done(&mut self, _source_name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
