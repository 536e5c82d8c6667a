// src/progress.rs
/// Progress reporting for the scrape pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the glaze list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when every page of one glaze (both positions) is in.
    fn item_done(&mut self, _glaze: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
