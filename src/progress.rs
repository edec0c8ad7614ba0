// src/progress.rs
/// Lightweight progress reporting used by the corpus builder.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one record was written.
    fn item_done(&mut self, _id: &str) {}

    /// Called when one identifier was skipped.
    fn item_failed(&mut self, _id: &str, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
