//! Progress notification port
//!
//! Defines the interface for reporting progress while a discussion run is
//! being driven step by step.

/// Callback for progress updates during a discussion run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait DiscussionProgressNotifier: Send + Sync {
    /// Called once before the first step, with the number of steps the
    /// run will issue if every step succeeds
    fn on_run_start(&self, total_steps: usize);

    /// Called after each step completes
    fn on_step_complete(&self, role: &str, turn: u32, success: bool);

    /// Called once after the final step
    fn on_run_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DiscussionProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_steps: usize) {}
    fn on_step_complete(&self, _role: &str, _turn: u32, _success: bool) {}
    fn on_run_complete(&self) {}
}
