//! Progress reporting for discussion runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roundtable_application::DiscussionProgressNotifier;
use std::sync::Mutex;

/// Reports progress during a discussion run with a progress bar
///
/// One bar spans the whole run: R roles x T turns steps.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscussionProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_steps: usize) {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Discussion");
        pb.set_message("Starting...");
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_step_complete(&self, role: &str, turn: u32, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {} (turn {})", "v".green(), role, turn + 1)
            } else {
                format!("{} step failed (turn {})", "x".red(), turn + 1)
            };
            pb.set_message(status);
            if success {
                pb.inc(1);
            }
        }
    }

    fn on_run_complete(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "discussion complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DiscussionProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_steps: usize) {
        println!("{} {} steps", "->".cyan(), total_steps);
    }

    fn on_step_complete(&self, role: &str, turn: u32, success: bool) {
        if success {
            println!("  {} {} (turn {})", "v".green(), role, turn + 1);
        } else {
            println!("  {} step failed (turn {})", "x".red(), turn + 1);
        }
    }

    fn on_run_complete(&self) {
        println!();
    }
}
