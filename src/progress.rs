//! Progress bar utilities for the trainer's simulated work phase
//!
//! Visual feedback while the training state machine sits in its fixed
//! simulated delay, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

pub struct TrainingProgress {
    bar: ProgressBar,
}

impl TrainingProgress {
    /// Create a new training progress bar
    pub fn new(symbol: &str, ticks: u64) -> Self {
        let bar = ProgressBar::new(ticks);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        bar.set_message(format!("training {}", symbol));

        Self { bar }
    }

    /// Hidden bar for non-interactive runs and tests
    pub fn hidden(ticks: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(ticks);
        Self { bar }
    }

    pub fn tick(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self, symbol: &str) {
        self.bar
            .finish_with_message(format!("{} training complete", symbol));
    }
}
