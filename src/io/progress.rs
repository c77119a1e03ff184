//! Progress display for batches of generated maps

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for a batch of maps
///
/// Shows one bar per map for small batches; above
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`] maps an extra batch bar counts finished
/// maps and the per-map bars show a rolling window of the latest ones.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_bars: Vec<ProgressBar>,
    /// (`label`, `completed_steps`, `total_steps`) per map
    map_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_bars: Vec::new(),
            map_states: Vec::new(),
        }
    }

    /// Create progress bars for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        if map_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(map_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..map_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(STEP_STYLE.clone());
            self.map_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start tracking a map that will take `total_steps` steps
    pub fn start_map(&mut self, index: usize, label: &str, total_steps: usize) {
        if index >= self.map_states.len() {
            self.map_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.map_states.get_mut(index) {
            *state = (label.to_string(), 0, total_steps);
        }
        self.update_bars();
    }

    /// Report that a map finished another step
    pub fn advance(&mut self, index: usize) {
        if let Some(state) = self.map_states.get_mut(index) {
            state.1 = (state.1 + 1).min(state.2);
        }
        self.update_bars();
    }

    /// Mark a map as done
    pub fn complete_map(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.map_states.get_mut(index) {
            state.0 = format!("✓ {} ({} ms)", state.0, elapsed.as_millis());
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps generated");
        }
        let _ = self.multi_progress.clear();
    }

    // Bars show the most recently started maps
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .map_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (label, done, total)) in self.map_bars.iter().zip(visible.iter().copied()) {
            bar.set_length(*total as u64);
            bar.set_position(*done as u64);
            bar.set_message(format!("{done}/{total}"));
            bar.set_prefix(label.clone());
        }

        for bar in self.map_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
