//! Progress reporting for multi-file segmentation

use indicatif::{ProgressBar, ProgressStyle};

/// Tracks files processed and sentences emitted across a segmentation run
///
/// The sentence tally is kept even in quiet mode so the final log line can
/// report it; only the bar itself is suppressed.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    sentences: u64,
}

impl ProgressReporter {
    /// Create a reporter for `total_files` files; `quiet` suppresses drawing
    pub fn new(total_files: u64, quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new(total_files);
            bar.set_style(
                ProgressStyle::with_template("{pos}/{len} files {wide_bar:.green} {msg}")
                    .expect("valid template")
                    .progress_chars("=>·"),
            );
            bar
        });
        Self { bar, sentences: 0 }
    }

    /// Record a segmented file and the number of sentences it produced
    pub fn file_done(&mut self, filename: &str, sentences: usize) {
        self.sentences += sentences as u64;
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{filename}: {sentences} sentence(s)"));
            bar.inc(1);
        }
    }

    /// Sentences emitted so far
    pub fn total_sentences(&self) -> u64 {
        self.sentences
    }

    /// Finish the bar with a run summary
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{} sentence(s) total", self.sentences));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_reporter_still_counts_sentences() {
        let mut reporter = ProgressReporter::new(2, true);
        assert!(reporter.bar.is_none());
        reporter.file_done("a.txt", 3);
        reporter.file_done("b.txt", 2);
        assert_eq!(reporter.total_sentences(), 5);
        reporter.finish();
    }

    #[test]
    fn visible_reporter_tracks_files_and_sentences() {
        let mut reporter = ProgressReporter::new(2, false);
        reporter.file_done("a.txt", 4);
        assert_eq!(reporter.total_sentences(), 4);
        reporter.file_done("b.txt", 0);
        assert_eq!(reporter.total_sentences(), 4);
        reporter.finish();
    }
}
