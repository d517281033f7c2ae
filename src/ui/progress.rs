use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

pub struct ProgressReporter {
    multi_progress: Arc<MultiProgress>,
    url_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: Arc::new(MultiProgress::new()),
            url_progress: None,
            enabled,
        }
    }

    pub fn start_url_checking(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = self.multi_progress.add(ProgressBar::new(total_urls as u64));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs checked ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Checking URLs");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.url_progress = Some(pb);
    }

    pub fn update_url_progress(&self, current: usize) {
        if let Some(ref pb) = self.url_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_url_checking(&self, ok_count: usize, total_count: usize) {
        if let Some(ref pb) = self.url_progress {
            let message = if ok_count == total_count {
                "✓ All URLs reachable".to_string()
            } else {
                format!("✓ Checking complete ({ok_count}/{total_count} reachable)")
            };
            pb.finish_with_message(message);
        }
    }

    pub fn finish_and_clear(&self) {
        if self.enabled {
            // Clear the progress bars and add a blank line
            self.multi_progress.clear().unwrap_or(());
            println!();
        }
    }
}
