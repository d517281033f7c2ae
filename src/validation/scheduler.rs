use futures::future::join_all;

use crate::core::types::CheckResult;
use crate::ui::progress::ProgressReporter;
use crate::validation::checker::CheckLiveness;

/// Run the liveness checker over every URL under a concurrency ceiling.
///
/// The input is partitioned into consecutive chunks of at most
/// `concurrency` URLs. Chunks run strictly sequentially; within a chunk
/// every check runs concurrently and the chunk only completes once all of
/// its checks have. Results come back aligned index-for-index with `urls`,
/// independent of completion order inside a chunk, so at no point are more
/// than `concurrency` requests in flight.
pub async fn run_in_batches<C>(
    checker: &C,
    urls: &[String],
    concurrency: usize,
    progress: Option<&ProgressReporter>,
) -> Vec<CheckResult>
where
    C: CheckLiveness + Sync,
{
    let chunk_size = concurrency.max(1);
    let mut results = Vec::with_capacity(urls.len());

    for chunk in urls.chunks(chunk_size) {
        let batch = chunk.iter().map(|url| checker.check(url));
        results.extend(join_all(batch).await);

        if let Some(prog) = progress {
            prog.update_url_progress(results.len());
        }
    }

    results
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::{Duration, sleep};

    /// Checker double that records scheduling behavior instead of doing IO.
    #[derive(Default)]
    struct FakeChecker {
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        events: Mutex<Vec<String>>,
    }

    impl FakeChecker {
        fn log(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }

        /// Per-URL delay encoded in the path, e.g. "https://x/40" sleeps 40ms.
        fn delay_for(url: &str) -> u64 {
            url.rsplit('/').next().and_then(|s| s.parse().ok()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl CheckLiveness for FakeChecker {
        async fn check(&self, url: &str) -> CheckResult {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);
            self.log(format!("start {url}"));

            sleep(Duration::from_millis(Self::delay_for(url))).await;

            self.log(format!("end {url}"));
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            // Echo the URL back so callers can assert result alignment
            CheckResult::failure(url.to_string())
        }
    }

    fn urls_with_delays(delays: &[u64]) -> Vec<String> {
        delays
            .iter()
            .map(|ms| format!("https://fake.example/{ms}"))
            .collect()
    }

    #[tokio::test]
    async fn test_run_in_batches__empty_input() {
        let checker = FakeChecker::default();

        let results = run_in_batches(&checker, &[], 5, None).await;

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_run_in_batches__never_exceeds_concurrency_ceiling() {
        let checker = FakeChecker::default();
        let urls = urls_with_delays(&[20, 20, 20, 20, 20, 20, 20]);

        let results = run_in_batches(&checker, &urls, 3, None).await;

        assert_eq!(results.len(), 7);
        assert!(checker.max_in_flight.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_run_in_batches__chunk_members_run_concurrently() {
        let checker = FakeChecker::default();
        let urls = urls_with_delays(&[30, 30, 30]);

        run_in_batches(&checker, &urls, 3, None).await;

        assert_eq!(checker.max_in_flight.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_run_in_batches__next_chunk_waits_for_slowest() {
        let checker = FakeChecker::default();
        // First chunk: one slow, one fast. Second chunk must not start
        // before the slow check ends.
        let urls = urls_with_delays(&[80, 5, 6]);

        run_in_batches(&checker, &urls, 2, None).await;

        let events = checker.events.lock().unwrap();
        let end_slow = events
            .iter()
            .position(|e| e == "end https://fake.example/80")
            .unwrap();
        let start_last = events
            .iter()
            .position(|e| e == "start https://fake.example/6")
            .unwrap();

        assert!(start_last > end_slow);
    }

    #[tokio::test]
    async fn test_run_in_batches__results_align_with_input_order() {
        let checker = FakeChecker::default();
        // Completion order inside each chunk is reversed by the delays
        let urls = urls_with_delays(&[60, 40, 20, 61, 41, 21]);

        let results = run_in_batches(&checker, &urls, 3, None).await;

        let echoed: Vec<&str> = results
            .iter()
            .map(|r| r.error.as_deref().unwrap())
            .collect();
        assert_eq!(echoed, urls.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_run_in_batches__zero_ceiling_is_treated_as_one() {
        let checker = FakeChecker::default();
        let urls = urls_with_delays(&[5, 5]);

        let results = run_in_batches(&checker, &urls, 0, None).await;

        assert_eq!(results.len(), 2);
        assert_eq!(checker.max_in_flight.load(Ordering::SeqCst), 1);
    }
}
