use crate::domain::model::{BatchStatistics, LookupOutcome, LookupRequest};
use crate::domain::ports::NumberVerifier;
use std::time::Duration;

/// Sequential fan-out over an ordered request list. The pacing delay is the
/// only rate-limiting mechanism, so requests are never issued concurrently.
pub struct BatchRunner<V: NumberVerifier> {
    verifier: V,
    delay: Duration,
}

impl<V: NumberVerifier> BatchRunner<V> {
    pub fn new(verifier: V, delay: Duration) -> Self {
        Self { verifier, delay }
    }

    /// Runs every request in input order, one at a time, waiting `delay`
    /// between consecutive calls (never after the last). A failing item is
    /// recorded and the batch continues.
    pub async fn run(&self, requests: Vec<LookupRequest>) -> Vec<LookupOutcome> {
        let total = requests.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, request) in requests.into_iter().enumerate() {
            tracing::info!(
                "Checking {}/{}: {} ({})",
                index + 1,
                total,
                request.number,
                request.country
            );

            let outcome = match self.verifier.verify(&request).await {
                Ok(response) => LookupOutcome::success(request, response),
                Err(e) => {
                    tracing::warn!("Error checking {}: {}", request.number, e);
                    LookupOutcome::failure(request, e.to_string())
                }
            };
            outcomes.push(outcome);

            if self.delay > Duration::ZERO && index + 1 < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        outcomes
    }

    /// Convenience wrapper: run the batch and reduce it to statistics in one
    /// call.
    pub async fn run_with_statistics(
        &self,
        requests: Vec<LookupRequest>,
    ) -> (Vec<LookupOutcome>, BatchStatistics) {
        let outcomes = self.run(requests).await;
        let stats = BatchStatistics::from_outcomes(&outcomes);
        (outcomes, stats)
    }
}
