use std::future::Future;
use std::iter::Take;
use std::time::Duration;

use tonic::{Code, Status};

#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    current: u64,
    base: u64,
    factor: u64,
    max_delay: Option<Duration>,
}

impl ExponentialBackoff {
    pub fn from_millis(base: u64) -> ExponentialBackoff {
        ExponentialBackoff {
            current: base,
            base,
            factor: 1u64,
            max_delay: None,
        }
    }

    pub fn factor(mut self, factor: u64) -> ExponentialBackoff {
        self.factor = factor;
        self
    }

    pub fn max_delay(mut self, duration: Duration) -> ExponentialBackoff {
        self.max_delay = Some(duration);
        self
    }
}

impl Iterator for ExponentialBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        // set delay duration by applying factor
        let duration = if let Some(duration) = self.current.checked_mul(self.factor) {
            Duration::from_millis(duration)
        } else {
            Duration::from_millis(u64::MAX)
        };

        // check if we reached max delay
        if let Some(ref max_delay) = self.max_delay {
            if duration > *max_delay {
                return Some(*max_delay);
            }
        }

        if let Some(next) = self.current.checked_mul(self.base) {
            self.current = next;
        } else {
            self.current = u64::MAX;
        }

        Some(duration)
    }
}

/// Backoff and retryable codes for a single call.
///
/// `take` is the number of retries after the first attempt.
#[derive(Clone, Debug)]
pub struct RetrySetting {
    pub from_millis: u64,
    pub max_delay: Option<Duration>,
    pub factor: u64,
    pub take: usize,
    pub codes: Vec<Code>,
}

impl RetrySetting {
    pub fn strategy(&self) -> Take<ExponentialBackoff> {
        let mut st = ExponentialBackoff::from_millis(self.from_millis).factor(self.factor);
        st.max_delay = self.max_delay;
        st.take(self.take)
    }

    pub fn should_retry(&self, status: &Status) -> bool {
        self.codes.contains(&status.code())
    }
}

impl Default for RetrySetting {
    fn default() -> Self {
        Self {
            from_millis: 10,
            max_delay: Some(Duration::from_secs(1)),
            factor: 1u64,
            take: 5,
            codes: vec![Code::Unavailable, Code::Unknown, Code::Aborted],
        }
    }
}

/// Runs `action` once, or until it succeeds or fails with a non retryable code when `retry` is set.
pub async fn invoke<A, R>(retry: Option<RetrySetting>, mut action: impl FnMut() -> A) -> Result<R, Status>
where
    A: Future<Output = Result<R, Status>>,
{
    let retry = match retry {
        Some(retry) => retry,
        None => return action().await,
    };
    let mut strategy = retry.strategy();
    loop {
        let status = match action().await {
            Ok(s) => return Ok(s),
            Err(e) => e,
        };
        if !retry.should_retry(&status) {
            return Err(status);
        }
        match strategy.next() {
            None => return Err(status),
            Some(duration) => {
                tracing::debug!("retrying after {duration:?}: code={:?}", status.code());
                tokio::time::sleep(duration).await
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn setting(take: usize) -> RetrySetting {
        RetrySetting {
            from_millis: 1,
            max_delay: None,
            factor: 1,
            take,
            codes: vec![Code::Unavailable],
        }
    }

    #[test]
    fn test_backoff_is_capped() {
        let delays: Vec<Duration> = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_millis(500))
            .take(4)
            .collect();
        assert_eq!(
            vec![
                Duration::from_millis(10),
                Duration::from_millis(100),
                Duration::from_millis(500),
                Duration::from_millis(500)
            ],
            delays
        );
    }

    #[test]
    fn test_backoff_factor() {
        let mut backoff = ExponentialBackoff::from_millis(2).factor(1000);
        assert_eq!(Some(Duration::from_secs(2)), backoff.next());
        assert_eq!(Some(Duration::from_secs(4)), backoff.next());
    }

    #[tokio::test]
    async fn test_invoke_without_retry_runs_once() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), Status> = invoke(None, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Status::unavailable("down"))
        })
        .await;
        assert_eq!(Code::Unavailable, result.unwrap_err().code());
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_invoke_retries_until_success() {
        let calls = AtomicUsize::new(0);
        let result = invoke(Some(setting(5)), || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(Status::unavailable("down"))
            } else {
                Ok("ok")
            }
        })
        .await;
        assert_eq!("ok", result.unwrap());
        assert_eq!(3, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_invoke_gives_up() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), Status> = invoke(Some(setting(2)), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Status::unavailable("down"))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(3, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_invoke_does_not_retry_other_codes() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), Status> = invoke(Some(setting(5)), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Status::permission_denied("no"))
        })
        .await;
        assert_eq!(Code::PermissionDenied, result.unwrap_err().code());
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }
}
