use std::time::Duration;

/// Explicit retry policy handed to services at construction.
///
/// `max_attempts` counts total attempts, including the first; the backoff
/// schedule decides how long to wait before attempt `n + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Backoff {
    /// Retry immediately.
    None,
    /// Wait the same interval between every attempt.
    Fixed(Duration),
    /// Doubling schedule with a uniformly random wait in `[min, cap]`,
    /// where the cap doubles per attempt up to `max`.
    ExponentialJitter { min: Duration, max: Duration },
}

impl RetryPolicy {
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::None,
        }
    }

    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::Fixed(interval),
        }
    }

    pub fn exponential_jitter(max_attempts: u32, min: Duration, max: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::ExponentialJitter { min, max },
        }
    }

    /// Delay to apply after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::None => Duration::ZERO,
            Backoff::Fixed(interval) => interval,
            Backoff::ExponentialJitter { min, max } => {
                let exp = attempt.saturating_sub(1).min(31);
                let cap = min
                    .saturating_mul(2u32.saturating_pow(exp))
                    .min(max)
                    .max(min);
                if cap == min {
                    min
                } else {
                    let span = (cap - min).as_millis() as u64;
                    min + Duration::from_millis(rand::random_range(0..=span))
                }
            }
        }
    }
}
