use std::time::Duration;

use async_trait::async_trait;

/// Default pause between two rewritten posts. The free Groq tier does not allow much more.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(20);

/// Wait policy applied after each post written to disk.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[tokio::test]
    async fn test_fixed_delay_waits() {
        let start = Instant::now();
        FixedDelay(Duration::from_millis(30)).pause().await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
