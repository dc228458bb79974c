use std::time::Duration;

pub const LOADING_DELAY: Duration = Duration::from_millis(1500);

/// One-way switch from the loading placeholder to the full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    delay: Duration,
    ready: bool,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(LOADING_DELAY)
    }
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ready: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record how long the page has been mounted. Never reverts to loading.
    pub fn observe(&mut self, elapsed: Duration) {
        if elapsed >= self.delay {
            self.ready = true;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_until_delay() {
        let mut gate = LoadingGate::default();
        assert!(!gate.is_ready());

        gate.observe(Duration::from_millis(1499));
        assert!(!gate.is_ready());

        gate.observe(Duration::from_millis(1500));
        assert!(gate.is_ready());
    }

    #[test]
    fn test_stays_ready() {
        let mut gate = LoadingGate::new(Duration::from_millis(10));
        gate.observe(Duration::from_secs(1));
        assert!(gate.is_ready());

        gate.observe(Duration::ZERO);
        assert!(gate.is_ready());
    }
}
