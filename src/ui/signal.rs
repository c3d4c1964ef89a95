use std::sync::Arc;

use tokio::sync::watch;

/// A monotonically increasing version that observers watch for changes.
#[derive(Debug, Clone)]
pub struct ChangeSignal {
    tx: Arc<watch::Sender<u64>>,
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn version(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Increments the version and wakes every subscriber.
    pub fn bump(&self) -> u64 {
        self.tx.send_modify(|v| *v += 1);
        self.version()
    }

    /// A receiver that has already seen the current version.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_bumps() {
        let signal = ChangeSignal::new();
        let mut rx = signal.subscribe();
        assert!(!rx.has_changed().unwrap());

        let cloned = signal.clone();
        assert_eq!(cloned.bump(), 1);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
        assert_eq!(signal.version(), 1);
    }

    #[test]
    fn bump_without_subscribers_still_counts() {
        let signal = ChangeSignal::new();
        signal.bump();
        signal.bump();
        assert_eq!(signal.version(), 2);
    }
}
