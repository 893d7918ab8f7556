//! Single-slot debounce timer: each new input cancels the pending timer,
//! so only the last value of a burst is ever published.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

pub struct Debouncer<T> {
    tx: watch::Sender<T>,
    delay: Duration,
    latest: T,
    pending: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            tx,
            delay,
            latest: initial,
            pending: None,
        }
    }

    /// Record a new input value. It is published after the configured
    /// delay unless another update arrives first (last-write-wins).
    pub fn update(&mut self, value: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        self.latest = value.clone();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            tx.send_replace(value);
        }));
    }

    /// Publish the latest input immediately, cancelling any pending timer.
    pub fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.tx.send_replace(self.latest.clone());
    }

    /// Last published (settled) value.
    pub fn settled(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_burst_publishes_only_last_value() {
        let mut debouncer = Debouncer::new(String::new(), DELAY);
        let mut rx = debouncer.subscribe();

        debouncer.update("a".to_string());
        advance(Duration::from_millis(100)).await;
        debouncer.update("ab".to_string());
        advance(Duration::from_millis(100)).await;
        debouncer.update("abc".to_string());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "abc");
        assert!(!rx.has_changed().unwrap(), "intermediate values never published");
    }

    #[tokio::test(start_paused = true)]
    async fn test_value_not_published_before_delay() {
        let mut debouncer = Debouncer::new(String::new(), DELAY);
        let rx = debouncer.subscribe();

        debouncer.update("a".to_string());
        advance(Duration::from_millis(499)).await;

        assert!(!rx.has_changed().unwrap());
        assert_eq!(debouncer.settled(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiet_input_published_after_delay() {
        let mut debouncer = Debouncer::new(String::new(), DELAY);
        let mut rx = debouncer.subscribe();

        debouncer.update("rust".to_string());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "rust");
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_publishes_immediately() {
        let mut debouncer = Debouncer::new(String::new(), DELAY);
        let mut rx = debouncer.subscribe();

        debouncer.update("rust".to_string());
        debouncer.flush();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "rust");
        assert_eq!(debouncer.settled(), "rust");
    }
}
