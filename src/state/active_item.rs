//! Tracks which posting is selected for detail display, derived from the
//! fragment of the last observed location.

use tokio::sync::watch;
use url::Url;

use crate::domain::models::JobId;

pub struct ActiveItemTracker {
    tx: watch::Sender<Option<JobId>>,
}

impl ActiveItemTracker {
    /// No active item until a location has been observed.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Re-derive the active id from `location` and publish it. Accepts an
    /// absolute URL or a bare `#fragment`; anything without a numeric
    /// fragment clears the selection.
    pub fn set_location(&self, location: &str) {
        self.tx.send_replace(parse_fragment(location));
    }

    pub fn active_id(&self) -> Option<JobId> {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<JobId>> {
        self.tx.subscribe()
    }
}

impl Default for ActiveItemTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_fragment(location: &str) -> Option<JobId> {
    if let Ok(url) = Url::parse(location) {
        return url.fragment().and_then(|f| f.parse().ok()).map(JobId);
    }

    // Not an absolute URL; treat everything after '#' as the fragment
    location
        .split_once('#')
        .and_then(|(_, fragment)| fragment.parse().ok())
        .map(JobId)
}
