//! Desktop/mobile breakpoint signal.
//!
//! The browser reports its viewport width; the signal turns that into a
//! single boolean (`is_desktop`) and notifies subscribers only when the
//! boolean flips. Dropping a [`BreakpointSubscription`] unsubscribes it.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

/// Viewport width (px) at which the layout switches to desktop.
pub const DEFAULT_BREAKPOINT_PX: u32 = 1024;

/// Subscribable desktop/mobile flag.
#[derive(Debug)]
pub struct BreakpointSignal {
    threshold: u32,
    tx: watch::Sender<bool>,
    measured: AtomicBool,
}

impl BreakpointSignal {
    /// Create a signal that assumes a desktop viewport until told otherwise.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        let (tx, _rx) = watch::channel(true);
        Self {
            threshold,
            tx,
            measured: AtomicBool::new(false),
        }
    }

    /// Create a signal seeded from a known viewport width.
    #[must_use]
    pub fn with_width(threshold: u32, width: u32) -> Self {
        let (tx, _rx) = watch::channel(width >= threshold);
        Self {
            threshold,
            tx,
            measured: AtomicBool::new(true),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        *self.tx.borrow()
    }

    /// Whether the flag comes from a real width rather than the desktop
    /// default.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measured.load(Ordering::Relaxed)
    }

    /// Apply a new viewport width. Returns `true` if the flag flipped.
    pub fn update(&self, width: u32) -> bool {
        self.measured.store(true, Ordering::Relaxed);
        let desktop = width >= self.threshold;
        self.tx.send_if_modified(|current| {
            if *current == desktop {
                false
            } else {
                *current = desktop;
                true
            }
        })
    }

    /// Listen for changes. Dropping the subscription removes the listener.
    #[must_use]
    pub fn subscribe(&self) -> BreakpointSubscription {
        BreakpointSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BreakpointSignal {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

/// A live listener on a [`BreakpointSignal`].
#[derive(Debug)]
pub struct BreakpointSubscription {
    rx: watch::Receiver<bool>,
}

impl BreakpointSubscription {
    /// Flag value as last observed.
    #[must_use]
    pub fn current(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the next flip.
    ///
    /// Returns `None` once the signal has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
