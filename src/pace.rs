//! Cosmetic pauses around the opponent's actions.

use core::time::Duration;

/// Waits out a cosmetic delay.
///
/// The game never relies on the pause for correctness. It is called with no
/// internal lock held.
pub trait Pacer: Send + Sync {
    /// Waits for roughly `duration`.
    fn pause(&self, duration: Duration);
}

/// A pacer that returns immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&self, _duration: Duration) {}
}

/// A pacer that blocks the calling thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl Pacer for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
