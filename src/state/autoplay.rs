//! Autoplay Timer - Repeating tick source on a background thread
//!
//! The timer never touches carousel state. Each period it posts an
//! `AutoplayTick` carrying its generation into the carousel's event queue,
//! and the owning thread applies it when it pumps the queue. Ticks from a
//! timer that has since been replaced carry an old generation and are dropped
//! by the carousel.
//!
//! # Pattern
//!
//! - One timer thread per running autoplay
//! - `stop()` disconnects the cancel channel, the thread wakes and exits
//! - Stopping is idempotent, dropping the timer stops it
//!
//! # Example
//!
//! ```ignore
//! use std::sync::mpsc;
//! use std::time::Duration;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut timer = AutoplayTimer::spawn(Duration::from_millis(6000), 1, tx)?;
//!
//! // ... rx receives CarouselEvent::AutoplayTick { generation: 1 } every 6s ...
//!
//! timer.stop();
//! ```

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::carousel::CarouselEvent;

// =============================================================================
// AUTOPLAY TIMER
// =============================================================================

/// Handle to a running autoplay timer thread.
pub struct AutoplayTimer {
    generation: u64,
    period: Duration,
    /// Dropping this sender wakes the thread and ends it
    cancel: Option<Sender<()>>,
}

impl AutoplayTimer {
    /// Spawn a timer that posts `AutoplayTick { generation }` to `events`
    /// every `period`.
    pub fn spawn(
        period: Duration,
        generation: u64,
        events: Sender<CarouselEvent>,
    ) -> io::Result<Self> {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        // Detached: the thread exits on its own once cancelled
        thread::Builder::new()
            .name(format!("carousel-autoplay-{generation}"))
            .spawn(move || {
                loop {
                    match cancel_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            // Receiver gone means the carousel is gone
                            if events.send(CarouselEvent::AutoplayTick { generation }).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        Ok(Self {
            generation,
            period,
            cancel: Some(cancel_tx),
        })
    }

    /// Generation this timer stamps onto its ticks.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether `stop()` has not been called yet.
    pub fn is_running(&self) -> bool {
        self.cancel.is_some()
    }

    /// Cancel the timer. Safe to call more than once.
    ///
    /// Does not join: the thread exits as soon as it observes the
    /// disconnected cancel channel.
    pub fn stop(&mut self) {
        self.cancel.take();
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for AutoplayTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoplayTimer")
            .field("generation", &self.generation)
            .field("period", &self.period)
            .field("running", &self.is_running())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_posts_ticks_with_generation() {
        let (tx, rx) = mpsc::channel();
        let _timer = AutoplayTimer::spawn(Duration::from_millis(10), 7, tx).unwrap();

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(event, CarouselEvent::AutoplayTick { generation: 7 });

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(event, CarouselEvent::AutoplayTick { generation: 7 });
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (tx, _rx) = mpsc::channel();
        let mut timer = AutoplayTimer::spawn(Duration::from_millis(10), 1, tx).unwrap();
        assert!(timer.is_running());

        timer.stop();
        assert!(!timer.is_running());

        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_ends_ticks() {
        let (tx, rx) = mpsc::channel();
        let mut timer = AutoplayTimer::spawn(Duration::from_millis(10), 1, tx).unwrap();
        rx.recv_timeout(Duration::from_secs(2)).unwrap();

        timer.stop();

        // A tick may already be in flight; once the thread has exited the
        // channel disconnects and nothing else arrives.
        loop {
            match rx.recv_timeout(Duration::from_secs(2)) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => panic!("timer thread still alive"),
            }
        }
    }

    #[test]
    fn test_drop_stops_thread() {
        let (tx, rx) = mpsc::channel();
        let timer = AutoplayTimer::spawn(Duration::from_millis(5), 3, tx).unwrap();
        drop(timer);

        loop {
            match rx.recv_timeout(Duration::from_secs(2)) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => panic!("timer thread still alive"),
            }
        }
    }
}
