//! # Slideshow Driver
//!
//! Runs the glow-core slideshow machine on a timer.
//!
//! ## Driver Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Slideshow Driver                                    │
//! │                                                                         │
//! │  SlideshowHandle (cloneable)            SlideshowDriver (task)          │
//! │  ──────────────────────────             ────────────────────────        │
//! │                                                                         │
//! │  next()/prev()/go_to()/toggle() ──cmd──►  tokio::select! {              │
//! │  shutdown() ────────────────shutdown──►     ticker.tick() if playing    │
//! │  state()/changed() ◄────────watch─────      cmd channel                 │
//! │                                             shutdown channel            │
//! │                                           }                             │
//! │                                                                         │
//! │  • Exactly one ticker per driver; toggle re-arms via reset(),          │
//! │    never by spawning a second ticker                                    │
//! │  • Pausing disables the tick branch - a pending tick cannot fire       │
//! │  • Dropping every handle (or shutdown()) stops the task, so no         │
//! │    tick outlives the owning view                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use glow_core::{SlideState, Slideshow};

use crate::error::{EngineError, EngineResult};

/// Command channel depth; navigation clicks are low-rate.
const COMMAND_CAPACITY: usize = 16;

// =============================================================================
// Commands
// =============================================================================

/// Manual slideshow operations, sent from the owning view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowCommand {
    /// Advance one slide (arrow / swipe).
    Next,

    /// Go back one slide.
    Prev,

    /// Jump to a slide (dot navigation). Out-of-range jumps are rejected.
    GoTo(usize),

    /// Flip playing <-> paused.
    Toggle,
}

// =============================================================================
// Handle
// =============================================================================

/// Cloneable control handle for a running slideshow driver.
#[derive(Debug, Clone)]
pub struct SlideshowHandle {
    cmd_tx: mpsc::Sender<SlideshowCommand>,
    shutdown_tx: mpsc::Sender<()>,
    state_rx: watch::Receiver<SlideState>,
}

impl SlideshowHandle {
    /// Advances one slide.
    pub async fn next(&self) -> EngineResult<()> {
        self.send(SlideshowCommand::Next).await
    }

    /// Goes back one slide.
    pub async fn prev(&self) -> EngineResult<()> {
        self.send(SlideshowCommand::Prev).await
    }

    /// Jumps to slide `k`. Out-of-range indices are rejected by the driver
    /// (logged, state unchanged).
    pub async fn go_to(&self, k: usize) -> EngineResult<()> {
        self.send(SlideshowCommand::GoTo(k)).await
    }

    /// Flips autoplay on or off.
    pub async fn toggle(&self) -> EngineResult<()> {
        self.send(SlideshowCommand::Toggle).await
    }

    /// The latest published slide state.
    pub fn state(&self) -> SlideState {
        *self.state_rx.borrow()
    }

    /// Waits for the next state change and returns it.
    pub async fn changed(&mut self) -> EngineResult<SlideState> {
        self.state_rx
            .changed()
            .await
            .map_err(|_| EngineError::DriverStopped("slideshow driver"))?;
        Ok(*self.state_rx.borrow())
    }

    /// Stops the driver task.
    pub async fn shutdown(&self) -> EngineResult<()> {
        self.shutdown_tx
            .send(())
            .await
            .map_err(|_| EngineError::DriverStopped("slideshow driver"))
    }

    async fn send(&self, cmd: SlideshowCommand) -> EngineResult<()> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| EngineError::DriverStopped("slideshow driver"))
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Owns the slideshow machine and its single ticker.
pub struct SlideshowDriver {
    machine: Slideshow,
    interval: Duration,
    cmd_rx: mpsc::Receiver<SlideshowCommand>,
    shutdown_rx: mpsc::Receiver<()>,
    state_tx: watch::Sender<SlideState>,
}

impl SlideshowDriver {
    /// Creates a driver and its handle.
    ///
    /// The caller spawns [`SlideshowDriver::run`]:
    /// ```rust,ignore
    /// let (driver, handle) = SlideshowDriver::new(3, Duration::from_millis(5000));
    /// tokio::spawn(driver.run());
    /// ```
    pub fn new(slide_count: usize, interval: Duration) -> (Self, SlideshowHandle) {
        let machine = Slideshow::new(slide_count);
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_CAPACITY);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let (state_tx, state_rx) = watch::channel(machine.state());

        let driver = SlideshowDriver {
            machine,
            interval,
            cmd_rx,
            shutdown_rx,
            state_tx,
        };

        let handle = SlideshowHandle {
            cmd_tx,
            shutdown_tx,
            state_rx,
        };

        (driver, handle)
    }

    /// Runs the slideshow loop.
    ///
    /// This should be spawned as a background task; it ends on shutdown or
    /// when every handle has been dropped.
    pub async fn run(mut self) {
        info!(
            slide_count = self.machine.slide_count(),
            interval_ms = self.interval.as_millis() as u64,
            "Slideshow driver starting"
        );

        // First tick lands one full interval out, not immediately
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Auto-advance; the branch is disabled entirely while paused
                _ = ticker.tick(), if self.machine.is_playing() => {
                    let index = self.machine.advance();
                    debug!(index, "Slideshow advanced on tick");
                    self.publish();
                }

                // Manual navigation / autoplay toggle
                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.apply(cmd, &mut ticker),
                        None => {
                            debug!("All slideshow handles dropped");
                            break;
                        }
                    }
                }

                // Teardown of the owning view
                _ = self.shutdown_rx.recv() => {
                    info!("Slideshow driver shutting down");
                    break;
                }
            }
        }

        info!("Slideshow driver stopped");
    }

    /// Applies a manual command to the machine.
    fn apply(&mut self, cmd: SlideshowCommand, ticker: &mut tokio::time::Interval) {
        match cmd {
            SlideshowCommand::Next => {
                self.machine.advance();
            }
            SlideshowCommand::Prev => {
                self.machine.back();
            }
            SlideshowCommand::GoTo(k) => {
                if let Err(e) = self.machine.go_to(k) {
                    warn!(error = %e, "Rejected slide jump");
                    return;
                }
            }
            SlideshowCommand::Toggle => {
                let playing = self.machine.toggle();
                if playing {
                    // Re-arm: the next tick is a full interval away, so a
                    // tick pending from before the pause can never fire
                    ticker.reset();
                }
                debug!(playing, "Slideshow autoplay toggled");
            }
        }
        self.publish();
    }

    fn publish(&self) {
        // Watch send only fails when every handle is gone; the recv loop
        // exits right after
        let _ = self.state_tx.send(self.machine.state());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    /// Sleeps long enough for the driver task to process pending work.
    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    fn spawn_driver(slide_count: usize) -> SlideshowHandle {
        let (driver, handle) = SlideshowDriver::new(slide_count, INTERVAL);
        tokio::spawn(driver.run());
        handle
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_advances_once_per_interval() {
        let handle = spawn_driver(3);
        assert_eq!(handle.state().index, 0);

        tokio::time::sleep(INTERVAL + Duration::from_millis(10)).await;
        assert_eq!(handle.state().index, 1);

        tokio::time::sleep(INTERVAL).await;
        assert_eq!(handle.state().index, 2);

        // Third tick wraps back to the first slide
        tokio::time::sleep(INTERVAL).await;
        assert_eq!(handle.state().index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_fires_before_the_first_interval() {
        let handle = spawn_driver(3);

        tokio::time::sleep(INTERVAL / 2).await;
        assert_eq!(handle.state().index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_in_both_states() {
        let handle = spawn_driver(3);

        handle.next().await.unwrap();
        settle().await;
        assert_eq!(handle.state().index, 1);

        handle.prev().await.unwrap();
        handle.prev().await.unwrap();
        settle().await;
        assert_eq!(handle.state().index, 2);

        // Pause, then navigate manually
        handle.toggle().await.unwrap();
        handle.go_to(0).await.unwrap();
        settle().await;
        let state = handle.state();
        assert_eq!(state.index, 0);
        assert!(!state.playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_jump_is_rejected() {
        let handle = spawn_driver(3);

        handle.go_to(1).await.unwrap();
        settle().await;
        assert_eq!(handle.state().index, 1);

        handle.go_to(5).await.unwrap();
        settle().await;
        assert_eq!(handle.state().index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_cancels_pending_ticks() {
        let handle = spawn_driver(3);

        handle.toggle().await.unwrap();
        settle().await;
        assert!(!handle.state().playing);

        // Several intervals elapse; the paused machine must not drift
        tokio::time::sleep(INTERVAL * 3).await;
        assert_eq!(handle.state().index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_rearms_a_full_interval_out() {
        let handle = spawn_driver(3);

        // Pause just before the first tick would have fired
        tokio::time::sleep(INTERVAL - Duration::from_millis(10)).await;
        handle.toggle().await.unwrap();
        settle().await;

        // Resume: the stale near-due tick must not fire early
        handle.toggle().await.unwrap();
        settle().await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(handle.state().index, 0);

        tokio::time::sleep(INTERVAL).await;
        assert_eq!(handle.state().index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_ticks_and_commands() {
        let handle = spawn_driver(3);

        handle.shutdown().await.unwrap();
        settle().await;

        // No further index change, even after the interval elapses
        tokio::time::sleep(INTERVAL * 2).await;
        assert_eq!(handle.state().index, 0);

        // Commands to a stopped driver report the closed channel
        let err = handle.next().await.unwrap_err();
        assert!(matches!(err, EngineError::DriverStopped(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_every_handle_stops_the_driver() {
        let (driver, handle) = SlideshowDriver::new(3, INTERVAL);
        let task = tokio::spawn(driver.run());

        drop(handle);
        settle().await;
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_reports_new_states() {
        let mut handle = spawn_driver(3);

        handle.next().await.unwrap();
        let state = handle.changed().await.unwrap();
        assert_eq!(state.index, 1);
    }
}
