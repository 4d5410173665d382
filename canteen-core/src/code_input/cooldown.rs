//! Resend cooldown
//!
//! [`ResendCooldown`] is the pure countdown. [`CooldownTicker`] is an optional
//! tokio driver that emits one tick per period for hosts without their own
//! timer.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Default cooldown window in ticks (one tick per second)
pub const DEFAULT_RESEND_COOLDOWN_SECS: u32 = 60;

/// Countdown gating the "resend code" action
///
/// Starts at `window`, decrements once per tick, and permits resend exactly
/// when it reaches 0. Stays permitted until [`resend`](Self::resend) restarts
/// the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCooldown {
    window: u32,
    remaining: u32,
    can_resend: bool,
}

impl Default for ResendCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_RESEND_COOLDOWN_SECS)
    }
}

impl ResendCooldown {
    pub fn new(window: u32) -> Self {
        Self {
            window,
            remaining: window,
            can_resend: window == 0,
        }
    }

    /// Advance one tick. Returns true on the tick that makes resend permitted.
    pub fn tick(&mut self) -> bool {
        if self.can_resend {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.can_resend = true;
            return true;
        }
        false
    }

    /// Consume the permission and restart the window.
    /// Returns false (no change) while the cooldown is still running.
    pub fn resend(&mut self) -> bool {
        if !self.can_resend {
            return false;
        }
        self.restart();
        true
    }

    /// Restart the window unconditionally
    pub fn restart(&mut self) {
        self.remaining = self.window;
        self.can_resend = self.window == 0;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn can_resend(&self) -> bool {
        self.can_resend
    }

    pub fn window(&self) -> u32 {
        self.window
    }
}

/// Background task sending `()` once per period
///
/// The first tick arrives one full period after start or restart. The task
/// is aborted when the ticker is stopped or dropped, which closes the
/// receiver.
#[derive(Debug)]
pub struct CooldownTicker {
    tx: mpsc::UnboundedSender<()>,
    runtime: Handle,
    period: Duration,
    handle: JoinHandle<()>,
}

impl CooldownTicker {
    /// Spawn the ticker on the current tokio runtime
    pub fn start(period: Duration) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runtime = Handle::current();
        let handle = spawn_ticks(&runtime, tx.clone(), period);
        let ticker = Self {
            tx,
            runtime,
            period,
            handle,
        };
        (ticker, rx)
    }

    /// Start a fresh phase: the next tick is one full period from now.
    /// Ticks already sent stay in the channel.
    pub fn restart(&mut self) {
        self.handle.abort();
        self.handle = spawn_ticks(&self.runtime, self.tx.clone(), self.period);
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for CooldownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn spawn_ticks(runtime: &Handle, tx: mpsc::UnboundedSender<()>, period: Duration) -> JoinHandle<()> {
    runtime.spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            if tx.send(()).is_err() {
                tracing::trace!("Cooldown receiver dropped, stopping ticker");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_ticks_permit_resend_exactly_once() {
        let mut cooldown = ResendCooldown::new(60);
        let mut flips = 0;
        for _ in 0..59 {
            if cooldown.tick() {
                flips += 1;
            }
            assert!(!cooldown.can_resend());
        }
        if cooldown.tick() {
            flips += 1;
        }
        assert!(cooldown.can_resend());
        assert_eq!(cooldown.remaining(), 0);

        // further ticks neither flip again nor revoke
        for _ in 0..10 {
            if cooldown.tick() {
                flips += 1;
            }
        }
        assert_eq!(flips, 1);
        assert!(cooldown.can_resend());
    }

    #[test]
    fn test_resend_restarts_window() {
        let mut cooldown = ResendCooldown::new(3);
        assert!(!cooldown.resend());
        assert_eq!(cooldown.remaining(), 3);

        for _ in 0..3 {
            cooldown.tick();
        }
        assert!(cooldown.resend());
        assert_eq!(cooldown.remaining(), 3);
        assert!(!cooldown.can_resend());
    }

    #[test]
    fn test_zero_window_is_immediately_permitted() {
        let mut cooldown = ResendCooldown::new(0);
        assert!(cooldown.can_resend());
        assert!(!cooldown.tick());
        assert!(cooldown.resend());
        assert!(cooldown.can_resend());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_drives_cooldown() {
        let (ticker, mut rx) = CooldownTicker::start(Duration::from_secs(1));
        let mut cooldown = ResendCooldown::new(3);

        let started = Instant::now();
        while !cooldown.can_resend() {
            rx.recv().await.expect("ticker should be running");
            cooldown.tick();
        }
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_ticker_closes_channel() {
        let (ticker, mut rx) = CooldownTicker::start(Duration::from_secs(1));
        assert_eq!(rx.recv().await, Some(()));
        drop(ticker);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_phase() {
        let (mut ticker, mut rx) = CooldownTicker::start(Duration::from_secs(1));
        tokio::time::advance(Duration::from_millis(700)).await;
        ticker.restart();

        let restarted = Instant::now();
        assert_eq!(rx.recv().await, Some(()));
        assert_eq!(restarted.elapsed(), Duration::from_secs(1));
    }
}
