//! Segmented Code Input
//!
//! Six single-digit slots for the one-time verification code. Operations
//! never touch the host UI directly; they return [`CodeEvent`]s (focus moves,
//! submission) for the host to apply.
//!
//! Malformed input is ignored: a rejected operation returns no events and
//! leaves every slot unchanged.

pub mod cooldown;

pub use cooldown::{CooldownTicker, DEFAULT_RESEND_COOLDOWN_SECS, ResendCooldown};

use crate::config::CoreConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;

/// Number of slots
pub const CODE_LENGTH: usize = 6;

const LAST_SLOT: usize = CODE_LENGTH - 1;

/// Side effect requested from the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CodeEvent {
    /// Move keyboard focus to this slot
    Focus(usize),
    /// All slots are filled; verify this code
    Submit(String),
}

/// The six code slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedCode {
    slots: [Option<char>; CODE_LENGTH],
}

impl SegmentedCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set slot `index` from raw field input.
    ///
    /// `input` must be empty (clears the slot) or exactly one ASCII digit.
    /// Anything else, or an out-of-range index, is rejected.
    pub fn set_digit(&mut self, index: usize, input: &str) -> Vec<CodeEvent> {
        if index >= CODE_LENGTH {
            return Vec::new();
        }
        let mut chars = input.chars();
        let digit = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_digit() => Some(c),
            _ => {
                tracing::trace!(index, "Rejected code input");
                return Vec::new();
            }
        };

        self.slots[index] = digit;

        let mut events = Vec::new();
        if digit.is_some() {
            if index < LAST_SLOT {
                events.push(CodeEvent::Focus(index + 1));
            } else if let Some(code) = self.code() {
                events.push(CodeEvent::Submit(code));
            }
        }
        events
    }

    /// Backspace pressed on slot `index`.
    ///
    /// Only moves focus back from an empty slot; clearing a filled slot is
    /// done by the host through `set_digit(index, "")`.
    pub fn backspace(&self, index: usize) -> Option<CodeEvent> {
        match self.slots.get(index) {
            Some(None) if index > 0 => Some(CodeEvent::Focus(index - 1)),
            _ => None,
        }
    }

    /// Spread pasted text over the slots from the left.
    ///
    /// Rejected in full when `text` is empty or holds any non-digit. Only the
    /// first six digits are used; the rest of the slots are cleared.
    pub fn paste(&mut self, text: &str) -> Vec<CodeEvent> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            tracing::trace!("Rejected pasted code");
            return Vec::new();
        }

        let mut digits = text.chars().take(CODE_LENGTH);
        for slot in self.slots.iter_mut() {
            *slot = digits.next();
        }

        let focus = self.first_empty().unwrap_or(LAST_SLOT);
        let mut events = vec![CodeEvent::Focus(focus)];
        if let Some(code) = self.code() {
            events.push(CodeEvent::Submit(code));
        }
        events
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The six digits, once every slot is filled
    pub fn code(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<char>; CODE_LENGTH] {
        &self.slots
    }

    fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn reset(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }
}

/// Verification screen state: the code slots plus the resend cooldown.
///
/// The countdown advances through [`tick`](Self::tick), either from the
/// host's own timer or from a ticker owned by this entry
/// ([`start_ticker`](Self::start_ticker)). An owned ticker is restarted on
/// every reset and resend, so the next tick is always a full period away.
#[derive(Debug, Default)]
pub struct CodeEntry {
    code: SegmentedCode,
    cooldown: ResendCooldown,
    ticker: Option<(CooldownTicker, mpsc::UnboundedReceiver<()>)>,
}

impl CodeEntry {
    pub fn new(cooldown_secs: u32) -> Self {
        Self {
            code: SegmentedCode::new(),
            cooldown: ResendCooldown::new(cooldown_secs),
            ticker: None,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.resend_cooldown_secs)
    }

    pub fn set_digit(&mut self, index: usize, input: &str) -> Vec<CodeEvent> {
        self.code.set_digit(index, input)
    }

    pub fn backspace(&self, index: usize) -> Option<CodeEvent> {
        self.code.backspace(index)
    }

    pub fn paste(&mut self, text: &str) -> Vec<CodeEvent> {
        self.code.paste(text)
    }

    /// Whether the verify action is enabled
    pub fn is_complete(&self) -> bool {
        self.code.is_complete()
    }

    pub fn code(&self) -> Option<String> {
        self.code.code()
    }

    pub fn slots(&self) -> &SegmentedCode {
        &self.code
    }

    /// One second elapsed
    pub fn tick(&mut self) -> bool {
        self.cooldown.tick()
    }

    pub fn can_resend(&self) -> bool {
        self.cooldown.can_resend()
    }

    pub fn seconds_left(&self) -> u32 {
        self.cooldown.remaining()
    }

    /// Resend the code: clears every slot, restarts the cooldown and asks
    /// the host to focus the first slot. `None` while the cooldown runs.
    pub fn resend(&mut self) -> Option<CodeEvent> {
        if !self.cooldown.resend() {
            return None;
        }
        self.code.reset();
        self.restart_ticker();
        tracing::info!(cooldown_secs = self.cooldown.window(), "Verification code resent");
        Some(CodeEvent::Focus(0))
    }

    /// Screen entered: empty slots and a fresh cooldown
    pub fn reset(&mut self) {
        self.code.reset();
        self.cooldown.restart();
        self.restart_ticker();
    }

    /// Drive the countdown from a tokio ticker owned by this entry,
    /// replacing any previous one. Must be called inside a tokio runtime.
    pub fn start_ticker(&mut self, period: Duration) {
        self.ticker = Some(CooldownTicker::start(period));
    }

    pub fn stop_ticker(&mut self) {
        self.ticker = None;
    }

    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Wait for the owned ticker and apply one tick.
    ///
    /// Returns `None` without waiting when no ticker is running, otherwise
    /// what [`tick`](Self::tick) returned.
    pub async fn next_tick(&mut self) -> Option<bool> {
        let (_, rx) = self.ticker.as_mut()?;
        rx.recv().await?;
        Some(self.tick())
    }

    fn restart_ticker(&mut self) {
        if let Some((ticker, rx)) = self.ticker.as_mut() {
            ticker.restart();
            // Ticks from the old phase no longer count
            while rx.try_recv().is_ok() {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(digits: &str) -> SegmentedCode {
        let mut code = SegmentedCode::new();
        for (i, d) in digits.chars().enumerate() {
            code.set_digit(i, &d.to_string());
        }
        code
    }

    #[test]
    fn test_set_digit_advances_focus() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.set_digit(0, "4"), vec![CodeEvent::Focus(1)]);
        assert_eq!(code.slot(0), Some('4'));
        assert!(!code.is_complete());
    }

    #[test]
    fn test_set_digit_rejects_bad_input() {
        let mut code = filled("12");
        let before = code.clone();
        assert!(code.set_digit(2, "a").is_empty());
        assert!(code.set_digit(2, "34").is_empty());
        assert!(code.set_digit(2, "٣").is_empty());
        assert!(code.set_digit(6, "3").is_empty());
        assert_eq!(code, before);
    }

    #[test]
    fn test_clearing_slot_emits_nothing() {
        let mut code = filled("12");
        assert!(code.set_digit(1, "").is_empty());
        assert_eq!(code.slot(1), None);
    }

    #[test]
    fn test_last_digit_submits() {
        let mut code = filled("12345");
        assert_eq!(
            code.set_digit(5, "6"),
            vec![CodeEvent::Submit("123456".to_string())]
        );
        assert_eq!(code.code().as_deref(), Some("123456"));
    }

    #[test]
    fn test_last_slot_without_full_code_does_not_submit() {
        let mut code = SegmentedCode::new();
        assert!(code.set_digit(5, "6").is_empty());
    }

    #[test]
    fn test_filling_earlier_slot_last_does_not_submit() {
        // completion through a slot other than the last only moves focus
        let mut code = filled("123456");
        code.set_digit(2, "");
        assert_eq!(code.set_digit(2, "9"), vec![CodeEvent::Focus(3)]);
        assert!(code.is_complete());
    }

    #[test]
    fn test_backspace_moves_focus_from_empty_slot() {
        let code = filled("12");
        assert_eq!(code.backspace(2), Some(CodeEvent::Focus(1)));
        assert_eq!(code.backspace(1), None);
        assert_eq!(code.backspace(0), None);
        assert_eq!(SegmentedCode::new().backspace(0), None);
    }

    #[test]
    fn test_paste_with_non_digit_is_rejected() {
        let mut code = filled("98");
        let before = code.clone();
        assert!(code.paste("12a456").is_empty());
        assert!(code.paste("").is_empty());
        assert!(code.paste("1234567a").is_empty());
        assert_eq!(code, before);
    }

    #[test]
    fn test_paste_full_code_submits() {
        let mut code = SegmentedCode::new();
        assert_eq!(
            code.paste("123456"),
            vec![
                CodeEvent::Focus(5),
                CodeEvent::Submit("123456".to_string())
            ]
        );
        assert!(code.is_complete());
    }

    #[test]
    fn test_paste_partial_left_packs_and_clears_rest() {
        let mut code = filled("999999");
        assert_eq!(code.paste("12"), vec![CodeEvent::Focus(2)]);
        assert_eq!(code.slot(0), Some('1'));
        assert_eq!(code.slot(1), Some('2'));
        assert!(code.slots()[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_paste_truncates_to_six() {
        let mut code = SegmentedCode::new();
        let events = code.paste("12345678");
        assert_eq!(events.last(), Some(&CodeEvent::Submit("123456".to_string())));
    }

    #[test]
    fn test_resend_only_after_cooldown() {
        let mut entry = CodeEntry::new(2);
        entry.paste("12");
        assert_eq!(entry.resend(), None);
        assert_eq!(entry.slots().slot(0), Some('1'));

        entry.tick();
        entry.tick();
        assert!(entry.can_resend());
        assert_eq!(entry.resend(), Some(CodeEvent::Focus(0)));
        assert_eq!(entry.slots(), &SegmentedCode::new());
        assert_eq!(entry.seconds_left(), 2);
        assert!(!entry.can_resend());
    }

    #[test]
    fn test_events_serialize_for_host() {
        let json = serde_json::to_value(CodeEvent::Submit("123456".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "submit", "value": "123456"}));
        let json = serde_json::to_value(CodeEvent::Focus(2)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "focus", "value": 2}));
    }

    #[test]
    fn test_reset_restarts_everything() {
        let mut entry = CodeEntry::default();
        entry.paste("123456");
        entry.tick();
        entry.reset();
        assert!(!entry.is_complete());
        assert_eq!(entry.seconds_left(), DEFAULT_RESEND_COOLDOWN_SECS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_owned_ticker_counts_down() {
        let mut entry = CodeEntry::new(3);
        assert_eq!(entry.next_tick().await, None);

        entry.start_ticker(Duration::from_secs(1));
        let started = tokio::time::Instant::now();
        assert_eq!(entry.next_tick().await, Some(false));
        assert_eq!(entry.next_tick().await, Some(false));
        assert_eq!(entry.next_tick().await, Some(true));
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert!(entry.can_resend());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resend_restarts_ticker_phase() {
        let mut entry = CodeEntry::new(1);
        entry.start_ticker(Duration::from_secs(1));
        assert_eq!(entry.next_tick().await, Some(true));

        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(entry.resend(), Some(CodeEvent::Focus(0)));
        assert!(!entry.can_resend());

        let resent = tokio::time::Instant::now();
        assert_eq!(entry.next_tick().await, Some(true));
        assert_eq!(resent.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_drops_stale_ticks() {
        let mut entry = CodeEntry::new(5);
        entry.start_ticker(Duration::from_secs(1));
        // Let two ticks queue up unconsumed
        tokio::time::sleep(Duration::from_millis(2500)).await;
        entry.reset();
        assert_eq!(entry.seconds_left(), 5);

        let reset_at = tokio::time::Instant::now();
        assert_eq!(entry.next_tick().await, Some(false));
        assert_eq!(reset_at.elapsed(), Duration::from_secs(1));
        assert_eq!(entry.seconds_left(), 4);

        entry.stop_ticker();
        assert!(!entry.has_ticker());
        assert_eq!(entry.next_tick().await, None);
    }
}
