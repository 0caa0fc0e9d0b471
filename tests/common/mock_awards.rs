//! Test doubles for the award ceremony collaborators.
//!
//! - `StubList`: a rank list with a hardcoded set of five names
//! - `MockAwards`: an action sink that checks calls against an ordered list
//!   of expectations
//!
//! # Example
//!
//! ```ignore
//! let mut mock = MockAwards::new();
//! mock.expect_play_anthem().expect_lights_off();
//! mock.play_anthem();
//! mock.turn_off_the_lights_and_go_home();
//! mock.verify();
//! ```

#![allow(dead_code)] // Shared test helper; not every integration test uses every mock

use podium_lab::{AwardCeremonyActions, CeremonyStep, Medal, RankList};
use std::collections::VecDeque;

/// The names every `StubList` hands out, in rank order.
pub const STUB_NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Ethan"];

/// Rank list that returns `STUB_NAMES` in order, then empty strings.
#[derive(Debug, Default)]
pub struct StubList {
    index: usize,
}

impl StubList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many names have been handed out, including empty ones.
    #[must_use]
    pub fn pulled(&self) -> usize {
        self.index
    }
}

impl RankList for StubList {
    fn next_name(&mut self) -> String {
        let name = STUB_NAMES.get(self.index).copied().unwrap_or_default();
        self.index += 1;
        name.to_string()
    }
}

/// Action sink with strictly ordered expectations.
///
/// Each call must match the next queued expectation. Mismatches are
/// recorded rather than panicking mid-ceremony, and reported together by
/// [`MockAwards::verify`], which also fails on unmet expectations. Dropping
/// an unverified mock verifies it.
#[derive(Debug, Default)]
pub struct MockAwards {
    expected: VecDeque<CeremonyStep>,
    calls: Vec<CeremonyStep>,
    failures: Vec<String>,
    verified: bool,
}

impl MockAwards {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an expected call.
    pub fn expect(&mut self, step: CeremonyStep) -> &mut Self {
        self.expected.push_back(step);
        self
    }

    pub fn expect_play_anthem(&mut self) -> &mut Self {
        self.expect(CeremonyStep::PlayAnthem)
    }

    pub fn expect_award_bronze(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.expect(CeremonyStep::award(Medal::Bronze, recipient))
    }

    pub fn expect_award_silver(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.expect(CeremonyStep::award(Medal::Silver, recipient))
    }

    pub fn expect_award_gold(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.expect(CeremonyStep::award(Medal::Gold, recipient))
    }

    pub fn expect_lights_off(&mut self) -> &mut Self {
        self.expect(CeremonyStep::LightsOff)
    }

    /// Calls received so far, matched or not.
    #[must_use]
    pub fn calls(&self) -> &[CeremonyStep] {
        &self.calls
    }

    /// Mismatches recorded so far.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Panic if any call was unexpected or any expectation is still pending.
    pub fn verify(&mut self) {
        self.verified = true;
        let mut problems = self.failures.clone();
        problems.extend(
            self.expected
                .iter()
                .map(|step| format!("expected call never made: {step}")),
        );
        assert!(
            problems.is_empty(),
            "MockAwards verification failed:\n  {}\ncalls received: {:?}",
            problems.join("\n  "),
            self.calls
        );
    }

    fn on_call(&mut self, step: CeremonyStep) {
        match self.expected.pop_front() {
            Some(next) if next == step => {}
            Some(next) => {
                self.failures
                    .push(format!("unexpected call: {step} (expected {next})"));
                // Keep the unmatched expectation pending.
                self.expected.push_front(next);
            }
            None => self
                .failures
                .push(format!("unexpected call: {step} (no calls left)")),
        }
        self.calls.push(step);
    }
}

impl AwardCeremonyActions for MockAwards {
    fn play_anthem(&mut self) {
        self.on_call(CeremonyStep::PlayAnthem);
    }

    fn award_bronze(&mut self, recipient: &str) {
        self.on_call(CeremonyStep::award(Medal::Bronze, recipient));
    }

    fn award_silver(&mut self, recipient: &str) {
        self.on_call(CeremonyStep::award(Medal::Silver, recipient));
    }

    fn award_gold(&mut self, recipient: &str) {
        self.on_call(CeremonyStep::award(Medal::Gold, recipient));
    }

    fn turn_off_the_lights_and_go_home(&mut self) {
        self.on_call(CeremonyStep::LightsOff);
    }
}

impl Drop for MockAwards {
    fn drop(&mut self) {
        if !self.verified && !std::thread::panicking() {
            self.verify();
        }
    }
}
