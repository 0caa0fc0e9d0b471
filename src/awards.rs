//! Award ceremony sequencing.
//!
//! [`perform_award_ceremony`] drives two collaborators: a [`RankList`] that
//! hands out names in rank order and an [`AwardCeremonyActions`] sink that
//! performs the ceremony. The order of calls is the whole contract:
//!
//! 1. play the anthem
//! 2. bronze, silver, gold, each to the next name from the rank list
//! 3. turn off the lights and go home
//!
//! # Examples
//!
//! ```
//! use podium_lab::awards::{AwardCeremonyActions, RankedNames, perform_award_ceremony};
//!
//! #[derive(Default)]
//! struct Announcer(Vec<String>);
//!
//! impl AwardCeremonyActions for Announcer {
//!     fn play_anthem(&mut self) {
//!         self.0.push("anthem".into());
//!     }
//!     fn award_bronze(&mut self, recipient: &str) {
//!         self.0.push(format!("bronze {recipient}"));
//!     }
//!     fn award_silver(&mut self, recipient: &str) {
//!         self.0.push(format!("silver {recipient}"));
//!     }
//!     fn award_gold(&mut self, recipient: &str) {
//!         self.0.push(format!("gold {recipient}"));
//!     }
//!     fn turn_off_the_lights_and_go_home(&mut self) {
//!         self.0.push("lights off".into());
//!     }
//! }
//!
//! let mut ranks: RankedNames = ["Ann", "Ben", "Cy"].into_iter().collect();
//! let mut announcer = Announcer::default();
//! perform_award_ceremony(&mut ranks, &mut announcer);
//! assert_eq!(announcer.0[1], "bronze Ann");
//! assert_eq!(announcer.0[4], "lights off");
//! ```

use crate::event::{LogLevel, emit_event, emit_log};
use std::collections::VecDeque;
use std::fmt;

/// Source of names in rank order.
pub trait RankList {
    /// The next name, or an empty string once the list is exhausted.
    fn next_name(&mut self) -> String;
}

/// The externally visible effects of a ceremony.
pub trait AwardCeremonyActions {
    fn play_anthem(&mut self);
    fn award_bronze(&mut self, recipient: &str);
    fn award_silver(&mut self, recipient: &str);
    fn award_gold(&mut self, recipient: &str);
    fn turn_off_the_lights_and_go_home(&mut self);
}

/// A medal handed out during the ceremony.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    /// Medals in the order they are awarded.
    pub const CEREMONY_ORDER: [Self; 3] = [Self::Bronze, Self::Silver, Self::Gold];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One call made on [`AwardCeremonyActions`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CeremonyStep {
    PlayAnthem,
    Award { medal: Medal, recipient: String },
    LightsOff,
}

impl CeremonyStep {
    /// Shorthand for an award step.
    #[must_use]
    pub fn award(medal: Medal, recipient: impl Into<String>) -> Self {
        Self::Award {
            medal,
            recipient: recipient.into(),
        }
    }

    /// Replay this step against an action sink.
    pub fn apply<A>(&self, actions: &mut A)
    where
        A: AwardCeremonyActions + ?Sized,
    {
        match self {
            Self::PlayAnthem => actions.play_anthem(),
            Self::Award { medal, recipient } => match medal {
                Medal::Bronze => actions.award_bronze(recipient),
                Medal::Silver => actions.award_silver(recipient),
                Medal::Gold => actions.award_gold(recipient),
            },
            Self::LightsOff => actions.turn_off_the_lights_and_go_home(),
        }
    }
}

impl fmt::Display for CeremonyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayAnthem => f.write_str("play anthem"),
            Self::Award { medal, recipient } => write!(f, "award {medal} to {recipient:?}"),
            Self::LightsOff => f.write_str("turn off the lights and go home"),
        }
    }
}

/// A [`RankList`] over an owned list of names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedNames {
    names: VecDeque<String>,
}

impl RankedNames {
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names: names.into(),
        }
    }

    /// Names not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for RankedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl RankList for RankedNames {
    fn next_name(&mut self) -> String {
        self.names.pop_front().unwrap_or_default()
    }
}

impl<R: RankList + ?Sized> RankList for &mut R {
    fn next_name(&mut self) -> String {
        (**self).next_name()
    }
}

impl<R: RankList + ?Sized> RankList for Box<R> {
    fn next_name(&mut self) -> String {
        (**self).next_name()
    }
}

fn record(step: &CeremonyStep) {
    let line = step.to_string();
    emit_log(LogLevel::Debug, &format!("ceremony: {line}"));
    emit_event("ceremony.step", &line);
}

fn award<A>(actions: &mut A, medal: Medal, recipient: String)
where
    A: AwardCeremonyActions + ?Sized,
{
    if recipient.is_empty() {
        emit_log(
            LogLevel::Warn,
            &format!("ceremony: rank list exhausted before the {medal} medal"),
        );
    }
    let step = CeremonyStep::Award { medal, recipient };
    record(&step);
    step.apply(actions);
}

/// Run the ceremony.
///
/// Calls, strictly in order: `play_anthem`, `award_bronze`, `award_silver`,
/// `award_gold`, `turn_off_the_lights_and_go_home`. Exactly three names are
/// pulled, each right before its award. An exhausted rank list yields empty
/// names, which are passed on unchanged.
pub fn perform_award_ceremony<R, A>(ranks: &mut R, actions: &mut A)
where
    R: RankList + ?Sized,
    A: AwardCeremonyActions + ?Sized,
{
    record(&CeremonyStep::PlayAnthem);
    actions.play_anthem();

    for medal in Medal::CEREMONY_ORDER {
        award(actions, medal, ranks.next_name());
    }

    record(&CeremonyStep::LightsOff);
    actions.turn_off_the_lights_and_go_home();
}
