//! `podium_lab` - triangles, award ceremonies and hailstone sequences
//!
//! Three small units built to be exercised by test doubles:
//!
//! - [`Triangle`]: validated on construction, reports perimeter, area and kind
//! - [`awards::perform_award_ceremony`]: drives a fixed call sequence against
//!   pluggable [`RankList`] and [`AwardCeremonyActions`] collaborators
//! - [`satisfies_hailstone`]: whether a Collatz sequence reaches 1

#![allow(clippy::module_name_repetitions)] // TriangleKind etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on the enum
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Heron's formula reads better without mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod awards;
pub mod error;
pub mod event;
pub mod hailstone;
pub mod triangle;

pub use awards::{
    AwardCeremonyActions, CeremonyStep, Medal, RankList, RankedNames, perform_award_ceremony,
};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use hailstone::{Hailstone, satisfies_hailstone, stopping_time};
pub use triangle::{ClassifyOptions, EqualSides, Triangle, TriangleKind};
