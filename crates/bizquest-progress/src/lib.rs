//! Player progress ledger for BizQuest.
//!
//! Tracks XP, level, unlocked achievements, and per-feature completion
//! flags. All state flows through an explicit [`store::ProgressStore`]
//! handle injected by the caller; there is no global singleton. The
//! simulation crate knows nothing about any of this.

pub mod achievements;
pub mod ledger;
pub mod store;

pub use achievements::{level_for, next_level, Achievement, AchievementInfo, Level, LEVELS};
pub use ledger::{Ledger, ProgressData, TrackedSection, UnlockOutcome, XpGain};
pub use store::{JsonFileStore, MemoryStore, ProgressError, ProgressStore};
