//! Five-month session state.
//!
//! The session owns everything the simulator itself refuses to: the month
//! counter, the running budget, the ordered round history, and the
//! satisfaction feedback loop (including the documented first-round
//! baseline). The simulator stays pure; this is the layer that calls it.

use serde::{Deserialize, Serialize};

use crate::business::BusinessKind;
use crate::decisions::RoundDecisions;
use crate::outcome::{star_rating, BusinessTitle};
use crate::simulation::{round_currency, simulate_round, RoundResult};

/// A session always runs exactly this many months.
pub const TOTAL_MONTHS: u32 = 5;

/// Starting budget for every business.
pub const STARTING_BUDGET: f64 = 1000.0;

/// Satisfaction assumed before the first round has run.
pub const INITIAL_SATISFACTION: f64 = 70.0;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Months remain to be played.
    Playing,
    /// All months played; only aggregates and the summary are meaningful.
    Results,
}

/// Ways session construction or play can go wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The business needs a non-empty name before launch.
    EmptyBusinessName,
    /// First-round satisfaction baseline outside [0, 100].
    InvalidBaseline,
    /// Tried to play a month after the session finished.
    SessionOver,
    /// Asked for a summary before all months were played.
    NotFinished,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBusinessName => write!(f, "business name must not be empty"),
            Self::InvalidBaseline => write!(f, "satisfaction baseline must be in [0, 100]"),
            Self::SessionOver => write!(f, "all {} months have been played", TOTAL_MONTHS),
            Self::NotFinished => write!(f, "session summary is only available after month {}", TOTAL_MONTHS),
        }
    }
}

impl std::error::Error for SessionError {}

/// One run of the startup game, from launch to results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupSession {
    business: BusinessKind,
    name: String,
    budget: f64,
    results: Vec<RoundResult>,
    baseline_satisfaction: f64,
}

/// Aggregates and classification for a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub business: BusinessKind,
    pub name: String,
    pub total_profit: f64,
    /// Mean round satisfaction, rounded to the nearest whole point.
    pub average_satisfaction: f64,
    pub final_budget: f64,
    pub title: BusinessTitle,
    pub stars: u8,
}

impl StartupSession {
    /// Launch a new business with the standard first-round baseline.
    pub fn new(business: BusinessKind, name: &str) -> Result<Self, SessionError> {
        Self::with_baseline(business, name, INITIAL_SATISFACTION)
    }

    /// Launch with an explicit first-round satisfaction baseline.
    pub fn with_baseline(
        business: BusinessKind,
        name: &str,
        baseline_satisfaction: f64,
    ) -> Result<Self, SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::EmptyBusinessName);
        }
        if !(0.0..=100.0).contains(&baseline_satisfaction) {
            return Err(SessionError::InvalidBaseline);
        }
        Ok(Self {
            business,
            name: name.trim().to_string(),
            budget: STARTING_BUDGET,
            results: Vec::with_capacity(TOTAL_MONTHS as usize),
            baseline_satisfaction,
        })
    }

    pub fn business(&self) -> BusinessKind {
        self.business
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The month the next call to [`Self::play_month`] will simulate (1-based).
    pub fn current_month(&self) -> u32 {
        self.results.len() as u32 + 1
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn phase(&self) -> SessionPhase {
        if self.results.len() as u32 >= TOTAL_MONTHS {
            SessionPhase::Results
        } else {
            SessionPhase::Playing
        }
    }

    /// Satisfaction carried into the next round: the last result's score,
    /// or the baseline before any month has been played.
    pub fn previous_satisfaction(&self) -> f64 {
        self.results
            .last()
            .map(|r| r.satisfaction)
            .unwrap_or(self.baseline_satisfaction)
    }

    /// Simulate the current month with the given decisions.
    ///
    /// Appends the result to the history, folds its profit into the budget
    /// (rounded to cents), and advances the month counter.
    pub fn play_month(&mut self, decisions: &RoundDecisions) -> Result<RoundResult, SessionError> {
        if self.phase() == SessionPhase::Results {
            return Err(SessionError::SessionOver);
        }
        let result = simulate_round(
            &self.business.info(),
            decisions,
            self.current_month(),
            self.previous_satisfaction(),
        );
        self.budget = round_currency(self.budget + result.profit);
        self.results.push(result.clone());
        Ok(result)
    }

    /// Sum of round profits, rounded to cents.
    pub fn total_profit(&self) -> f64 {
        round_currency(self.results.iter().map(|r| r.profit).sum())
    }

    /// Mean round satisfaction rounded to the nearest whole point, or zero
    /// before any month has been played.
    pub fn average_satisfaction(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.results.iter().map(|r| r.satisfaction).sum();
        (sum / self.results.len() as f64).round()
    }

    /// Final aggregates plus title and stars. Only valid once all months
    /// have been played.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        if self.phase() != SessionPhase::Results {
            return Err(SessionError::NotFinished);
        }
        let total_profit = self.total_profit();
        let average_satisfaction = self.average_satisfaction();
        Ok(SessionSummary {
            business: self.business,
            name: self.name.clone(),
            total_profit,
            average_satisfaction,
            final_budget: self.budget,
            title: BusinessTitle::classify(total_profit, average_satisfaction),
            stars: star_rating(total_profit, average_satisfaction),
        })
    }
}
