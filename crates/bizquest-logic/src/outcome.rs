//! End-of-game outcome classification.
//!
//! Two independent pure functions over the session aggregates: a six-tier
//! title cascade and a 0-5 star rating. Neither needs the round history,
//! only total profit and average satisfaction.

use serde::{Deserialize, Serialize};

/// Qualitative result tier, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessTitle {
    FutureCeo,
    RisingMogul,
    RisingEntrepreneur,
    BusinessBuilder,
    LearningTheRopes,
    DrawingBoard,
}

impl BusinessTitle {
    /// Classify a finished session. Thresholds are closed lower bounds and
    /// the first matching tier wins.
    pub fn classify(total_profit: f64, avg_satisfaction: f64) -> BusinessTitle {
        if total_profit >= 5000.0 && avg_satisfaction >= 80.0 {
            BusinessTitle::FutureCeo
        } else if total_profit >= 3000.0 {
            BusinessTitle::RisingMogul
        } else if total_profit >= 1500.0 {
            BusinessTitle::RisingEntrepreneur
        } else if total_profit >= 500.0 {
            BusinessTitle::BusinessBuilder
        } else if total_profit >= 0.0 {
            BusinessTitle::LearningTheRopes
        } else {
            BusinessTitle::DrawingBoard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FutureCeo => "Future CEO!",
            Self::RisingMogul => "Rising Mogul!",
            Self::RisingEntrepreneur => "Rising Entrepreneur!",
            Self::BusinessBuilder => "Business Builder!",
            Self::LearningTheRopes => "Learning the Ropes!",
            Self::DrawingBoard => "Back to the Drawing Board!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::FutureCeo => "👑",
            Self::RisingMogul => "🌟",
            Self::RisingEntrepreneur => "🚀",
            Self::BusinessBuilder => "📈",
            Self::LearningTheRopes => "📚",
            Self::DrawingBoard => "🔄",
        }
    }

    pub fn all() -> &'static [BusinessTitle] {
        &[
            BusinessTitle::FutureCeo,
            BusinessTitle::RisingMogul,
            BusinessTitle::RisingEntrepreneur,
            BusinessTitle::BusinessBuilder,
            BusinessTitle::LearningTheRopes,
            BusinessTitle::DrawingBoard,
        ]
    }
}

/// Star rating in [0, 5]: one point per profit threshold (500, 2000, 4000)
/// and per satisfaction threshold (70, 85).
///
/// The cap is redundant with the current five checks but kept so an added
/// check can never push the rating past five stars.
pub fn star_rating(total_profit: f64, avg_satisfaction: f64) -> u8 {
    let mut stars = 0u8;
    if total_profit >= 500.0 {
        stars += 1;
    }
    if total_profit >= 2000.0 {
        stars += 1;
    }
    if total_profit >= 4000.0 {
        stars += 1;
    }
    if avg_satisfaction >= 70.0 {
        stars += 1;
    }
    if avg_satisfaction >= 85.0 {
        stars += 1;
    }
    stars.min(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_tier_needs_both_thresholds() {
        assert_eq!(BusinessTitle::classify(5000.0, 80.0), BusinessTitle::FutureCeo);
        // Just under on profit drops a tier even with great satisfaction.
        assert_eq!(BusinessTitle::classify(4999.99, 80.0), BusinessTitle::RisingMogul);
        // High profit but mediocre satisfaction also misses the top.
        assert_eq!(BusinessTitle::classify(6000.0, 79.0), BusinessTitle::RisingMogul);
    }

    #[test]
    fn test_tier_thresholds_closed_lower_bounds() {
        assert_eq!(BusinessTitle::classify(3000.0, 0.0), BusinessTitle::RisingMogul);
        assert_eq!(BusinessTitle::classify(2999.99, 0.0), BusinessTitle::RisingEntrepreneur);
        assert_eq!(BusinessTitle::classify(1500.0, 0.0), BusinessTitle::RisingEntrepreneur);
        assert_eq!(BusinessTitle::classify(500.0, 0.0), BusinessTitle::BusinessBuilder);
        assert_eq!(BusinessTitle::classify(0.0, 0.0), BusinessTitle::LearningTheRopes);
        assert_eq!(BusinessTitle::classify(-0.01, 100.0), BusinessTitle::DrawingBoard);
    }

    #[test]
    fn test_labels_and_emoji_distinct() {
        let titles = BusinessTitle::all();
        for (i, t) in titles.iter().enumerate() {
            for other in &titles[i + 1..] {
                assert_ne!(t.label(), other.label());
                assert_ne!(t.emoji(), other.emoji());
            }
        }
    }

    #[test]
    fn test_star_boundaries() {
        assert_eq!(star_rating(500.0, 0.0), 1);
        assert_eq!(star_rating(499.99, 0.0), 0);
        assert_eq!(star_rating(4000.0, 85.0), 5);
        assert_eq!(star_rating(-100.0, 0.0), 0);
        assert_eq!(star_rating(2000.0, 70.0), 3);
    }

    #[test]
    fn test_stars_never_exceed_five() {
        assert_eq!(star_rating(f64::MAX, 100.0), 5);
    }
}
