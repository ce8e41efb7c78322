//! End-to-end session playthroughs with exact expected numbers.

use bizquest_logic::business::BusinessKind;
use bizquest_logic::decisions::{
    MarketingOption, PricingTier, QualityLevel, RoundDecisions, StaffingChoice,
};
use bizquest_logic::outcome::BusinessTitle;
use bizquest_logic::session::{StartupSession, INITIAL_SATISFACTION, TOTAL_MONTHS};

#[test]
fn neutral_lemonade_run_month_by_month() {
    let mut session = StartupSession::new(BusinessKind::Lemonade, "Zesty Lemonade").unwrap();
    assert_eq!(session.previous_satisfaction(), INITIAL_SATISFACTION);

    // Demand shrinks as satisfaction settles at 50, but stays above the
    // 30-customer capacity all five months.
    let expected_customers = [30u32; 5];
    let expected_profit = [75.0; 5];

    for month in 1..=TOTAL_MONTHS {
        let result = session.play_month(&RoundDecisions::default()).unwrap();
        assert_eq!(result.month, month);
        assert_eq!(result.customers, expected_customers[(month - 1) as usize]);
        assert_eq!(result.profit, expected_profit[(month - 1) as usize]);
        assert_eq!(result.satisfaction, 50.0);
    }

    let summary = session.summary().unwrap();
    assert_eq!(summary.total_profit, 375.0);
    assert_eq!(summary.average_satisfaction, 50.0);
    assert_eq!(summary.title, BusinessTitle::LearningTheRopes);
    assert_eq!(summary.stars, 0);
}

#[test]
fn premium_tutoring_run_tracks_seasonal_dip() {
    // Premium pricing keeps demand below the tiny capacity, so customers
    // follow demand and the seasonal dip is visible in months 4-5.
    let mut session = StartupSession::new(BusinessKind::Tutoring, "StudyBuddies").unwrap();
    let decisions = RoundDecisions {
        pricing: PricingTier::Premium,
        marketing: MarketingOption::None,
        quality: QualityLevel::Basic,
        staffing: StaffingChoice::Solo,
    };

    let expected_customers = [9u32, 8, 8, 7, 7];
    let expected_profit = [256.5, 228.0, 228.0, 199.5, 199.5];

    for month in 0..TOTAL_MONTHS as usize {
        let result = session.play_month(&decisions).unwrap();
        assert_eq!(result.customers, expected_customers[month], "month {}", month + 1);
        assert_eq!(result.profit, expected_profit[month], "month {}", month + 1);
        assert_eq!(result.satisfaction, 55.0);
    }

    let summary = session.summary().unwrap();
    assert_eq!(summary.total_profit, 1111.5);
    assert_eq!(summary.average_satisfaction, 55.0);
    assert_eq!(summary.final_budget, 2111.5);
    assert_eq!(summary.title, BusinessTitle::BusinessBuilder);
    assert_eq!(summary.stars, 1);
}

#[test]
fn baseline_override_changes_first_round_only() {
    let decisions = RoundDecisions {
        pricing: PricingTier::Premium,
        marketing: MarketingOption::None,
        quality: QualityLevel::Basic,
        staffing: StaffingChoice::Solo,
    };

    // Tutoring at baseline 0: demand = round(9 * 1.0866 * 0.7) = 7.
    let mut cold = StartupSession::with_baseline(BusinessKind::Tutoring, "Cold Start", 0.0).unwrap();
    let first = cold.play_month(&decisions).unwrap();
    assert_eq!(first.customers, 7);

    // From month 2 on, the session's own satisfaction drives demand, so a
    // different baseline no longer matters.
    let mut warm = StartupSession::with_baseline(BusinessKind::Tutoring, "Warm Start", 100.0).unwrap();
    warm.play_month(&decisions).unwrap();
    let cold_second = cold.play_month(&decisions).unwrap();
    let warm_second = warm.play_month(&decisions).unwrap();
    assert_eq!(cold_second.customers, warm_second.customers);
    assert_eq!(cold_second.profit, warm_second.profit);
}

#[test]
fn session_is_deterministic() {
    let decisions = RoundDecisions {
        pricing: PricingTier::Low,
        marketing: MarketingOption::Flyers,
        quality: QualityLevel::Premium,
        staffing: StaffingChoice::Hire,
    };
    let run = |name: &str| {
        let mut session = StartupSession::new(BusinessKind::TshirtShop, name).unwrap();
        for _ in 0..TOTAL_MONTHS {
            session.play_month(&decisions).unwrap();
        }
        session.summary().unwrap()
    };
    let a = run("Threads A");
    let b = run("Threads B");
    assert_eq!(a.total_profit, b.total_profit);
    assert_eq!(a.average_satisfaction, b.average_satisfaction);
    assert_eq!(a.title, b.title);
    assert_eq!(a.stars, b.stars);
    assert_eq!(a.business, b.business);
}
