//! BizQuest Headless Validation Harness
//!
//! Exercises the pure simulation logic without any UI or storage.
//! Runs entirely in-process and exits non-zero on any failed check.
//!
//! Usage:
//!   cargo run -p bizquest-simtest
//!   cargo run -p bizquest-simtest -- --verbose

use bizquest_logic::business::BusinessKind;
use bizquest_logic::decisions::{MarketingOption, PricingTier, RoundDecisions};
use bizquest_logic::outcome::{star_rating, BusinessTitle};
use bizquest_logic::session::StartupSession;
use bizquest_logic::simulation::{round_currency, seasonal_factor, simulate_round};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

// ── Scripted scenarios (shared fixture) ─────────────────────────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/playtest_scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    business: BusinessKind,
    months: Vec<RoundDecisions>,
    expected: ExpectedOutcome,
}

#[derive(Debug, Deserialize)]
struct ExpectedOutcome {
    total_profit: f64,
    avg_satisfaction: f64,
    title: String,
    stars: u8,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult { name: name.into(), passed, detail }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== BizQuest Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Business catalog sanity
    results.extend(validate_catalog());

    // 2. Full decision-space sweep
    results.extend(validate_decision_sweep());

    // 3. Lookup table monotonicity
    results.extend(validate_monotonicity());

    // 4. Seasonal periodicity
    results.extend(validate_seasonality());

    // 5. Outcome classifier boundaries
    results.extend(validate_outcomes());

    // 6. Worked lemonade example
    results.extend(validate_worked_example());

    // 7. Scripted five-month scenarios
    results.extend(validate_scenarios());

    // 8. Randomized invariant sweep
    results.extend(validate_fuzz_sweep());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Business catalog ─────────────────────────────────────────────────

fn validate_catalog() -> Vec<TestResult> {
    println!("--- Business Catalog ---");
    let mut results = Vec::new();

    results.push(check(
        "catalog_count",
        BusinessKind::all().len() == 5,
        format!("{} archetypes", BusinessKind::all().len()),
    ));

    let mut bad = Vec::new();
    for kind in BusinessKind::all() {
        let info = kind.info();
        if info.base_demand <= 0.0 || info.cost_per_unit <= 0.0 || info.max_capacity <= 0.0 {
            bad.push(info.id);
        }
    }
    results.push(check(
        "catalog_positive_params",
        bad.is_empty(),
        if bad.is_empty() {
            "all archetypes have positive parameters".into()
        } else {
            format!("bad archetypes: {}", bad.join(", "))
        },
    ));

    let undersized: Vec<&str> = BusinessKind::all()
        .iter()
        .map(|k| k.info())
        .filter(|i| i.max_capacity >= i.base_demand)
        .map(|i| i.id)
        .collect();
    results.push(check(
        "catalog_capacity_below_demand",
        undersized.is_empty(),
        if undersized.is_empty() {
            "every business starts capacity-constrained at full demand".into()
        } else {
            format!("capacity >= demand for: {}", undersized.join(", "))
        },
    ));

    results
}

// ── 2. Decision sweep ───────────────────────────────────────────────────

fn validate_decision_sweep() -> Vec<TestResult> {
    println!("--- Decision Space Sweep ---");
    let mut results = Vec::new();

    let combos = RoundDecisions::all_combinations();
    results.push(check(
        "sweep_combo_count",
        combos.len() == 48,
        format!("{} decision combinations", combos.len()),
    ));

    let mut violations = Vec::new();
    for kind in BusinessKind::all() {
        let business = kind.info();
        for decisions in &combos {
            let r = simulate_round(&business, decisions, 1, 70.0);
            let capacity =
                (business.max_capacity * decisions.staffing.capacity_multiplier()).round() as u32;
            if r.customers > capacity {
                violations.push(format!("{}: capacity exceeded", business.id));
            }
            if !(0.0..=100.0).contains(&r.satisfaction) {
                violations.push(format!("{}: satisfaction {}", business.id, r.satisfaction));
            }
            if r.profit != round_currency(r.revenue - r.expenses) {
                violations.push(format!("{}: profit identity broken", business.id));
            }
        }
    }
    results.push(check(
        "sweep_invariants",
        violations.is_empty(),
        if violations.is_empty() {
            format!("{} rounds clean", combos.len() * BusinessKind::all().len())
        } else {
            violations.join("; ")
        },
    ));

    results
}

// ── 3. Monotonicity ─────────────────────────────────────────────────────

fn validate_monotonicity() -> Vec<TestResult> {
    println!("--- Lookup Monotonicity ---");
    let mut results = Vec::new();

    let tiers = PricingTier::all();
    let demand_falls = tiers
        .windows(2)
        .all(|p| p[0].spec().demand_factor > p[1].spec().demand_factor);
    let price_rises = tiers.windows(2).all(|p| p[0].spec().price < p[1].spec().price);
    results.push(check(
        "pricing_tradeoff",
        demand_falls && price_rises,
        "demand factor falls, price rises across tiers".into(),
    ));

    let options = MarketingOption::all();
    let boosts_rise = options
        .windows(2)
        .all(|p| p[0].spec().demand_boost <= p[1].spec().demand_boost);
    let costs_rise = options.windows(2).all(|p| p[0].spec().cost <= p[1].spec().cost);
    results.push(check(
        "marketing_ladder",
        boosts_rise && costs_rise,
        "boost and cost never decrease along the marketing ladder".into(),
    ));

    results
}

// ── 4. Seasonality ──────────────────────────────────────────────────────

fn validate_seasonality() -> Vec<TestResult> {
    println!("--- Seasonal Cycle ---");
    let mut results = Vec::new();

    let mut max_delta = 0.0f64;
    for month in 1..=24 {
        let delta = (seasonal_factor(month) - seasonal_factor(month + 6)).abs();
        max_delta = max_delta.max(delta);
    }
    results.push(check(
        "seasonal_period_six",
        max_delta < 1e-9,
        format!("max factor drift over 24 months: {:.2e}", max_delta),
    ));

    let in_band = (1..=12).all(|m| {
        let f = seasonal_factor(m);
        (0.9..=1.1).contains(&f)
    });
    results.push(check(
        "seasonal_band",
        in_band,
        "factor stays within ±10%".into(),
    ));

    results
}

// ── 5. Outcome boundaries ───────────────────────────────────────────────

fn validate_outcomes() -> Vec<TestResult> {
    println!("--- Outcome Classifier ---");
    let mut results = Vec::new();

    let cases = [
        (5000.0, 80.0, BusinessTitle::FutureCeo),
        (4999.99, 80.0, BusinessTitle::RisingMogul),
        (6000.0, 79.0, BusinessTitle::RisingMogul),
        (1500.0, 0.0, BusinessTitle::RisingEntrepreneur),
        (500.0, 0.0, BusinessTitle::BusinessBuilder),
        (0.0, 0.0, BusinessTitle::LearningTheRopes),
        (-0.01, 100.0, BusinessTitle::DrawingBoard),
    ];
    let mut title_fails = Vec::new();
    for (profit, sat, expected) in cases {
        let got = BusinessTitle::classify(profit, sat);
        if got != expected {
            title_fails.push(format!("({}, {}) -> {:?}", profit, sat, got));
        }
    }
    results.push(check(
        "title_thresholds",
        title_fails.is_empty(),
        if title_fails.is_empty() {
            format!("{} boundary cases", cases.len())
        } else {
            title_fails.join("; ")
        },
    ));

    let star_cases = [
        (500.0, 0.0, 1u8),
        (499.99, 0.0, 0),
        (4000.0, 85.0, 5),
        (-100.0, 0.0, 0),
        (2000.0, 70.0, 3),
    ];
    let star_ok = star_cases
        .iter()
        .all(|(p, s, expected)| star_rating(*p, *s) == *expected);
    results.push(check(
        "star_thresholds",
        star_ok,
        format!("{} boundary cases", star_cases.len()),
    ));

    results
}

// ── 6. Worked example ───────────────────────────────────────────────────

fn validate_worked_example() -> Vec<TestResult> {
    println!("--- Worked Example ---");
    let business = BusinessKind::Lemonade.info();
    let r = simulate_round(&business, &RoundDecisions::default(), 1, 70.0);

    let ok = r.customers == 30
        && r.revenue == 90.0
        && r.expenses == 15.0
        && r.profit == 75.0
        && r.satisfaction == 50.0;
    vec![check(
        "lemonade_month_one",
        ok,
        format!(
            "customers={} revenue={} expenses={} profit={} satisfaction={}",
            r.customers, r.revenue, r.expenses, r.profit, r.satisfaction
        ),
    )]
}

// ── 7. Scripted scenarios ───────────────────────────────────────────────

fn validate_scenarios() -> Vec<TestResult> {
    println!("--- Scripted Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(check("scenarios_parse", false, format!("JSON parse error: {}", e)));
            return results;
        }
    };
    results.push(check(
        "scenarios_parse",
        !scenarios.is_empty(),
        format!("{} scenarios loaded", scenarios.len()),
    ));

    for scenario in &scenarios {
        let mut session = match StartupSession::new(scenario.business, &scenario.name) {
            Ok(s) => s,
            Err(e) => {
                results.push(check(&scenario.name, false, format!("launch failed: {}", e)));
                continue;
            }
        };
        let mut play_error = None;
        for decisions in &scenario.months {
            if let Err(e) = session.play_month(decisions) {
                play_error = Some(e);
                break;
            }
        }
        if let Some(e) = play_error {
            results.push(check(&scenario.name, false, format!("play failed: {}", e)));
            continue;
        }
        let summary = match session.summary() {
            Ok(s) => s,
            Err(e) => {
                results.push(check(&scenario.name, false, format!("summary failed: {}", e)));
                continue;
            }
        };

        let expected = &scenario.expected;
        let ok = summary.total_profit == expected.total_profit
            && summary.average_satisfaction == expected.avg_satisfaction
            && summary.title.label() == expected.title
            && summary.stars == expected.stars;
        results.push(check(
            &scenario.name,
            ok,
            format!(
                "profit={} satisfaction={} title=\"{}\" stars={}",
                summary.total_profit,
                summary.average_satisfaction,
                summary.title.label(),
                summary.stars
            ),
        ));
    }

    results
}

// ── 8. Randomized sweep ─────────────────────────────────────────────────

fn validate_fuzz_sweep() -> Vec<TestResult> {
    println!("--- Randomized Sweep ---");
    let mut rng = StdRng::seed_from_u64(0xB129_E57A);
    let combos = RoundDecisions::all_combinations();
    let mut violations = 0u32;
    let rounds = 2000;

    for _ in 0..rounds {
        let kind = BusinessKind::all()[rng.gen_range(0..BusinessKind::all().len())];
        let business = kind.info();
        let decisions = combos[rng.gen_range(0..combos.len())];
        let month = rng.gen_range(1..=120);
        let prev_sat = rng.gen_range(0.0..=100.0);

        let r = simulate_round(&business, &decisions, month, prev_sat);
        let capacity =
            (business.max_capacity * decisions.staffing.capacity_multiplier()).round() as u32;
        if r.customers > capacity
            || !(0.0..=100.0).contains(&r.satisfaction)
            || r.profit != round_currency(r.revenue - r.expenses)
        {
            violations += 1;
        }
    }

    vec![check(
        "fuzz_invariants",
        violations == 0,
        format!("{} random rounds, {} violations", rounds, violations),
    )]
}
