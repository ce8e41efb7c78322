//! The monthly round simulator.
//!
//! A pure arithmetic pipeline: demand, capacity, customers, revenue,
//! expenses, profit, satisfaction. Same inputs always produce the same
//! output. The caller owns all state between rounds and feeds the previous
//! month's satisfaction back in.

use serde::{Deserialize, Serialize};

use crate::business::BusinessArchetype;
use crate::decisions::{MarketingOption, PricingTier, QualityLevel, RoundDecisions};

/// Outcome of one simulated month. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Month number, 1-based.
    pub month: u32,
    /// Customers actually served (demand capped by capacity).
    pub customers: u32,
    /// Revenue in dollars, rounded to cents.
    pub revenue: f64,
    /// Expenses in dollars, rounded to cents.
    pub expenses: f64,
    /// Revenue minus expenses, rounded to cents. May be negative.
    pub profit: f64,
    /// Customer satisfaction in [0, 100].
    pub satisfaction: f64,
}

/// Round to the nearest cent.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Seasonal demand oscillation: ±10% with a six-month period.
pub fn seasonal_factor(month: u32) -> f64 {
    1.0 + 0.1 * (month as f64 * std::f64::consts::PI / 3.0).sin()
}

/// How much last month's satisfaction carries demand forward.
///
/// Ranges from 0.7 (satisfaction 0) to 1.0 (satisfaction 100).
pub fn satisfaction_factor(previous_satisfaction: f64) -> f64 {
    0.7 + 0.3 * (previous_satisfaction / 100.0)
}

/// Simulate one month of business.
///
/// `previous_satisfaction` is the prior round's satisfaction score, or the
/// session's documented first-round baseline. It must lie in [0, 100]; the
/// session layer validates this before calling.
///
/// Total over its input domain: every decision combination, any positive
/// month, and any in-range satisfaction produce a defined [`RoundResult`].
pub fn simulate_round(
    business: &BusinessArchetype,
    decisions: &RoundDecisions,
    month: u32,
    previous_satisfaction: f64,
) -> RoundResult {
    let pricing = decisions.pricing.spec();
    let marketing = decisions.marketing.spec();

    // Demand: base scaled by price point, marketing, season, and reputation.
    let demand = (business.base_demand
        * pricing.demand_factor
        * (1.0 + marketing.demand_boost)
        * seasonal_factor(month)
        * satisfaction_factor(previous_satisfaction))
    .round() as u32;

    // Capacity limits how much of that demand gets served.
    let capacity = (business.max_capacity * decisions.staffing.capacity_multiplier()).round() as u32;
    let customers = demand.min(capacity);

    // Revenue: price per customer is 3x unit cost at the medium-tier baseline.
    let price_per_customer = business.cost_per_unit * pricing.price * 3.0;
    let revenue = round_currency(customers as f64 * price_per_customer);

    // Expenses: serving cost (doubled for premium quality) plus fixed costs.
    let unit_cost = business.cost_per_unit * decisions.quality.cost_multiplier();
    let expenses = round_currency(
        customers as f64 * unit_cost + marketing.cost + decisions.staffing.labor_cost(),
    );

    let profit = round_currency(revenue - expenses);

    // Satisfaction: flat baseline adjusted by the month's choices.
    let mut satisfaction: f64 = 60.0;
    if decisions.quality == QualityLevel::Premium {
        satisfaction += 20.0;
    }
    match decisions.pricing {
        PricingTier::Low => satisfaction += 10.0,
        PricingTier::Premium => satisfaction -= 5.0,
        PricingTier::Medium => {}
    }
    if decisions.marketing != MarketingOption::None {
        satisfaction += 5.0;
    }
    if customers < demand {
        // Couldn't serve everyone.
        satisfaction -= 10.0;
    }
    let satisfaction = satisfaction.clamp(0.0, 100.0);

    RoundResult {
        month,
        customers,
        revenue,
        expenses,
        profit,
        satisfaction,
    }
}
