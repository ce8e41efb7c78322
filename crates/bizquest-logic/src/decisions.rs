//! Monthly decision enums and their lookup tables.
//!
//! Each round the player picks one value from each of four closed sets:
//! pricing tier, marketing option, quality level, staffing choice. Every
//! combination (3 × 4 × 2 × 2 = 48) is valid and produces a defined result.
//! The numeric effects live here as exhaustive matches so a new variant
//! cannot be added without the compiler demanding its numbers.

use serde::{Deserialize, Serialize};

/// Price point for the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    /// Cheap — attracts customers, thin margins.
    Low,
    /// Neutral baseline.
    Medium,
    /// Expensive — dampens demand, fat margins.
    Premium,
}

/// Pricing effects: a price multiplier and a demand factor.
#[derive(Debug, Clone, Copy)]
pub struct PricingSpec {
    /// Multiplier applied to the per-customer base price.
    pub price: f64,
    /// Multiplier applied to base demand.
    pub demand_factor: f64,
}

impl PricingTier {
    pub fn spec(&self) -> PricingSpec {
        match self {
            Self::Low => PricingSpec { price: 1.0, demand_factor: 1.4 },
            Self::Medium => PricingSpec { price: 2.0, demand_factor: 1.0 },
            Self::Premium => PricingSpec { price: 3.5, demand_factor: 0.6 },
        }
    }

    pub fn all() -> &'static [PricingTier] {
        &[PricingTier::Low, PricingTier::Medium, PricingTier::Premium]
    }
}

/// Marketing spend for the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketingOption {
    None,
    Flyers,
    Social,
    Influencer,
}

/// Marketing effects: a flat campaign cost and a demand boost.
#[derive(Debug, Clone, Copy)]
pub struct MarketingSpec {
    /// Fixed cost added to the month's expenses.
    pub cost: f64,
    /// Fractional demand boost (0.15 = +15%).
    pub demand_boost: f64,
}

impl MarketingOption {
    pub fn spec(&self) -> MarketingSpec {
        match self {
            Self::None => MarketingSpec { cost: 0.0, demand_boost: 0.0 },
            Self::Flyers => MarketingSpec { cost: 50.0, demand_boost: 0.15 },
            Self::Social => MarketingSpec { cost: 100.0, demand_boost: 0.3 },
            Self::Influencer => MarketingSpec { cost: 200.0, demand_boost: 0.5 },
        }
    }

    pub fn all() -> &'static [MarketingOption] {
        &[
            MarketingOption::None,
            MarketingOption::Flyers,
            MarketingOption::Social,
            MarketingOption::Influencer,
        ]
    }
}

/// Product quality level for the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Basic,
    Premium,
}

impl QualityLevel {
    /// Multiplier on the per-customer serving cost.
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Self::Basic => 1.0,
            Self::Premium => 2.0,
        }
    }

    pub fn all() -> &'static [QualityLevel] {
        &[QualityLevel::Basic, QualityLevel::Premium]
    }
}

/// Whether to run the business alone or hire help this month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffingChoice {
    Solo,
    Hire,
}

impl StaffingChoice {
    /// Multiplier on the archetype's max serving capacity.
    pub fn capacity_multiplier(&self) -> f64 {
        match self {
            Self::Solo => 1.0,
            Self::Hire => 1.8,
        }
    }

    /// Flat labor cost added to the month's expenses.
    pub fn labor_cost(&self) -> f64 {
        match self {
            Self::Solo => 0.0,
            Self::Hire => 150.0,
        }
    }

    pub fn all() -> &'static [StaffingChoice] {
        &[StaffingChoice::Solo, StaffingChoice::Hire]
    }
}

/// The four decisions a player makes each month.
///
/// Built fresh from player input every round and discarded after the round
/// result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDecisions {
    pub pricing: PricingTier,
    pub marketing: MarketingOption,
    pub quality: QualityLevel,
    pub staffing: StaffingChoice,
}

impl Default for RoundDecisions {
    /// The neutral setup the decision screen resets to each month.
    fn default() -> Self {
        Self {
            pricing: PricingTier::Medium,
            marketing: MarketingOption::None,
            quality: QualityLevel::Basic,
            staffing: StaffingChoice::Solo,
        }
    }
}

impl RoundDecisions {
    /// Every valid decision combination, in a stable order.
    pub fn all_combinations() -> Vec<RoundDecisions> {
        let mut combos = Vec::with_capacity(48);
        for &pricing in PricingTier::all() {
            for &marketing in MarketingOption::all() {
                for &quality in QualityLevel::all() {
                    for &staffing in StaffingChoice::all() {
                        combos.push(RoundDecisions { pricing, marketing, quality, staffing });
                    }
                }
            }
        }
        combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_demand_factor_strictly_decreasing() {
        let tiers = PricingTier::all();
        for pair in tiers.windows(2) {
            assert!(
                pair[0].spec().demand_factor > pair[1].spec().demand_factor,
                "demand factor must fall as price rises"
            );
        }
    }

    #[test]
    fn test_pricing_price_strictly_increasing() {
        let tiers = PricingTier::all();
        for pair in tiers.windows(2) {
            assert!(pair[0].spec().price < pair[1].spec().price);
        }
    }

    #[test]
    fn test_pricing_table_values() {
        assert_eq!(PricingTier::Low.spec().demand_factor, 1.4);
        assert_eq!(PricingTier::Medium.spec().demand_factor, 1.0);
        assert_eq!(PricingTier::Premium.spec().demand_factor, 0.6);
        assert_eq!(PricingTier::Premium.spec().price, 3.5);
    }

    #[test]
    fn test_marketing_boost_and_cost_monotonic() {
        let options = MarketingOption::all();
        for pair in options.windows(2) {
            assert!(pair[0].spec().demand_boost <= pair[1].spec().demand_boost);
            assert!(pair[0].spec().cost <= pair[1].spec().cost);
        }
    }

    #[test]
    fn test_marketing_none_is_free() {
        let spec = MarketingOption::None.spec();
        assert_eq!(spec.cost, 0.0);
        assert_eq!(spec.demand_boost, 0.0);
    }

    #[test]
    fn test_quality_cost_doubles() {
        assert_eq!(QualityLevel::Basic.cost_multiplier(), 1.0);
        assert_eq!(QualityLevel::Premium.cost_multiplier(), 2.0);
    }

    #[test]
    fn test_staffing_effects() {
        assert_eq!(StaffingChoice::Solo.capacity_multiplier(), 1.0);
        assert_eq!(StaffingChoice::Hire.capacity_multiplier(), 1.8);
        assert_eq!(StaffingChoice::Solo.labor_cost(), 0.0);
        assert_eq!(StaffingChoice::Hire.labor_cost(), 150.0);
    }

    #[test]
    fn test_all_combinations_count() {
        let combos = RoundDecisions::all_combinations();
        assert_eq!(combos.len(), 48);
    }

    #[test]
    fn test_default_is_neutral() {
        let d = RoundDecisions::default();
        assert_eq!(d.pricing, PricingTier::Medium);
        assert_eq!(d.marketing, MarketingOption::None);
        assert_eq!(d.quality, QualityLevel::Basic);
        assert_eq!(d.staffing, StaffingChoice::Solo);
    }
}
