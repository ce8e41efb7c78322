//! Business archetype catalog — the five playable businesses.
//!
//! Archetypes are fixed reference data: a player picks one at session start
//! and it never changes. Each archetype supplies the baseline numbers the
//! round simulator scales by the player's decisions.

use serde::{Deserialize, Serialize};

/// One of the playable business archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum BusinessKind {
    /// Classic first business. Low costs, strong neighborhood demand.
    Lemonade = 0,
    /// Mobile apps and games. Small audience, high per-unit cost.
    AppStudio = 1,
    /// Custom t-shirts online and at local events.
    TshirtShop = 2,
    /// Tutoring sessions for other students. Tiny capacity, loyal demand.
    Tutoring = 3,
    /// Content channel. Biggest audience, cheapest to serve.
    Youtube = 4,
}

/// Fixed parameters for one business archetype.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessArchetype {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// Base customers per month before decision/seasonal scaling.
    pub base_demand: f64,
    /// Base cost to serve each customer.
    pub cost_per_unit: f64,
    /// Max customers served per month without hiring help.
    pub max_capacity: f64,
    /// How much premium quality boosts satisfaction for this business.
    ///
    /// Carried for catalog compatibility but not read by the published
    /// round formula, which applies a flat quality bonus instead.
    pub premium_multiplier: f64,
}

impl BusinessKind {
    /// Catalog entry for this archetype.
    pub fn info(&self) -> BusinessArchetype {
        match self {
            Self::Lemonade => BusinessArchetype {
                id: "lemonade",
                name: "Lemonade Stand",
                emoji: "🍋",
                description: "Classic first business! Sell refreshing lemonade in your neighborhood.",
                base_demand: 40.0,
                cost_per_unit: 0.5,
                max_capacity: 30.0,
                premium_multiplier: 1.3,
            },
            Self::AppStudio => BusinessArchetype {
                id: "app-studio",
                name: "App Studio",
                emoji: "📱",
                description: "Build and sell mobile apps and games to users worldwide.",
                base_demand: 25.0,
                cost_per_unit: 2.0,
                max_capacity: 20.0,
                premium_multiplier: 1.5,
            },
            Self::TshirtShop => BusinessArchetype {
                id: "tshirt-shop",
                name: "T-Shirt Shop",
                emoji: "👕",
                description: "Design and sell custom t-shirts online and at local events.",
                base_demand: 30.0,
                cost_per_unit: 5.0,
                max_capacity: 25.0,
                premium_multiplier: 1.4,
            },
            Self::Tutoring => BusinessArchetype {
                id: "tutoring",
                name: "Tutoring Service",
                emoji: "📚",
                description: "Help other students succeed by offering tutoring sessions.",
                base_demand: 15.0,
                cost_per_unit: 3.0,
                max_capacity: 10.0,
                premium_multiplier: 1.6,
            },
            Self::Youtube => BusinessArchetype {
                id: "youtube",
                name: "YouTube Channel",
                emoji: "🎥",
                description: "Create content and build an audience on YouTube.",
                base_demand: 50.0,
                cost_per_unit: 1.0,
                max_capacity: 40.0,
                premium_multiplier: 1.2,
            },
        }
    }

    /// All archetypes for iteration.
    pub fn all() -> &'static [BusinessKind] {
        &[
            BusinessKind::Lemonade,
            BusinessKind::AppStudio,
            BusinessKind::TshirtShop,
            BusinessKind::Tutoring,
            BusinessKind::Youtube,
        ]
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Lemonade),
            1 => Some(Self::AppStudio),
            2 => Some(Self::TshirtShop),
            3 => Some(Self::Tutoring),
            4 => Some(Self::Youtube),
            _ => None,
        }
    }

    /// Look up an archetype by its catalog id string.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.info().id == id)
    }
}
