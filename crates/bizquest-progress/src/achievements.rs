//! Achievement and level reference data.
//!
//! Fixed catalogs: twelve achievements with XP awards, and a six-rung level
//! ladder from Intern to CEO. Achievements serialize as their kebab-case
//! ids so saved ledgers stay readable and stable across renames of the
//! Rust-side variants.

use serde::{Deserialize, Serialize};

/// Every badge a player can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    FirstDay,
    BusinessStudent,
    QuizWhiz,
    QuizMaster,
    CareerExplorer,
    OperationsPro,
    HeroWorshipper,
    Shark,
    MentorsFriend,
    StartupFounder,
    ProfitMaster,
    /// Meta-badge, auto-unlocked once every other badge is held.
    BizquestChampion,
}

/// Display data and XP award for one achievement.
#[derive(Debug, Clone)]
pub struct AchievementInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub xp: u32,
}

impl Achievement {
    pub fn info(&self) -> AchievementInfo {
        match self {
            Self::FirstDay => AchievementInfo {
                id: "first-day",
                name: "First Day",
                emoji: "🎒",
                description: "Visit the app for the first time",
                xp: 50,
            },
            Self::BusinessStudent => AchievementInfo {
                id: "business-student",
                name: "Business Student",
                emoji: "🏢",
                description: "Explore all 13 Business Basics items",
                xp: 150,
            },
            Self::QuizWhiz => AchievementInfo {
                id: "quiz-whiz",
                name: "Quiz Whiz",
                emoji: "📝",
                description: "Score 80%+ on any quiz",
                xp: 100,
            },
            Self::QuizMaster => AchievementInfo {
                id: "quiz-master",
                name: "Quiz Master",
                emoji: "🏆",
                description: "Score 90%+ on a marathon quiz",
                xp: 200,
            },
            Self::CareerExplorer => AchievementInfo {
                id: "career-explorer",
                name: "Career Explorer",
                emoji: "🎓",
                description: "View all 7 career stages and all 7 specialties",
                xp: 150,
            },
            Self::OperationsPro => AchievementInfo {
                id: "operations-pro",
                name: "Operations Pro",
                emoji: "📋",
                description: "Read all 20 business operations",
                xp: 150,
            },
            Self::HeroWorshipper => AchievementInfo {
                id: "hero-worshipper",
                name: "Hero Worshipper",
                emoji: "⭐",
                description: "Expand and read all 9 business heroes",
                xp: 100,
            },
            Self::Shark => AchievementInfo {
                id: "shark",
                name: "Shark",
                emoji: "🦈",
                description: "Complete all 5 pitch evaluations",
                xp: 150,
            },
            Self::MentorsFriend => AchievementInfo {
                id: "mentors-friend",
                name: "Mentor's Friend",
                emoji: "🤖",
                description: "Send 5+ messages to Biz Mentor",
                xp: 100,
            },
            Self::StartupFounder => AchievementInfo {
                id: "startup-founder",
                name: "Startup Founder",
                emoji: "🏪",
                description: "Complete the My Startup simulator",
                xp: 150,
            },
            Self::ProfitMaster => AchievementInfo {
                id: "profit-master",
                name: "Profit Master",
                emoji: "💰",
                description: "Earn $5,000+ total profit in My Startup",
                xp: 200,
            },
            Self::BizquestChampion => AchievementInfo {
                id: "bizquest-champion",
                name: "BizQuest Champion",
                emoji: "👑",
                description: "Earn all other badges",
                xp: 200,
            },
        }
    }

    pub fn all() -> &'static [Achievement] {
        &[
            Achievement::FirstDay,
            Achievement::BusinessStudent,
            Achievement::QuizWhiz,
            Achievement::QuizMaster,
            Achievement::CareerExplorer,
            Achievement::OperationsPro,
            Achievement::HeroWorshipper,
            Achievement::Shark,
            Achievement::MentorsFriend,
            Achievement::StartupFounder,
            Achievement::ProfitMaster,
            Achievement::BizquestChampion,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.info().id == id)
    }
}

/// One rung of the XP level ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub min_xp: u32,
    pub emoji: &'static str,
}

/// The ladder, ordered by ascending XP threshold.
pub static LEVELS: [Level; 6] = [
    Level { name: "Intern", min_xp: 0, emoji: "💼" },
    Level { name: "Associate", min_xp: 100, emoji: "📊" },
    Level { name: "Manager", min_xp: 300, emoji: "📈" },
    Level { name: "Director", min_xp: 600, emoji: "⭐" },
    Level { name: "VP", min_xp: 1000, emoji: "🚀" },
    Level { name: "CEO", min_xp: 1500, emoji: "👑" },
];

/// The highest level whose threshold the XP total has reached.
pub fn level_for(xp: u32) -> &'static Level {
    let mut current = &LEVELS[0];
    for level in &LEVELS {
        if xp >= level.min_xp {
            current = level;
        } else {
            break;
        }
    }
    current
}

/// The next level above the XP total, or `None` at the top of the ladder.
pub fn next_level(xp: u32) -> Option<&'static Level> {
    LEVELS.iter().find(|level| xp < level.min_xp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_achievements() {
        assert_eq!(Achievement::all().len(), 12);
    }

    #[test]
    fn test_achievement_ids_unique_and_roundtrip() {
        for a in Achievement::all() {
            assert_eq!(Achievement::from_id(a.info().id), Some(*a));
        }
        assert_eq!(Achievement::from_id("nonexistent"), None);
    }

    #[test]
    fn test_achievement_serde_uses_ids() {
        let json = serde_json::to_string(&Achievement::MentorsFriend).unwrap();
        assert_eq!(json, "\"mentors-friend\"");
        let back: Achievement = serde_json::from_str("\"bizquest-champion\"").unwrap();
        assert_eq!(back, Achievement::BizquestChampion);
    }

    #[test]
    fn test_xp_awards_positive() {
        for a in Achievement::all() {
            assert!(a.info().xp > 0, "{}", a.info().id);
        }
    }

    #[test]
    fn test_ladder_sorted() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0].min_xp < pair[1].min_xp);
        }
    }

    #[test]
    fn test_level_for_boundaries() {
        assert_eq!(level_for(0).name, "Intern");
        assert_eq!(level_for(99).name, "Intern");
        assert_eq!(level_for(100).name, "Associate");
        assert_eq!(level_for(1499).name, "VP");
        assert_eq!(level_for(1500).name, "CEO");
        assert_eq!(level_for(u32::MAX).name, "CEO");
    }

    #[test]
    fn test_next_level() {
        assert_eq!(next_level(0).unwrap().name, "Associate");
        assert_eq!(next_level(600).unwrap().name, "VP");
        assert_eq!(next_level(1500), None);
    }
}
