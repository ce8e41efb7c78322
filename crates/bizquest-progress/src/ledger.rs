//! The progress ledger itself: XP, badges, and completion tracking.
//!
//! [`Ledger`] wraps a [`ProgressStore`], keeps the current [`ProgressData`]
//! in memory, and writes through on every mutation, the same read-modify-
//! write discipline the original app applied to its key-value store.

use serde::{Deserialize, Serialize};

use crate::achievements::{level_for, next_level, Achievement, Level};
use crate::store::{ProgressError, ProgressStore};

/// Everything the ledger persists.
///
/// Every field defaults, so a save file from an older version (or an empty
/// one) deserializes cleanly with the missing fields filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressData {
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub unlocked_achievements: Vec<Achievement>,
    #[serde(default)]
    pub viewed_basics: Vec<u32>,
    #[serde(default)]
    pub viewed_career_stages: Vec<u32>,
    #[serde(default)]
    pub viewed_specialties: Vec<u32>,
    #[serde(default)]
    pub viewed_operations: Vec<u32>,
    #[serde(default)]
    pub expanded_heroes: Vec<u32>,
    #[serde(default)]
    pub completed_pitches: Vec<u32>,
    #[serde(default)]
    pub mentor_messages: u32,
    #[serde(default)]
    pub startup_completed: bool,
    #[serde(default)]
    pub startup_best_profit: f64,
}

impl ProgressData {
    pub fn has(&self, achievement: Achievement) -> bool {
        self.unlocked_achievements.contains(&achievement)
    }
}

/// Content areas whose viewed-item ids the ledger tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedSection {
    Basics,
    CareerStages,
    Specialties,
    Operations,
    Heroes,
    Pitches,
}

/// Result of an XP award.
#[derive(Debug, Clone, PartialEq)]
pub struct XpGain {
    pub new_xp: u32,
    pub leveled_up: bool,
    /// The level just reached, if the award crossed a threshold.
    pub new_level: Option<&'static Level>,
}

/// Result of an unlock attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockOutcome {
    /// False if the badge was already held (no XP awarded).
    pub newly_unlocked: bool,
    pub xp_awarded: u32,
    /// Set when this unlock completed the set and the Champion badge
    /// cascaded in behind it.
    pub champion_unlocked: bool,
}

/// Write-through progress ledger over an injected store.
#[derive(Debug)]
pub struct Ledger<S: ProgressStore> {
    store: S,
    data: ProgressData,
}

impl<S: ProgressStore> Ledger<S> {
    /// Open the ledger, loading whatever the store has saved.
    pub fn open(mut store: S) -> Self {
        let data = store.load();
        Self { store, data }
    }

    pub fn progress(&self) -> &ProgressData {
        &self.data
    }

    pub fn level(&self) -> &'static Level {
        level_for(self.data.xp)
    }

    /// Award XP, reporting any level-up.
    pub fn add_xp(&mut self, amount: u32) -> Result<XpGain, ProgressError> {
        let old_level = level_for(self.data.xp);
        self.data.xp += amount;
        let new_level = level_for(self.data.xp);
        self.store.save(&self.data)?;
        let leveled_up = new_level != old_level;
        Ok(XpGain {
            new_xp: self.data.xp,
            leveled_up,
            new_level: leveled_up.then_some(new_level),
        })
    }

    /// Unlock a badge and award its XP. Idempotent: a held badge is a no-op.
    ///
    /// Unlocking the last outstanding regular badge cascades the
    /// [`Achievement::BizquestChampion`] meta-badge.
    pub fn unlock(&mut self, achievement: Achievement) -> Result<UnlockOutcome, ProgressError> {
        if self.data.has(achievement) {
            return Ok(UnlockOutcome {
                newly_unlocked: false,
                xp_awarded: 0,
                champion_unlocked: false,
            });
        }

        self.data.unlocked_achievements.push(achievement);
        let mut xp_awarded = achievement.info().xp;
        self.data.xp += xp_awarded;

        let mut champion_unlocked = false;
        if achievement != Achievement::BizquestChampion {
            let all_others_held = Achievement::all()
                .iter()
                .filter(|a| **a != Achievement::BizquestChampion)
                .all(|a| self.data.has(*a));
            if all_others_held && !self.data.has(Achievement::BizquestChampion) {
                self.data.unlocked_achievements.push(Achievement::BizquestChampion);
                self.data.xp += Achievement::BizquestChampion.info().xp;
                xp_awarded += Achievement::BizquestChampion.info().xp;
                champion_unlocked = true;
            }
        }

        self.store.save(&self.data)?;
        Ok(UnlockOutcome {
            newly_unlocked: true,
            xp_awarded,
            champion_unlocked,
        })
    }

    /// Record a finished startup run, keeping the best profit seen.
    pub fn record_startup_run(&mut self, total_profit: f64) -> Result<(), ProgressError> {
        self.data.startup_completed = true;
        if total_profit > self.data.startup_best_profit {
            self.data.startup_best_profit = total_profit;
        }
        self.store.save(&self.data)
    }

    /// Mark one content item viewed. Idempotent per (section, id).
    pub fn mark_viewed(&mut self, section: TrackedSection, id: u32) -> Result<(), ProgressError> {
        let list = match section {
            TrackedSection::Basics => &mut self.data.viewed_basics,
            TrackedSection::CareerStages => &mut self.data.viewed_career_stages,
            TrackedSection::Specialties => &mut self.data.viewed_specialties,
            TrackedSection::Operations => &mut self.data.viewed_operations,
            TrackedSection::Heroes => &mut self.data.expanded_heroes,
            TrackedSection::Pitches => &mut self.data.completed_pitches,
        };
        if !list.contains(&id) {
            list.push(id);
            self.store.save(&self.data)?;
        }
        Ok(())
    }

    pub fn increment_mentor_messages(&mut self) -> Result<u32, ProgressError> {
        self.data.mentor_messages += 1;
        self.store.save(&self.data)?;
        Ok(self.data.mentor_messages)
    }

    /// XP still needed to reach the next level, if any.
    pub fn xp_to_next_level(&self) -> Option<u32> {
        next_level(self.data.xp).map(|level| level.min_xp - self.data.xp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        Ledger::open(MemoryStore::new())
    }

    #[test]
    fn test_add_xp_and_level_up() {
        let mut ledger = ledger();
        let gain = ledger.add_xp(50).unwrap();
        assert_eq!(gain.new_xp, 50);
        assert!(!gain.leveled_up);

        let gain = ledger.add_xp(50).unwrap();
        assert_eq!(gain.new_xp, 100);
        assert!(gain.leveled_up);
        assert_eq!(gain.new_level.unwrap().name, "Associate");
    }

    #[test]
    fn test_unlock_awards_xp_once() {
        let mut ledger = ledger();
        let first = ledger.unlock(Achievement::QuizWhiz).unwrap();
        assert!(first.newly_unlocked);
        assert_eq!(first.xp_awarded, 100);
        assert_eq!(ledger.progress().xp, 100);

        let second = ledger.unlock(Achievement::QuizWhiz).unwrap();
        assert!(!second.newly_unlocked);
        assert_eq!(second.xp_awarded, 0);
        assert_eq!(ledger.progress().xp, 100);
    }

    #[test]
    fn test_champion_cascades_on_final_badge() {
        let mut ledger = ledger();
        let regular: Vec<Achievement> = Achievement::all()
            .iter()
            .copied()
            .filter(|a| *a != Achievement::BizquestChampion)
            .collect();

        for a in &regular[..regular.len() - 1] {
            let outcome = ledger.unlock(*a).unwrap();
            assert!(!outcome.champion_unlocked);
        }

        let last = ledger.unlock(*regular.last().unwrap()).unwrap();
        assert!(last.champion_unlocked);
        assert!(ledger.progress().has(Achievement::BizquestChampion));
        // Final badge XP plus the champion's own 200.
        assert_eq!(
            last.xp_awarded,
            regular.last().unwrap().info().xp + Achievement::BizquestChampion.info().xp
        );

        // Total XP is the sum of every badge in the catalog.
        let catalog_total: u32 = Achievement::all().iter().map(|a| a.info().xp).sum();
        assert_eq!(ledger.progress().xp, catalog_total);
    }

    #[test]
    fn test_record_startup_run_keeps_best() {
        let mut ledger = ledger();
        ledger.record_startup_run(300.0).unwrap();
        assert!(ledger.progress().startup_completed);
        assert_eq!(ledger.progress().startup_best_profit, 300.0);

        ledger.record_startup_run(150.0).unwrap();
        assert_eq!(ledger.progress().startup_best_profit, 300.0);

        ledger.record_startup_run(5200.5).unwrap();
        assert_eq!(ledger.progress().startup_best_profit, 5200.5);
    }

    #[test]
    fn test_mark_viewed_idempotent() {
        let mut ledger = ledger();
        ledger.mark_viewed(TrackedSection::Basics, 3).unwrap();
        ledger.mark_viewed(TrackedSection::Basics, 3).unwrap();
        ledger.mark_viewed(TrackedSection::Basics, 7).unwrap();
        assert_eq!(ledger.progress().viewed_basics, vec![3, 7]);
    }

    #[test]
    fn test_mentor_messages_count() {
        let mut ledger = ledger();
        for expected in 1..=5 {
            assert_eq!(ledger.increment_mentor_messages().unwrap(), expected);
        }
    }

    #[test]
    fn test_writes_reach_the_store() {
        let mut store = MemoryStore::new();
        {
            let mut ledger = Ledger::open(&mut store);
            ledger.add_xp(10).unwrap();
        }
        assert_eq!(store.load().xp, 10);
    }

    #[test]
    fn test_xp_to_next_level() {
        let mut ledger = ledger();
        assert_eq!(ledger.xp_to_next_level(), Some(100));
        ledger.add_xp(1500).unwrap();
        assert_eq!(ledger.xp_to_next_level(), None);
    }
}
