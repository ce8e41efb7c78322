//! BizQuest terminal client.
//!
//! Plays one five-month startup session and prints the monthly reports and
//! final title. Decisions come from a fixed neutral strategy, or are
//! sampled randomly with `--random`. Progress (XP, badges, best profit)
//! persists to a JSON file when `--progress-file` is given.
//!
//! Usage:
//!   cargo run -p bizquest-cli -- --business lemonade --name "Zesty"
//!   cargo run -p bizquest-cli -- --business youtube --random --progress-file progress.json

use bizquest_logic::business::BusinessKind;
use bizquest_logic::decisions::{
    MarketingOption, PricingTier, QualityLevel, RoundDecisions, StaffingChoice,
};
use bizquest_logic::session::{SessionPhase, StartupSession, TOTAL_MONTHS};
use bizquest_progress::{
    Achievement, JsonFileStore, Ledger, MemoryStore, ProgressStore,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// XP awarded per completed month, matching the original game.
const XP_PER_MONTH: u32 = 10;

/// Profit needed for the Profit Master badge.
const PROFIT_MASTER_THRESHOLD: f64 = 5000.0;

struct Options {
    business: BusinessKind,
    name: String,
    random: bool,
    seed: Option<u64>,
    progress_file: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        business: BusinessKind::Lemonade,
        name: "My Startup".to_string(),
        random: false,
        seed: None,
        progress_file: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--business" => {
                let id = args.next().ok_or("--business needs a value")?;
                options.business = BusinessKind::from_id(&id).ok_or_else(|| {
                    let ids: Vec<&str> =
                        BusinessKind::all().iter().map(|k| k.info().id).collect();
                    format!("unknown business '{}', expected one of: {}", id, ids.join(", "))
                })?;
            }
            "--name" => {
                options.name = args.next().ok_or("--name needs a value")?;
            }
            "--random" => options.random = true,
            "--seed" => {
                let raw = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(raw.parse().map_err(|_| format!("bad seed '{}'", raw))?);
            }
            "--progress-file" => {
                options.progress_file = Some(args.next().ok_or("--progress-file needs a value")?);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(options)
}

fn sample_decisions(rng: &mut StdRng) -> RoundDecisions {
    RoundDecisions {
        pricing: PricingTier::all()[rng.gen_range(0..PricingTier::all().len())],
        marketing: MarketingOption::all()[rng.gen_range(0..MarketingOption::all().len())],
        quality: QualityLevel::all()[rng.gen_range(0..QualityLevel::all().len())],
        staffing: StaffingChoice::all()[rng.gen_range(0..StaffingChoice::all().len())],
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let options = match parse_args() {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let store: Box<dyn ProgressStore> = match &options.progress_file {
        Some(path) => Box::new(JsonFileStore::new(path.clone())),
        None => Box::new(MemoryStore::new()),
    };
    let mut ledger = Ledger::open(store);

    let business = options.business.info();
    let mut session = StartupSession::new(options.business, &options.name)?;
    let mut rng = StdRng::seed_from_u64(
        options.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        }),
    );

    println!("{} {} — \"{}\"", business.emoji, business.name, session.name());
    println!("{}", business.description);
    println!("Starting budget: ${:.2}\n", session.budget());

    while session.phase() == SessionPhase::Playing {
        let decisions = if options.random {
            sample_decisions(&mut rng)
        } else {
            RoundDecisions::default()
        };

        let month = session.current_month();
        let result = session.play_month(&decisions)?;
        info!(month, ?decisions, "month simulated");

        println!("Month {}/{}", month, TOTAL_MONTHS);
        println!(
            "  {:?} pricing, {:?} marketing, {:?} quality, {:?} staffing",
            decisions.pricing, decisions.marketing, decisions.quality, decisions.staffing
        );
        println!("  customers: {}", result.customers);
        println!("  revenue:   ${:.2}", result.revenue);
        println!("  expenses:  ${:.2}", result.expenses);
        println!("  profit:    ${:.2}", result.profit);
        println!("  satisfaction: {:.0}/100", result.satisfaction);
        println!("  budget:    ${:.2}\n", session.budget());

        ledger.add_xp(XP_PER_MONTH)?;
    }

    let summary = session.summary()?;
    println!("=== Final Results ===");
    println!("Total profit:        ${:.2}", summary.total_profit);
    println!("Avg satisfaction:    {:.0}/100", summary.average_satisfaction);
    println!("Final budget:        ${:.2}", summary.final_budget);
    println!(
        "{} {}  ({} star{})",
        summary.title.emoji(),
        summary.title.label(),
        summary.stars,
        if summary.stars == 1 { "" } else { "s" }
    );

    // Ledger updates, mirroring the original end-of-game flow.
    let previous_best = ledger.progress().startup_best_profit;
    ledger.record_startup_run(summary.total_profit)?;
    if summary.total_profit > previous_best {
        println!("New best profit!");
    }

    let founder = ledger.unlock(Achievement::StartupFounder)?;
    announce_unlock(&founder, Achievement::StartupFounder);
    if summary.total_profit >= PROFIT_MASTER_THRESHOLD {
        let master = ledger.unlock(Achievement::ProfitMaster)?;
        announce_unlock(&master, Achievement::ProfitMaster);
    }

    let level = ledger.level();
    println!(
        "\nProgress: {} XP — {} {}",
        ledger.progress().xp,
        level.emoji,
        level.name
    );
    if let Some(needed) = ledger.xp_to_next_level() {
        println!("{} XP to the next level", needed);
    }

    Ok(())
}

fn announce_unlock(outcome: &bizquest_progress::UnlockOutcome, achievement: Achievement) {
    if outcome.newly_unlocked {
        let info = achievement.info();
        println!("{} Achievement unlocked: {} (+{} XP)", info.emoji, info.name, outcome.xp_awarded);
        if outcome.champion_unlocked {
            let champion = Achievement::BizquestChampion.info();
            println!("{} Achievement unlocked: {}", champion.emoji, champion.name);
        }
    }
}
