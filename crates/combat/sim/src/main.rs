//! Headless duel simulator.
//!
//! Runs seeded automated duels through the full decision → roll → effect
//! pipeline and logs a summary. Run with: `cargo run -p combat-sim -- --help`

mod args;
mod duel;
mod tally;

use anyhow::Result;
use clap::Parser;
use combat_core::{DecisionEngine, PcgDice};

use crate::args::Args;
use crate::duel::Arena;
use crate::tally::Tally;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let content = args.load_content()?;
    let (left, right) = args.pick_fighters(&content.roster)?;

    tracing::info!(
        catalog = content.catalog.len(),
        rules = content.ladder.len(),
        left = %left.name,
        right = %right.name,
        duels = args.duels,
        seed = args.seed,
        "starting simulation"
    );

    let engine = DecisionEngine::new(&content.catalog, content.ladder.clone(), &content.config);
    let arena = Arena::new(engine, &content.catalog, &content.config, args.max_rounds);

    let mut tally = Tally::new([left.id, right.id]);
    for duel in 0..args.duels {
        let mut dice = PcgDice::seeded(args.seed.wrapping_add(u64::from(duel)));
        // Alternate the opening side so neither preset keeps the first move.
        let outcome = if duel % 2 == 0 {
            arena.duel([left, right], &mut dice)
        } else {
            arena.duel([right, left], &mut dice)
        };
        tally.record(&outcome);
    }

    tally.report(&left.name, &right.name);
    Ok(())
}
