//! Spell outcome and resistance report.
//!
//! Resolves one casting against a group of targets and prints the chances.
//! Without `--scenario` a built-in demo is used:
//!
//! ```bash
//! cargo run -p spellcast
//! cargo run -p spellcast -- --scenario party.json --json
//! ```

mod report;
mod scenario;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spell_core::{EffectType, FailClamp, ResistClamp};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use report::Report;
use scenario::{Scenario, ScenarioFile};

const DEFAULT_LOG_FILTER: &str = "spell_core=info,spellcast=info";

#[derive(Parser, Debug)]
#[command(name = "spellcast", about = "Spell failure and resistance report")]
struct Cli {
    /// Scenario file (JSON). Defaults to the built-in demo.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Override the scenario's power level
    #[arg(short, long)]
    power_level: Option<u32>,

    /// Override the scenario's effect type
    #[arg(long, value_enum)]
    effect_type: Option<EffectArg>,

    /// Treat the source item as unidentified
    #[arg(long)]
    unidentified: bool,

    /// How the combined fail chance is capped
    #[arg(long, value_enum)]
    fail_clamp: Option<FailClampArg>,

    /// Where target resistance is clamped
    #[arg(long, value_enum)]
    resist_clamp: Option<ResistClampArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EffectArg {
    Spell,
    Artifact,
    Thrown,
}

impl From<EffectArg> for EffectType {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::Spell => EffectType::Spell,
            EffectArg::Artifact => EffectType::Artifact,
            EffectArg::Thrown => EffectType::Thrown,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FailClampArg {
    Clamped,
    Unclamped,
}

impl From<FailClampArg> for FailClamp {
    fn from(arg: FailClampArg) -> Self {
        match arg {
            FailClampArg::Clamped => FailClamp::Clamped,
            FailClampArg::Unclamped => FailClamp::Unclamped,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ResistClampArg {
    PerStatus,
    Consolidated,
}

impl From<ResistClampArg> for ResistClamp {
    fn from(arg: ResistClampArg) -> Self {
        match arg {
            ResistClampArg::PerStatus => ResistClamp::PerStatus,
            ResistClampArg::Consolidated => ResistClamp::Consolidated,
        }
    }
}

impl Cli {
    /// Apply command line overrides on top of a scenario file.
    fn apply(&self, file: &mut ScenarioFile) {
        if let Some(power_level) = self.power_level {
            file.params.power_level = power_level;
        }
        if let Some(effect) = self.effect_type {
            file.params.effect_type = effect.into();
        }
        if self.unidentified {
            file.params.unidentified_item = true;
        }
        if let Some(clamp) = self.fail_clamp {
            file.config.fail_clamp = clamp.into();
        }
        if let Some(clamp) = self.resist_clamp {
            file.config.resist_clamp = clamp.into();
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut file = match &cli.scenario {
        Some(path) => ScenarioFile::load(path)?,
        None => {
            tracing::info!("No scenario given, using the built-in demo");
            ScenarioFile::demo()
        }
    };
    cli.apply(&mut file);

    let scenario = Scenario::try_from(&file)?;
    tracing::info!(
        caster = scenario.caster.name(),
        spell = scenario.spell.name(),
        targets = scenario.targets.len(),
        "Resolving scenario"
    );

    let report = Report::build(&scenario).context("Casting could not be resolved")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}
