//! `run_life` - Load boards, run them through a turn schedule, print each stop.
//!
//! **Usage:**
//! ```text
//! run_life board.in --schedule 283,40,2500
//! run_life --pattern glider --rows 10 --cols 10 --schedule 8 --print-every 1
//! run_life --config scenarios.toml
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use life::{random_life, CycleDetector, Life, Pattern, Position};
use tracing::{debug, info, Level};

mod config;

use config::{default_size, RunConfig, Scenario, Source};

/// Simulate Conway/Fredkin life boards and print them as text.
#[derive(Parser, Debug)]
#[command(name = "run_life", version)]
struct Args {
    /// Board file: row count, column count, then the rows.
    input: Option<PathBuf>,

    /// TOML file with `[[scenario]]` tables; replaces the other board options.
    #[arg(long, conflicts_with_all = ["input", "pattern", "random"])]
    config: Option<PathBuf>,

    /// Start from a named pattern instead of a file.
    #[arg(long, conflicts_with_all = ["input", "random"])]
    pattern: Option<String>,

    /// Start from a seeded random board instead of a file.
    #[arg(long, conflicts_with = "input")]
    random: Option<u32>,

    /// Board height for --pattern and --random.
    #[arg(long, default_value_t = default_size())]
    rows: usize,

    /// Board width for --pattern and --random.
    #[arg(long, default_value_t = default_size())]
    cols: usize,

    /// Turns to simulate between printed boards.
    #[arg(long, value_delimiter = ',', default_value = "1")]
    schedule: Vec<u32>,

    /// Also print every N turns inside each batch.
    #[arg(long)]
    print_every: Option<u32>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn scenarios(&self) -> Result<Vec<Scenario>> {
        if let Some(path) = &self.config {
            return Ok(RunConfig::load(path)?.scenarios);
        }

        let title = match (&self.input, &self.pattern, self.random) {
            (Some(path), _, _) => format!("Life {}", path.display()),
            (_, Some(name), _) => format!("Life {name} {}x{}", self.rows, self.cols),
            (_, _, Some(seed)) => format!("Life random({seed}) {}x{}", self.rows, self.cols),
            _ => anyhow::bail!("give a board file, --pattern, --random or --config"),
        };
        let scenario = Scenario {
            title,
            input: self.input.clone(),
            pattern: self.pattern.clone(),
            random: self.random,
            rows: self.rows,
            cols: self.cols,
            schedule: self.schedule.clone(),
            print_every: self.print_every,
        };
        scenario.validate()?;
        Ok(vec![scenario])
    }
}

fn load(source: &Source) -> Result<Life> {
    let life = match source {
        Source::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Life::parse(&text).with_context(|| format!("failed to parse {}", path.display()))?
        }
        Source::Pattern { name, rows, cols } => {
            let pattern = Pattern::find(name)
                .with_context(|| format!("unknown pattern {name:?}"))?;
            pattern.place(*rows, *cols, Position::default())?
        }
        Source::Random { seed, rows, cols } => random_life(*rows, *cols, *seed)?,
    };
    Ok(life)
}

fn run(scenario: &Scenario, out: &mut impl Write) -> Result<()> {
    info!(title = %scenario.title, "starting scenario");
    writeln!(out, "*** {} ***", scenario.title)?;

    let mut life = load(&scenario.source()?)?;
    let mut cycles = CycleDetector::new();
    cycles.observe(&life);
    write!(out, "{life}")?;

    for &batch in &scenario.schedule {
        let step = scenario.print_every.unwrap_or(batch).max(1);
        let mut remaining = batch;
        while remaining > 0 {
            let turns = step.min(remaining);
            life.simulate(turns)?;
            remaining -= turns;
            write!(out, "{life}")?;

            if let Some(period) = cycles.observe(&life) {
                debug!(generation = life.generation(), period, "board state repeated");
            }
        }
        // A zero-turn batch still prints the board
        if batch == 0 {
            write!(out, "{life}")?;
        }
    }

    info!(
        title = %scenario.title,
        generation = life.generation(),
        population = life.population(),
        "scenario finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for scenario in args.scenarios()? {
        run(&scenario, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
