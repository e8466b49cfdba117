// config.rs - Scenario files for the driver

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Where a scenario's starting board comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Pattern { name: String, rows: usize, cols: usize },
    Random { seed: u32, rows: usize, cols: usize },
}

/// One titled run: load a board, then simulate and print batch by batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub title: String,
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub random: Option<u32>,
    #[serde(default = "default_size")]
    pub rows: usize,
    #[serde(default = "default_size")]
    pub cols: usize,
    #[serde(default = "default_schedule")]
    pub schedule: Vec<u32>,
    /// Print every N turns inside a batch instead of only at its end.
    #[serde(default)]
    pub print_every: Option<u32>,
}

/// A scenario file: any number of `[[scenario]]` tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

pub fn default_size() -> usize {
    20
}

pub fn default_schedule() -> Vec<u32> {
    vec![1]
}

impl Scenario {
    pub fn source(&self) -> Result<Source> {
        match (&self.input, &self.pattern, self.random) {
            (Some(path), None, None) => Ok(Source::File(path.clone())),
            (None, Some(name), None) => Ok(Source::Pattern {
                name: name.clone(),
                rows: self.rows,
                cols: self.cols,
            }),
            (None, None, Some(seed)) => Ok(Source::Random { seed, rows: self.rows, cols: self.cols }),
            (None, None, None) => bail!("scenario {:?} needs an input, pattern or random seed", self.title),
            _ => bail!("scenario {:?} names more than one board source", self.title),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.schedule.is_empty() {
            bail!("scenario {:?} has an empty schedule", self.title);
        }
        if self.print_every == Some(0) {
            bail!("scenario {:?} has print_every = 0", self.title);
        }
        self.source().map(drop)
    }

    /// Input paths are relative to the scenario file's directory.
    fn resolve(&mut self, base: &Path) {
        if let Some(path) = &mut self.input {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl RunConfig {
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid scenario file")?;
        if config.scenarios.is_empty() {
            bail!("scenario file lists no scenarios");
        }
        for scenario in &config.scenarios {
            scenario.validate()?;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        if let Some(base) = path.parent() {
            for scenario in &mut config.scenarios {
                scenario.resolve(base);
            }
        }
        Ok(config)
    }
}
