//! Command-line arguments and the non-interactive output modes

use crate::config::{Config, MAX_VALUE, MIN_VALUE, NODE_COUNT, PLAY_INTERVAL_MS};
use crate::data::{parse_values, random_elements};
use crate::errors::Result;
use crate::model::Element;
use crate::trace::StepTrace;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sortty",
    version,
    about = "Step through bubble, quick and merge sort in the terminal"
)]
pub struct Cli {
    /// Algorithm to visualize: bubble, quick or merge
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: String,

    /// Values to sort, e.g. "5,3,4,1". Random data is generated when omitted.
    #[arg(long)]
    pub values: Option<String>,

    /// Number of random elements
    #[arg(long, default_value_t = NODE_COUNT)]
    pub count: usize,

    /// Smallest random value
    #[arg(long, default_value_t = MIN_VALUE, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest random value
    #[arg(long, default_value_t = MAX_VALUE, allow_negative_numbers = true)]
    pub max: i64,

    /// Seed for reproducible random data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between steps while playing, in milliseconds
    #[arg(long = "interval-ms", default_value_t = PLAY_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Print every step as text instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Check the generated trace and exit
    #[arg(long)]
    pub verify: bool,

    /// Append log events to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        let config = Config {
            node_count: self.count,
            min_value: self.min,
            max_value: self.max,
            play_interval: Duration::from_millis(self.interval_ms),
        };
        config.validate()?;
        Ok(config)
    }

    /// The input elements: parsed from `--values`, or random otherwise
    pub fn elements(&self, config: &Config) -> Result<Vec<Element>> {
        if let Some(values) = &self.values {
            return parse_values(values);
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        random_elements(config, &mut rng)
    }
}

/// Write one line per step: index, code line, array and a short description
pub fn print_trace<W: Write>(trace: &StepTrace, out: &mut W) -> Result<()> {
    let listing = trace.algorithm().pseudocode();
    writeln!(out, "{} ({} steps)", trace.algorithm(), trace.len())?;

    for (index, step) in trace.steps().iter().enumerate() {
        let values: Vec<String> = step.data.iter().map(|e| e.value.to_string()).collect();
        let line = step
            .code_line
            .and_then(|l| listing.get(l))
            .map_or("", |text| text.trim());
        writeln!(
            out,
            "{:>4}  [{}]  {}  | {}",
            index,
            values.join(", "),
            step.describe(),
            line
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::config::MAX_NODE_COUNT;
    use crate::errors::SortError;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sortty"]);
        assert_eq!(cli.algorithm, "bubble");
        assert_eq!(cli.count, NODE_COUNT);
        assert_eq!(cli.config().unwrap(), Config::default());
    }

    #[test]
    fn test_values_override_random_data() {
        let cli = Cli::parse_from(["sortty", "-a", "merge", "--values", "4,2,9"]);
        let elements = cli.elements(&cli.config().unwrap()).unwrap();
        assert_eq!(crate::model::values_of(&elements), vec![4, 2, 9]);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let cli = Cli::parse_from(["sortty", "--seed", "9", "--min", "-5", "--max", "5"]);
        let config = cli.config().unwrap();
        let a = cli.elements(&config).unwrap();
        let b = cli.elements(&config).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|e| (-5..=5).contains(&e.value)));
    }

    #[test]
    fn test_values_longer_than_cap_rejected() {
        let values: Vec<String> = (0..=MAX_NODE_COUNT as i64).map(|v| v.to_string()).collect();
        let cli = Cli::parse_from(["sortty", "--values", values.join(",").as_str()]);
        assert_eq!(values.len(), MAX_NODE_COUNT + 1);
        match cli.elements(&cli.config().unwrap()) {
            Err(SortError::InvalidConfig { message }) => assert!(message.contains("exceeds")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        let cli = Cli::parse_from(["sortty", "--min", "50", "--max", "10"]);
        assert!(cli.config().is_err());
    }

    #[test]
    fn test_print_trace() {
        let trace = Algorithm::Bubble
            .generate(&Element::from_values(&[2, 1]))
            .unwrap();
        let mut out = Vec::new();
        print_trace(&trace, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Bubble Sort"));
        assert!(text.contains("compare 2 and 1"));
        assert_eq!(text.lines().count(), trace.len() + 1);
    }
}
