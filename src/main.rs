//! logit-primitives driver
//!
//! Runs one softmax + cross-entropy forward pass and prints the result
//! record as pretty JSON on stdout. With no arguments it uses the built-in
//! toy example; the `smoke` binary depends on that.
//!
//! Run with:
//!   cargo run --bin logit-primitives
//!   cargo run --bin logit-primitives -- --logits=2,-1,0.5 --target 2

use std::process;

use clap::Parser;
use logit_primitives::{forward, logging, tokenize, vocab_size, DemoConfig, ResultRecord};

#[derive(Parser, Debug)]
#[command(name = "logit-primitives", about = "Softmax and cross-entropy on toy logits", version)]
struct Cli {
    /// JSON file with `logits`, `target_index` and `text`
    #[arg(long)]
    config: Option<String>,

    /// Comma-separated logits, e.g. `1.2,-0.3,0.7` (empty for none)
    #[arg(long, value_parser = parse_logits, allow_hyphen_values = true)]
    logits: Option<Logits>,

    /// Index of the correct class
    #[arg(long)]
    target: Option<usize>,

    /// Sample text whose distinct tokens are reported as `vocab_size`
    #[arg(long)]
    text: Option<String>,
}

#[derive(Debug, Clone)]
struct Logits(Vec<f64>);

fn parse_logits(s: &str) -> Result<Logits, String> {
    if s.trim().is_empty() {
        return Ok(Logits(Vec::new()));
    }
    s.split(',')
        .map(|x| x.trim().parse::<f64>().map_err(|e| format!("invalid logit `{}`: {e}", x.trim())))
        .collect::<Result<Vec<_>, _>>()
        .map(Logits)
}

fn resolve_config(cli: Cli) -> anyhow::Result<DemoConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => DemoConfig::load_json(path)?,
        None => DemoConfig::default(),
    };
    if let Some(Logits(logits)) = cli.logits {
        config.logits = logits;
    }
    if let Some(target) = cli.target {
        config.target_index = target;
    }
    if let Some(text) = cli.text {
        config.text = text;
    }
    // `f64::from_str` accepts `inf` and `NaN`.
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    tracing::debug!(?config, "running forward pass");

    let out = forward(&config.logits, config.target_index)?;
    let record = ResultRecord::new(&out, vocab_size(tokenize(&config.text)));
    println!("{}", record.to_json_pretty()?);

    tracing::info!(loss = record.loss, sum_probs = record.sum_probs, "wrote result record");
    Ok(())
}

fn main() {
    logging::init("warn");
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}
