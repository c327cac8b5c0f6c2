//! Command-line driver: compare an H0 data file against an H1 data file.
//!
//! Each data file needs a `rules_<name>` companion next to it.
//!
//! Run with:
//!   cargo run --example analyze -- --input0 h0.txt --input1 h1.txt
//!   cargo run --example analyze -- --input0 h0.txt --input1 h1.txt --conf 0.9 --cards 30 --verbose

use std::path::PathBuf;

use cardgame_llr::analysis::{Analysis, AnalysisConfig, Hypothesis, DEFAULT_CARD_COUNT};
use cardgame_llr::hypothesis::DEFAULT_CONFIDENCE;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

#[derive(Parser)]
#[command(author, version, about = "Likelihood-ratio test of fair vs. rigged card game data")]
struct Cli {
    /// Data file simulated under H0
    #[arg(long, value_name = "FILE")]
    input0: PathBuf,

    /// Data file simulated under H1
    #[arg(long, value_name = "FILE")]
    input1: PathBuf,

    /// Confidence level, strictly between 0 and 1
    #[arg(long, value_name = "NUM", default_value_t = DEFAULT_CONFIDENCE)]
    conf: f64,

    /// Card count that fixes the win-count support (max wins = cards / 2)
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_CARD_COUNT)]
    cards: u32,

    /// Log every pipeline step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = AnalysisConfig::from_card_count(cli.cards, cli.conf)?;

    let null = Hypothesis::load(&cli.input0).wrap_err("loading H0 data")?;
    let alt = Hypothesis::load(&cli.input1).wrap_err("loading H1 data")?;

    let report = Analysis::run(&null, &alt, &config).wrap_err("running the likelihood-ratio test")?;

    println!(
        "{} sets; {} games / set; {} cards / game; H0: {}, H1: {} cheater cards",
        null.rules.set_count, null.rules.games_per_set, null.rules.card_count, null.rules.gimme_cards, alt.rules.gimme_cards
    );
    if let (Some(p0), Some(p1)) = (report.null_win_probability, report.alt_win_probability) {
        println!("round win probability: H0 = {}, H1 = {}", p0, p1);
    }
    println!("pmf H0 = {}", report.pmf_null);
    println!("pmf H1 = {}", report.pmf_alt);
    if let Some((lo, hi)) = report.llr_range() {
        println!(
            "LLR range = [{:.3}, {:.3}] over {} + {} sets",
            lo,
            hi,
            report.llr_null.len(),
            report.llr_alt.len()
        );
    }
    println!("{}", report.result);

    Ok(())
}
