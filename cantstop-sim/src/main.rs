mod odds;
mod trace;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use cantstop_game::{run_trial, run_trial_observed};
use odds::{OddsTally, RunSummary};
use trace::{TurnPrinter, pause};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Colored console summary
    Console,
    /// Pretty-printed JSON summary
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "cantstop-sim", version = "0.1.0")]
#[command(about = "Monte Carlo odds of capping the 6-7-8 columns in Can't Stop in one go")]
struct Args {
    /// Single-step trials, printing dice, options and the chosen move
    #[arg(short, long)]
    verbose: bool,

    /// Number of trials to run
    #[arg(long, default_value_t = 10_000_000)]
    trials: u64,

    /// Seed for the random stream, decimal or 0x-hex; random when omitted
    #[arg(long)]
    seed: Option<String>,

    /// Print the running odds line every this many trials (0 disables)
    #[arg(long, default_value_t = 1000)]
    progress_interval: u64,

    /// Summary report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the summary instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();

    let seed = resolve_seed(args.seed.as_deref())?;
    println!("Seed: {seed} ({seed:#x})");
    log::info!(
        "running {} trials, seed {seed:#x}, progress every {} trials",
        args.trials,
        args.progress_interval
    );

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let started = Instant::now();
    let tally = if args.verbose {
        run_verbose(args.trials, &mut rng)
    } else {
        run_batch(args.trials, args.progress_interval, &mut rng)
    };

    let summary = RunSummary::new(seed, &tally, started.elapsed());
    write_summary(&args, &summary)?;
    Ok(())
}

fn announce_banner() {
    println!("{}", "🎲 Can't Stop 6-7-8 Capping Odds".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn resolve_seed(token: Option<&str>) -> Result<u64> {
    match token {
        Some(token) => parse_seed_token(token),
        None => Ok(rand::random()),
    }
}

fn parse_seed_token(token: &str) -> Result<u64> {
    let trimmed = token.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex seed: {token}"));
    }
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    bail!("Unrecognized seed: {token}")
}

/// Silent run: tally outcomes and print the running odds line on the
/// progress cadence. The cadence counts all trials, ignored ones included.
fn run_batch<R: Rng>(trials: u64, progress_interval: u64, rng: &mut R) -> OddsTally {
    let mut tally = OddsTally::new();
    for i in 0..trials {
        tally.record(run_trial(rng));
        if progress_interval > 0 && i % progress_interval == 0 && tally.attempts() > 0 {
            println!("{}", tally.odds_line());
        }
    }
    tally
}

/// Stepping run: trace every turn, report each trial's outcome and the
/// running odds, and wait for Enter between trials.
fn run_verbose<R: Rng>(trials: u64, rng: &mut R) -> OddsTally {
    let mut tally = OddsTally::new();
    let mut printer = TurnPrinter::new(true);
    for _ in 0..trials {
        println!("-----------");
        let outcome = run_trial_observed(rng, &mut printer);
        tally.record(outcome);
        println!("Result: {outcome}");
        if tally.attempts() > 0 {
            println!("{}", tally.odds_line());
        }
        pause("Press anything to run again ");
    }
    tally
}

fn write_summary(args: &Args, summary: &RunSummary) -> Result<()> {
    let mut target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(summary)
                .context("failed to serialize the run summary")?;
            writeln!(target, "{json}")?;
        }
        ReportFormat::Console => write_console_summary(&mut target, summary)?,
    }
    target.flush_inner()?;
    Ok(())
}

fn write_console_summary(out: &mut OutputTarget, summary: &RunSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Capping Odds Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=======================".cyan())?;
    writeln!(out, "Seed: {} ({:#x})", summary.seed, summary.seed)?;
    writeln!(
        out,
        "Trials: {} ({} attempts, {} ignored)",
        summary.trials, summary.attempts, summary.ignores
    )?;
    writeln!(out, "Busts: {}", summary.busts.to_string().red())?;
    writeln!(out, "Successes: {}", summary.successes.to_string().green())?;
    writeln!(out, "Odds: {} ± {}", summary.success_ratio, summary.margin)?;
    writeln!(out, "Elapsed: {:?}", summary.elapsed)?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
