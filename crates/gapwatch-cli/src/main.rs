// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `gapwatch`: solve generated knapsack instances under an adaptive
//! gap-stagnation stopping rule.
//!
//! ```text
//! gapwatch knapsack --items 10000 --seed 0 --stagnation-limit 15 --gap-epsilon 1e-4
//! ```
//!
//! Progress rows, stop notices and engine details go through `log`; set
//! `RUST_LOG=debug` for more detail.

use clap::{Args, Parser, Subcommand};
use gapwatch_knapsack::{instance::KnapsackInstance, solver::KnapsackSolver};
use gapwatch_search::{
    monitor::{
        composite::CompositeMonitor,
        gap_limit::GapLimitMonitor,
        log::LogMonitor,
        stagnation::{GapStagnationMonitor, StagnationConfig},
        time_limit::TimeLimitMonitor,
    },
    result::TerminationReason,
};
use std::time::Duration;

/// Number of selected item indices echoed in the summary.
const PREVIEW_ITEMS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "gapwatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a random 0/1 knapsack instance and solve it.
    Knapsack(KnapsackArgs),
}

#[derive(Debug, Args)]
struct KnapsackArgs {
    /// Number of items to generate.
    #[arg(long, default_value_t = 10_000)]
    items: usize,

    /// Seed of the instance generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Seconds without significant gap change before stopping.
    #[arg(long, default_value_t = StagnationConfig::DEFAULT_STAGNATION_LIMIT_SECONDS)]
    stagnation_limit: f64,

    /// Smallest gap change that counts as progress.
    #[arg(long, default_value_t = StagnationConfig::DEFAULT_GAP_CHANGE_EPSILON)]
    gap_epsilon: f64,

    /// Stop once the relative gap is at most this value.
    #[arg(long)]
    mip_gap: Option<f64>,

    /// Stop after this many seconds.
    #[arg(long)]
    time_limit: Option<f64>,

    /// Log a progress row every this many seconds.
    #[arg(long)]
    log_interval: Option<f64>,

    /// Report progress whenever `nodes & mask == 0`.
    #[arg(long, default_value_t = KnapsackSolver::DEFAULT_REPORT_MASK)]
    report_mask: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Knapsack(args) => run_knapsack(&args),
    }
}

fn run_knapsack(args: &KnapsackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = StagnationConfig::builder()
        .gap_change_epsilon(args.gap_epsilon)
        .stagnation_limit_seconds(args.stagnation_limit)
        .build()?;

    let mut monitor = CompositeMonitor::with_capacity(4);
    monitor.add_monitor(GapStagnationMonitor::new(config));
    if let Some(target) = args.mip_gap {
        monitor.add_monitor(GapLimitMonitor::new(target)?);
    }
    if let Some(seconds) = args.time_limit {
        monitor.add_monitor(TimeLimitMonitor::new(Duration::try_from_secs_f64(seconds)?));
    }
    if let Some(seconds) = args.log_interval {
        monitor.add_monitor(LogMonitor::new(Duration::try_from_secs_f64(seconds)?));
    }

    let instance = KnapsackInstance::generate(args.items, args.seed)?;
    log::info!("{}", instance);
    log::info!("Monitors: {}", monitor);

    let mut solver = KnapsackSolver::new(&instance).with_report_mask(args.report_mask);
    let result = solver.solve(&mut monitor);
    let outcome = result.outcome();

    match outcome.termination_reason() {
        TerminationReason::OptimalityProven => println!("\nOptimal solution found"),
        TerminationReason::Aborted(reason) => {
            println!("\nSolution process interrupted by monitor: {}", reason)
        }
        TerminationReason::InfeasibilityProven => println!("\nNo feasible solution exists"),
    }

    let Some(solution) = result.solution() else {
        println!("No solution found");
        return Ok(());
    };

    println!("Best objective: {:.2}", solution.objective());
    if let Some(gap) = outcome.final_gap() {
        println!("Final gap: {}", gap);
    }
    println!(
        "Solution time: {:.1} seconds",
        outcome.statistics().runtime.as_secs_f64()
    );

    let preview: Vec<usize> = solution
        .selected_items()
        .take(PREVIEW_ITEMS)
        .map(|item| item.get())
        .collect();
    println!("\nNumber of items selected: {}", solution.num_selected());
    println!("First few selected items: {:?}...", preview);
    println!("\nTotal weight: {:.2}", solution.total_weight());
    println!("Capacity: {:.2}", solution.capacity());
    println!(
        "Capacity utilization: {:.1}%",
        solution.utilisation() * 100.0
    );
    log::debug!("{}", outcome.statistics());

    Ok(())
}
