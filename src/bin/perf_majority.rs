use majority::gen_sequences::{gen_sequence, gen_sequence_with_majority};
use majority::utils::{Timings, type_of};
use majority::{Counters, find_majority};

use anyhow::{Context, ensure};
use clap::Parser;
use mem_dbg::{MemSize, SizeFlags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_N_RUNS: usize = 1;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Array size.
    n: usize,
    #[arg(short, long, default_value_t = DEFAULT_N_RUNS)]
    runs: usize,
    /// Smallest generated value (inclusive).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i32,
    /// Largest generated value (exclusive).
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i32,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Plant this value as the majority element.
    #[arg(short, long, allow_negative_numbers = true)]
    majority: Option<i32>,
    /// Print counters as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    ensure!(
        args.min < args.max,
        "empty value range [{}, {})",
        args.min,
        args.max
    );

    let n = args.n;
    let n_runs = args.runs.max(1);
    let range = args.min..args.max;

    let seq = match args.majority {
        Some(value) => gen_sequence_with_majority(n, value, range, args.seed),
        None => gen_sequence(n, range, args.seed),
    };
    tracing::info!(
        n,
        planted = ?args.majority,
        seed = ?args.seed,
        "generated input"
    );

    let mut counters = Counters::new();
    let mut t = Timings::new(n_runs, n);

    for run in 0..n_runs {
        t.start();
        let result = find_majority(&seq, &mut counters);
        let elapsed = t.stop();
        let result = result.with_context(|| format!("run {run} on an array of size {n}"))?;

        println!("Execution Time for n = {n}: {elapsed} ns");
        match result {
            Some(value) => println!("Result: {value}"),
            None => println!("Result: No majority"),
        }

        let report = counters.report();
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{report}");
        }

        counters.reset();
    }

    if let Some((t_min, t_max, t_avg)) = t.get() {
        println!(
            "MAJORITY: [input: {}, n: {}, input_bytes: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, avg_time_per_element (ns): {:.3}, num_runs: {}]",
            type_of(&seq),
            n,
            seq.mem_size(SizeFlags::default()),
            t_min,
            t_max,
            t_avg,
            t.per_element().unwrap_or_default(),
            t.n_runs()
        );
    }

    Ok(())
}
