// src/main.rs

// demo driver: hits the limiter on a fixed cadence and prints each verdict

// dependencies
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use hit_limiter::HitLimiter;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Poll a hit limiter until it has blocked enough hits.
#[derive(Debug, Parser)]
#[command(name = "hit-limiter", version, about)]
struct Args {
    /// Hits allowed per window
    #[arg(long, default_value_t = 5)]
    limit: u64,

    /// Window length in seconds
    #[arg(long, default_value_t = 4)]
    window_secs: u64,

    /// Stop after this many blocked hits
    #[arg(long, default_value_t = 4)]
    blocked_limit: u64,

    /// Pause between hits in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let limiter = HitLimiter::new(args.limit, Duration::from_secs(args.window_secs))
        .context("failed to build hit limiter")?;
    info!(
        limit = args.limit,
        window_secs = args.window_secs,
        blocked_limit = args.blocked_limit,
        "starting hit loop"
    );

    let start = Instant::now();
    let mut blocked = 0;
    for hit in 1.. {
        let limited = limiter.try_acquire();
        let status = if limited {
            "blocked (rate limit reached)"
        } else {
            "allowed"
        };
        println!(
            "Hit {}: {} | elapsed time: {:.2} seconds",
            hit,
            status,
            start.elapsed().as_secs_f64()
        );

        if limited {
            blocked += 1;
        }
        if blocked >= args.blocked_limit {
            break;
        }

        thread::sleep(Duration::from_millis(args.interval_ms));
    }

    info!(blocked, "blocked limit reached, stopping");
    Ok(())
}
