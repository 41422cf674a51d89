use anyhow::{Context, Result};
use bnum::BUintD32;
use clap::{Parser, Subcommand, ValueEnum};
use compat::{Sleeper, ThreadSleeper, LIMITS};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use twiddling::{next_pow2, next_pow2_u64, prev_pow2, prev_pow2_u64, BitSet, BitStore};

#[derive(Parser)]
#[command(name = "bitsets", about = "Inspect fixed-width bit sets and power-of-two rounding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    #[value(name = "256")]
    W256,
}

#[derive(Subcommand)]
enum Commands {
    /// Round a value to its neighbouring powers of two
    Pow2 { value: u64 },
    /// Build a bit set from an index list and dump it
    Bits {
        #[arg(short, long, value_enum, default_value = "256")]
        width: Width,
        /// Indices and half-open ranges, e.g. "0, 3, 8..12"
        #[arg(short, long, default_value = "")]
        set: String,
        /// Cells per rendered row
        #[arg(short, long, default_value_t = 16)]
        row: u32,
    },
    /// Sleep for the given number of milliseconds
    Sleep { ms: u32 },
    /// Print the resolved platform limits
    Limits,
}

fn pow2(value: u64) -> String {
    match u32::try_from(value) {
        Ok(v) => format!("next={} prev={}", next_pow2(v), prev_pow2(v)),
        Err(_) => format!("next={} prev={}", next_pow2_u64(value), prev_pow2_u64(value)),
    }
}

fn show<S: BitStore>(set: &str, row: u32) -> Result<String> {
    // Scalar shapes mask indices with `BITS - 1`.
    compat::fatal_assert!(S::BITS.is_power_of_two());
    let bits: BitSet<S> =
        io::parse_bitset(set).with_context(|| format!("invalid bit list `{set}`"))?;
    debug!(capacity = S::BITS, count = bits.count(), "parsed bit set");

    let index = |i: Option<u32>| i.map_or_else(|| "-".to_string(), |i| i.to_string());
    Ok(format!(
        "{}count={} lsb={} msb={}",
        io::render(&bits, row),
        bits.count(),
        index(bits.lsb()),
        index(bits.msb())
    ))
}

fn sleep<S: Sleeper>(sleeper: S, ms: u32) {
    let start = Instant::now();
    sleeper.sleep_ms(ms);
    info!(requested_ms = ms, elapsed = ?start.elapsed(), "woke up");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Pow2 { value } => println!("{}", pow2(value)),
        Commands::Bits { width, set, row } => {
            anyhow::ensure!(row > 0, "row width must be positive");
            let text = match width {
                Width::W16 => show::<u16>(&set, row)?,
                Width::W32 => show::<u32>(&set, row)?,
                Width::W64 => show::<u64>(&set, row)?,
                Width::W256 => show::<BUintD32<8>>(&set, row)?,
            };
            println!("{text}");
        }
        Commands::Sleep { ms } => sleep(ThreadSleeper, ms),
        Commands::Limits => println!(
            "path_max={} scale_base={}",
            LIMITS.path_max, LIMITS.scale_base
        ),
    }
    Ok(())
}
