use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use impact_linalg::{capability, storage};

    #[derive(Debug, Parser)]
    #[command(about = "Fixed-size vectors and matrices with compile-time SIMD dispatch", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Report the SIMD backend this build uses and how each vector type
        /// is stored
        Info,
        #[cfg(feature = "benchmark")]
        /// Time vector and matrix operations and compare aligned with
        /// unaligned storage
        Benchmark {
            /// Targets to run (all targets if none are given)
            #[arg(value_enum)]
            targets: Vec<impact_linalg::benchmark::Target>,

            /// Seconds to time each target for (every target is called at
            /// least once)
            #[arg(short, long, default_value_t = 0.1)]
            duration: f64,

            /// Seconds to run each target untimed before timing it
            #[arg(short, long, default_value_t = 0.0)]
            warmup: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Time vector and matrix operations (requires the `benchmark` feature)
        Benchmark,
    }

    pub fn main() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let cli = Cli::parse();

        match cli.command {
            Command::Info => {
                capability::log_capabilities();
                print_storage_layouts();
                Ok(())
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                targets,
                duration,
                warmup,
            } => benchmark::run(&targets, duration, warmup),
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }

    fn print_storage_layouts() {
        println!(
            "{:<8} {:>6} {:>9} {:>6} {:>6} {:>10} {:>9}",
            "element", "length", "aligned", "lanes", "size", "alignment", "register"
        );
        for layout in storage::storage_layouts() {
            println!(
                "{:<8} {:>6} {:>9} {:>6} {:>6} {:>10} {:>9}",
                layout.element,
                layout.length,
                layout.aligned,
                layout.lanes,
                layout.size,
                layout.alignment,
                layout.is_register
            );
        }
    }

    #[cfg(feature = "benchmark")]
    mod benchmark {
        use super::*;
        use anyhow::Context;
        use impact_linalg::benchmark::{self, Target};
        use std::time::Duration;

        pub fn run(targets: &[Target], duration: f64, warmup: f64) -> Result<()> {
            let duration = Duration::try_from_secs_f64(duration)
                .context("The benchmark duration must be a non-negative number of seconds")?;
            let warmup = Duration::try_from_secs_f64(warmup)
                .context("The warmup must be a non-negative number of seconds")?;
            let targets = if targets.is_empty() {
                Target::ALL
            } else {
                targets
            };

            let timings = benchmark::benchmark(targets, warmup, duration);

            println!("{:<40} {:>12} {:>14}", "target", "calls", "per call");
            for (target, timing) in &timings {
                println!(
                    "{:<40} {:>12} {:>14}",
                    target.name(),
                    timing.calls,
                    format!("{:.2?}", timing.per_call())
                );
            }

            let comparisons = benchmark::alignment_comparisons(&timings);
            if !comparisons.is_empty() {
                println!();
                println!("{:<40} {:>18}", "operation", "unaligned / aligned");
                for comparison in comparisons {
                    println!(
                        "{:<40} {:>18.2}",
                        comparison.operation,
                        comparison.unaligned_slowdown()
                    );
                }
            }
            Ok(())
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
