//! Benchmarking of the vector and matrix primitives.

#[cfg(feature = "criterion")]
pub mod criterion;

pub mod benchmarks;

use std::{
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};

/// Runs a closure repeatedly and measures it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// How many times a target was called during its timed window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    pub calls: u64,
    pub elapsed: Duration,
}

/// Calls the closure in batches of doubling size until the duration has
/// passed and writes the result to the given [`Timing`]. An untimed warmup
/// with the same loop runs first. The closure is always called at least once.
#[derive(Debug)]
pub struct TimingBenchmarker<'a> {
    warmup: Duration,
    duration: Duration,
    timing: &'a mut Timing,
}

/// The timings of an `*_aligned` target and its `*_unaligned` counterpart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignmentComparison {
    /// Target name without the alignment suffix.
    pub operation: &'static str,
    pub aligned: Timing,
    pub unaligned: Timing,
}

const MAX_BATCH: u64 = 1 << 16;

impl Timing {
    /// Mean time per call, or zero if nothing was timed.
    pub fn per_call(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.elapsed.div_f64(self.calls as f64)
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} calls in {:.2?} ({:.2?} per call)",
            self.calls,
            self.elapsed,
            self.per_call()
        )
    }
}

impl<'a> TimingBenchmarker<'a> {
    pub fn new(warmup: Duration, duration: Duration, timing: &'a mut Timing) -> Self {
        Self {
            warmup,
            duration,
            timing,
        }
    }
}

impl Benchmarker for TimingBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        if !self.warmup.is_zero() {
            run_for(self.warmup, f);
        }
        *self.timing = run_for(self.duration, f);
    }
}

fn run_for<T>(duration: Duration, f: &mut impl FnMut() -> T) -> Timing {
    let start = Instant::now();
    let mut calls = 0;
    let mut batch = 1;
    loop {
        for _ in 0..batch {
            black_box(f());
        }
        calls += batch;

        let elapsed = start.elapsed();
        if elapsed >= duration {
            return Timing { calls, elapsed };
        }
        batch = (batch * 2).min(MAX_BATCH);
    }
}

impl AlignmentComparison {
    /// How many times longer a call to the unaligned variant takes.
    pub fn unaligned_slowdown(&self) -> f64 {
        self.unaligned.per_call().as_secs_f64() / self.aligned.per_call().as_secs_f64()
    }
}

/// Defines an enum with one variant per benchmark function, named after the
/// module and the function.
macro_rules! define_targets {
    (
        $name:ident,
        $benchmarks_mod:path,
        $(
            $module:ident => {
                $($func:ident),* $(,)?
            }
        ),* $(,)?
    ) => {
        ::pastey::paste! {
            #[allow(clippy::enum_variant_names)]
            #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
            pub enum $name {
                $(
                    $( [<$module:camel $func:camel>] ),*
                ),*
            }

            impl $name {
                pub const ALL: &'static [Self] = &[
                    $( $( Self::[<$module:camel $func:camel>], )* )*
                ];

                /// The benchmark function path, e.g. `vector::add_vector3_aligned`.
                pub fn name(&self) -> &'static str {
                    match self {
                        $(
                            $( Self::[<$module:camel $func:camel>] => concat!(stringify!($module), "::", stringify!($func)), )*
                        )*
                    }
                }

                fn execute(&self, benchmarker: impl Benchmarker) {
                    match self {
                        $(
                            $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                        )*
                    }
                }
            }
        }
    };
}

define_targets! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        align_vector3,
        unalign_vector3,
        add_vector3_aligned,
        add_vector3_unaligned,
        dot_vector3_aligned,
        dot_vector3_unaligned,
        cross_vector3_aligned,
        cross_vector3_unaligned,
        normalize_vector3_aligned,
        normalize_vector3_unaligned,
        add_vector4_aligned,
        add_vector4_unaligned,
        dot_dvector4_aligned,
        dot_dvector4_unaligned,
        add_long_vector4_aligned,
        add_long_vector4_unaligned,
    },
    matrix => {
        align_matrix4,
        unalign_matrix4,
        mul_matrix4_aligned,
        mul_matrix4_unaligned,
        transform_vector4_aligned,
        transform_vector4_unaligned,
        determinant_matrix4_aligned,
        determinant_matrix4_unaligned,
        inverse_matrix3_aligned,
        inverse_matrix3_unaligned,
        inverse_matrix4_aligned,
        inverse_matrix4_unaligned,
        inverse_dmatrix4_aligned,
        inverse_dmatrix4_unaligned,
    },
}

/// Runs each target for `duration` after an untimed `warmup` and returns
/// the timings in the order of `targets`.
pub fn benchmark(targets: &[Target], warmup: Duration, duration: Duration) -> Vec<(Target, Timing)> {
    log::info!(
        "Benchmarking {} targets with the {} backend",
        targets.len(),
        crate::capability::TIER.name()
    );

    targets
        .iter()
        .map(|&target| {
            let mut timing = Timing::default();
            target.execute(TimingBenchmarker::new(warmup, duration, &mut timing));
            log::debug!("{}: {timing}", target.name());
            (target, timing)
        })
        .collect()
}

/// Pairs every `*_aligned` timing with the timing of its `*_unaligned`
/// counterpart. Targets without a timed counterpart are skipped.
pub fn alignment_comparisons(timings: &[(Target, Timing)]) -> Vec<AlignmentComparison> {
    timings
        .iter()
        .filter_map(|&(target, aligned)| {
            let operation = target.name().strip_suffix("_aligned")?;
            let (_, unaligned) = timings.iter().find(|(other, _)| {
                other
                    .name()
                    .strip_suffix("_unaligned")
                    .is_some_and(|other_operation| other_operation == operation)
            })?;
            Some(AlignmentComparison {
                operation,
                aligned,
                unaligned: *unaligned,
            })
        })
        .collect()
}
