//! Running the benchmark functions under `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a `criterion` target function calling the benchmark function of
/// the same name in the given module.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name($crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                c,
                stringify!($group),
                stringify!($name),
            ));
        }
    };
}

/// Benchmarks a closure as one function of a `criterion` benchmark group.
#[allow(missing_debug_implementations)]
pub struct CriterionFunctionBenchmarker<'a> {
    c: &'a mut Criterion,
    group: &'static str,
    id: &'static str,
}

impl<'a> CriterionFunctionBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, group: &'static str, id: &'static str) -> Self {
        Self { c, group, id }
    }
}

impl Benchmarker for CriterionFunctionBenchmarker<'_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        let mut benchmark_group = self.c.benchmark_group(self.group);
        benchmark_group.bench_function(self.id, |b| b.iter(&mut f));
        benchmark_group.finish();
    }
}

/// The `criterion` configuration shared by the benchmark targets.
pub fn config() -> Criterion {
    Criterion::default().noise_threshold(0.03)
}
