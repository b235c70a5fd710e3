use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Scoped profiler recording cumulative time and call count per section.
pub struct Profiler {
    pub sections: HashMap<&'static str, Section>,
}

#[derive(Clone, Copy, Default)]
pub struct Section {
    pub total: Duration,
    pub calls: u64,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        let elapsed = guard.start.elapsed();
        let section = self.sections.entry(guard.name).or_default();
        section.total += elapsed;
        section.calls += 1;
    }

    pub fn report_sorted(&self) -> Vec<(&'static str, Section)> {
        let mut v: Vec<_> = self.sections.iter().map(|(n, s)| (*n, *s)).collect();
        v.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        v
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn print_and_clear(&mut self) {
        for (name, section) in self.report_sorted() {
            println!(
                "{:<16} {:>10?} over {} calls",
                name, section.total, section.calls
            );
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. The guard updates the global profiler on drop.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard {
        name,
        start: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Profile a scope only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
