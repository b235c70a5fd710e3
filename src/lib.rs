pub mod app;
pub mod body;
pub mod config;
pub mod init_config;
pub mod io;
pub mod profiler;
pub mod quadtree;
pub mod simulation;
pub mod utils;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
