#![forbid(unsafe_code)]

//! Narration builders for the CoreKit demo binaries.
//!
//! Each demo is a self-contained program with printed output; none of
//! them share state or compose into a pipeline. The narration for each
//! demo is built here as a deterministic list of lines so the
//! integration tests can pin the exact output, and the binaries under
//! `src/bin/` only print.

pub mod empty_list_demo;
pub mod fill_demo;

/// Install the demo logging subscriber.
///
/// Filter comes from `RUST_LOG`; demos are quiet by default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
