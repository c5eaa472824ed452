//! # Observability & Tracing
//!
//! The [`setup_tracing`] function installs a `tracing-subscriber` formatter so the
//! library's structured events reach stderr. Demo output itself goes to stdout, so the
//! two streams can be separated.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable; nothing is logged when it is
//! unset. The compact format hides the module path (`with_target(false)`) and shows
//! spans inline.
//!
//! ```bash
//! # Session-level events: factories ready, recipes applied, showrooms furnished
//! RUST_LOG=info cargo run
//!
//! # Every item created and every feature applied
//! RUST_LOG=debug cargo run
//!
//! # Only the builder
//! RUST_LOG=pattern_recipe::car_builder=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Factories**: catalog initialization, factory construction, each `create`
//! - **Builders**: every applied or rejected feature, resets
//! - **Director**: one span per recipe, named after `construct`
//! - **Adapter / Logistics**: fit checks and delivery plans at `debug`
//!
//! With `RUST_LOG=debug` a recipe looks like:
//!
//! ```text
//! DEBUG construct{recipe=Basic}: Applied feature=Seats(4) size=1
//! DEBUG construct{recipe=Basic}: Applied feature=Engine("Oil") size=2
//!  INFO construct{recipe=Basic}: Recipe applied parts=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
