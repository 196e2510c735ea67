//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor loop
//! tags its events with an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the final store size
//! - **Requests**: `Create`, `Get`, `List`, `Update`, `Delete`, `Action` at `debug`, with payloads
//! - **Outcomes**: `info` on success, `warn` with the error on rejection
//! - **Client calls**: one span per client method (`#[instrument]`)
//! - **Notifications**: queued, dropped, delivered
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run                         # outcomes only
//! RUST_LOG=debug cargo run                        # plus payloads
//! RUST_LOG=storefront::framework=debug cargo run  # just the actor loops
//! ```
//!
//! A rejected order at `info` looks like:
//!
//! ```text
//! INFO place_order: Created entity_type="User" id=user_1 size=1
//! WARN place_order: Action failed entity_type="Item" id=item_1 error=Entity error: Not enough stock for item_1: requested 2, available 1
//! WARN place_order: Create failed entity_type="Order" error=Entity error: Not enough stock for item_1: requested 2, available 1
//! ```

/// Initializes the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
