// ============================================================================
// Logging
// Subscriber setup for binaries and demos
// ============================================================================
//
// The library only emits `tracing` events:
// - debug: rejected unit tags, loaded configurations
// - info: process-wide registry changes
// - trace: scalar failures surfacing through a Dim operation
//
// Applications that already install a subscriber need nothing from here.

use tracing::Level;

/// Install a formatting subscriber at `INFO`.
///
/// Returns false if a global subscriber was already set.
pub fn init() -> bool {
    init_with_level(Level::INFO)
}

/// Install a formatting subscriber at `level`.
pub fn init_with_level(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}
