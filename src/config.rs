/// Application-level constants
pub const APP_NAME: &str = "Medtrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frequency reported when no known phrase matches, and dosage stored when
/// none was given.
pub const DEFAULT_FREQUENCY: &str = "as directed";
pub const DEFAULT_DOSAGE: &str = "as directed";

/// Longest medication name accepted into a record.
pub const MAX_NAME_LENGTH: usize = 200;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "medtrack=debug,medtrack_lib=debug"
    } else {
        "medtrack=info,medtrack_lib=info"
    }
}
