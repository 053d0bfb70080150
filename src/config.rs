/// Application-level constants
pub const APP_NAME: &str = "labnarrative";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default narrative language for the command-line tool ("en" or "hi").
pub const LANGUAGE_ENV: &str = "LABNARRATIVE_LANGUAGE";

pub const DEFAULT_LANGUAGE: &str = "en";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("{}=info,warn", APP_NAME)
}
