//! Library-wide default values.

/// HTTP defaults shared by all provider clients
pub mod http {
    use std::time::Duration;

    /// Default request timeout
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Default connection timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default user agent
    pub const USER_AGENT: &str = concat!("vidmai/", env!("CARGO_PKG_VERSION"));
}

/// Task polling defaults
pub mod polling {
    use std::time::Duration;

    /// Default interval between status queries
    pub const INTERVAL: Duration = Duration::from_secs(5);

    /// Default cap on status queries before giving up
    pub const MAX_ATTEMPTS: u32 = 120;
}
