//! Library-wide constants
//!
//! Hosts, API version, header names and defaults live here so the URL
//! builder, the fetcher and the configuration layer agree on them.

/// FIRST API production host
pub const PRODUCTION_URL: &str = "https://frc-api.firstinspires.org";

/// FIRST API staging host, used for system testing
pub const STAGING_URL: &str = "https://frc-staging-api.firstinspires.org";

/// API version path component
pub const FIRST_API_VERSION: &str = "v2.0";

/// First season served by the v2.0 API
pub const MIN_SEASON: i32 = 2015;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `url` value recorded on envelopes produced from local fixtures
pub const LOCAL_DATA_URL: &str = "local";

/// Upper bound on a teams listing's `pageTotal`; larger values are treated as a malformed payload
pub const MAX_TEAM_PAGES: u32 = 1000;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default tracing directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "frc_api=info";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "frc_api.log";

/// Request and response header names
pub mod headers {
    /// Only-changed-records conditional header understood by the FIRST API
    pub const ONLY_MODIFIED_SINCE: &str = "FMS-OnlyModifiedSince";
}

/// Environment variable names
pub mod env_vars {
    /// Override for the production host
    pub const PRODUCTION_URL: &str = "FRC_API_PRODUCTION_URL";

    /// Override for the staging host
    pub const STAGING_URL: &str = "FRC_API_STAGING_URL";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FRC_API_HTTP_TIMEOUT";

    /// Override for the local fixture directory
    pub const FIXTURE_DIR: &str = "FRC_API_FIXTURE_DIR";

    /// Override for the log file path
    pub const LOG_FILE: &str = "FRC_API_LOG_FILE";
}
