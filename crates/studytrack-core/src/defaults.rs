//! Default configuration values.
//!
//! Centralized default constants for use across all crates.

// ============================================================================
// Server Defaults
// ============================================================================

/// Default HTTP listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

// ============================================================================
// Database Defaults
// ============================================================================

/// Default database URL. The literal `"memory"` selects the in-memory stores.
/// `mode=rwc` creates the SQLite file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:studytrack.db?mode=rwc";
/// Default maximum pooled connections.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
/// Default database connect timeout in seconds.
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Session Defaults
// ============================================================================

/// Default session cookie name.
pub const DEFAULT_SESSION_COOKIE: &str = "studytrack.sid";
/// Default Secure attribute on the session cookie.
pub const DEFAULT_SESSION_SECURE: bool = false;

// ============================================================================
// Resource Lookup Defaults
// ============================================================================

/// Default external search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";
/// Default cap on returned resource links.
pub const DEFAULT_SEARCH_MAX_RESULTS: usize = 5;
