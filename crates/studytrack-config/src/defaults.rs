//! Default value functions for serde deserialization.
//!
//! These functions forward to constants defined in `studytrack_core::defaults`.

use studytrack_core::defaults;

/// Generate default value functions that forward to studytrack_core::defaults constants.
macro_rules! default_fns {
    // For Copy types (integers, bool, etc.)
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                defaults::$const_name
            }
        )*
    };
}

/// Generate default value functions that return String from &str constants.
macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                defaults::$const_name.to_string()
            }
        )*
    };
}

default_fns! {
    default_db_max_connections     => DEFAULT_DB_MAX_CONNECTIONS: u32,
    default_db_connect_timeout_secs => DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64,
    default_session_secure         => DEFAULT_SESSION_SECURE: bool,
    default_search_max_results     => DEFAULT_SEARCH_MAX_RESULTS: usize,
}

default_string_fns! {
    default_listen          => DEFAULT_LISTEN,
    default_database_url    => DEFAULT_DATABASE_URL,
    default_session_cookie  => DEFAULT_SESSION_COOKIE,
    default_search_endpoint => DEFAULT_SEARCH_ENDPOINT,
}
