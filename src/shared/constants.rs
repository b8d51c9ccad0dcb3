/// Maximum photo size accepted with a report (5MB)
pub const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_CHARS: u64 = 300;

/// Characters of the description shown in report lists
pub const DESCRIPTION_EXCERPT_CHARS: usize = 70;

/// Collection name reports are pushed to when a store is configured
pub const REPORTS_COLLECTION: &str = "denuncias";

// =============================================================================
// SESSION CONSTANTS
// =============================================================================

/// Cookie carrying the session identifier
pub const SESSION_COOKIE: &str = "cg_session";

/// Header alternative to the cookie, for API clients
pub const SESSION_HEADER: &str = "x-session-id";
