//! Domain-level constants.

// =============================================================================
// Upstream API
// =============================================================================

/// Default base URL for the upstream user API (`{base}/{username}`)
pub const DEFAULT_USER_API_URL: &str = "https://api.github.com/users";

/// Default prefix for repository links (`{prefix}{full_name}`)
pub const DEFAULT_REPO_URL_BASE: &str = "https://api.github.com/repos/";

/// Path segment of the repository list endpoint (`{user_api}/{username}/repos`)
pub const REPOS_PATH_SEGMENT: &str = "repos";

// =============================================================================
// Cache
// =============================================================================

/// Name of the user detail cache (used in logs)
pub const USER_CACHE_NAME: &str = "userCache";

/// Default user cache TTL in seconds (10 minutes)
pub const DEFAULT_USER_CACHE_TTL_SECONDS: u64 = 600;

/// Default maximum number of cached user views
pub const DEFAULT_USER_CACHE_MAX_CAPACITY: u64 = 10_000;

// =============================================================================
// Formatting
// =============================================================================

/// RFC 1123 date format, always rendered in UTC
pub const RFC_1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
