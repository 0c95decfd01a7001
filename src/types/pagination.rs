//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::DEFAULT_PAGE_LIMIT;

/// Pagination query parameters shared by all list endpoints.
///
/// `skip`/`limit` follow the store's offset/limit semantics; the effective
/// limit is capped by the configured `PAGINATION_MAX_LIMIT` via [`clamped`].
///
/// [`clamped`]: PageParams::clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of records to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl PageParams {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Cap the limit at the configured maximum.
    pub fn clamped(self, max_limit: u64) -> Self {
        Self {
            skip: self.skip,
            limit: self.limit.min(max_limit),
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_caps_limit_at_maximum() {
        let page = PageParams::new(0, 500).clamped(100);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn clamped_keeps_limits_under_the_cap() {
        let page = PageParams::new(40, 25).clamped(100);
        assert_eq!(page.skip, 40);
        assert_eq!(page.limit, 25);
    }

    #[test]
    fn defaults_skip_nothing() {
        let page = PageParams::default();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
    }
}
