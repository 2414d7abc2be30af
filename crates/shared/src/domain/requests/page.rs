use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw paging parameters as they arrive on the query string.
///
/// Both values are kept as text so that malformed input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10, clamped to the configured maximum)
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, limit: i64, max_limit: i64) -> Self {
        let page = if page > 0 { page } else { DEFAULT_PAGE };
        let limit = if limit > 0 { limit } else { DEFAULT_LIMIT };

        Self {
            page,
            limit: limit.min(max_limit.max(1)),
        }
    }

    pub fn from_params(params: &PageParams, max_limit: i64) -> Self {
        Self::new(
            parse_or(params.page.as_deref(), DEFAULT_PAGE),
            parse_or(params.limit.as_deref(), DEFAULT_LIMIT),
            max_limit,
        )
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn params(page: Option<&str>, limit: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[rstest]
    #[case(None, None, 1, 10)]
    #[case(Some("3"), Some("25"), 3, 25)]
    #[case(Some("abc"), Some("x"), 1, 10)]
    #[case(Some("0"), Some("-5"), 1, 10)]
    #[case(Some("2"), Some("5000"), 2, 100)]
    fn params_are_normalised(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] expected_page: i64,
        #[case] expected_limit: i64,
    ) {
        let req = PageRequest::from_params(&params(page, limit), 100);

        assert_eq!(req.page, expected_page);
        assert_eq!(req.limit, expected_limit);
    }

    #[test]
    fn offset_follows_page_arithmetic() {
        assert_eq!(PageRequest::new(1, 10, 100).offset(), 0);
        assert_eq!(PageRequest::new(4, 25, 100).offset(), 75);
    }

    #[test]
    fn offset_saturates_for_absurd_pages() {
        let req = PageRequest::new(i64::MAX, 100, 100);

        assert_eq!(req.offset(), i64::MAX);
    }
}
