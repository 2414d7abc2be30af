use crate::domain::requests::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub per_page: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(page: &PageRequest, total_items: i64) -> Self {
        let total_items = total_items.max(0);
        let limit = page.limit.max(1);
        let total_pages = total_items / limit + i64::from(total_items % limit != 0);

        Self {
            current_page: page.page,
            total_pages,
            total_items,
            per_page: limit,
            has_next_page: page.page < total_pages,
            has_prev_page: page.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 10, 0, 0, false, false)]
    #[case(1, 10, 10, 1, false, false)]
    #[case(1, 10, 11, 2, true, false)]
    #[case(2, 10, 11, 2, false, true)]
    #[case(3, 7, 100, 15, true, true)]
    #[case(99, 10, 25, 3, false, true)]
    fn metadata_follows_page_arithmetic(
        #[case] page: i64,
        #[case] limit: i64,
        #[case] total: i64,
        #[case] total_pages: i64,
        #[case] has_next: bool,
        #[case] has_prev: bool,
    ) {
        let pagination = Pagination::new(&PageRequest::new(page, limit, 100), total);

        assert_eq!(pagination.current_page, page);
        assert_eq!(pagination.per_page, limit);
        assert_eq!(pagination.total_items, total);
        assert_eq!(pagination.total_pages, total_pages);
        assert_eq!(pagination.has_next_page, has_next);
        assert_eq!(pagination.has_prev_page, has_prev);
    }

    #[test]
    fn total_pages_is_the_ceiling_for_every_limit() {
        for limit in 1..=30 {
            for total in 0..=200 {
                let pagination = Pagination::new(&PageRequest::new(1, limit, 100), total);
                let expected = (total + limit - 1) / limit;
                assert_eq!(pagination.total_pages, expected, "total={total} limit={limit}");
            }
        }
    }
}
