use shared::domain::responses::Pagination;

pub const MAX_PAGE_BUTTONS: i64 = 5;

/// Up to `MAX_PAGE_BUTTONS` page numbers centered on `current`, clamped to
/// `[1, total_pages]`.
pub fn page_window(current: i64, total_pages: i64) -> Vec<i64> {
    if total_pages < 1 {
        return Vec::new();
    }

    let span = MAX_PAGE_BUTTONS.min(total_pages);
    let current = current.clamp(1, total_pages);
    let start = (current - MAX_PAGE_BUTTONS / 2).clamp(1, total_pages - span + 1);

    (start..start + span).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    pub pages: Vec<i64>,
    pub current: i64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PagerControls {
    pub fn new(pagination: &Pagination, loading: bool) -> Self {
        Self {
            pages: page_window(pagination.current_page, pagination.total_pages),
            current: pagination.current_page,
            prev_enabled: pagination.has_prev_page && !loading,
            next_enabled: pagination.has_next_page && !loading,
        }
    }
}
