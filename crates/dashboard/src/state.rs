use crate::client::ClientError;
use shared::domain::responses::{
    CustomerListData, CustomerResponse, Pagination, StatisticsResponse,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Cards => "cards",
        }
    }
}

/// A customer fetch to issue, tagged so its response can be matched back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerRequest {
    pub generation: u64,
    pub page: i64,
    pub limit: i64,
}

/// Everything the dashboard renders. Never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub customers: Vec<CustomerResponse>,
    pub pagination: Option<Pagination>,
    pub statistics: Option<StatisticsResponse>,
    pub statistics_error: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub requested_page: i64,
    pub page_size: i64,
    pub view_mode: ViewMode,
    pub generation: u64,
}

impl ViewState {
    /// Loaded customers whose `"first last"` or email contains the search
    /// term, ignoring case.
    pub fn visible_customers(&self) -> Vec<&CustomerResponse> {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return self.customers.iter().collect();
        }

        self.customers
            .iter()
            .filter(|c| {
                let name = format!(
                    "{} {}",
                    c.first_name.as_deref().unwrap_or_default(),
                    c.last_name.as_deref().unwrap_or_default()
                );
                let email = c.email.as_deref().unwrap_or_default();

                name.to_lowercase().contains(&needle) || email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn no_matches(&self) -> bool {
        !self.search.is_empty() && self.visible_customers().is_empty()
    }
}

/// Owns the current `ViewState` and swaps in a new snapshot on every
/// transition.
#[derive(Debug, Clone)]
pub struct DashboardStore {
    state: Arc<ViewState>,
}

impl DashboardStore {
    pub fn new(page_size: i64) -> Self {
        Self {
            state: Arc::new(ViewState {
                requested_page: 1,
                page_size: page_size.max(1),
                ..Default::default()
            }),
        }
    }

    pub fn snapshot(&self) -> Arc<ViewState> {
        self.state.clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut ViewState)) {
        let mut next = ViewState::clone(&self.state);
        f(&mut next);
        self.state = Arc::new(next);
    }

    fn issue(&mut self, page: i64) -> CustomerRequest {
        self.update(|s| {
            s.generation += 1;
            s.requested_page = page;
            s.loading = true;
            s.error = None;
        });

        CustomerRequest {
            generation: self.state.generation,
            page,
            limit: self.state.page_size,
        }
    }

    pub fn initial_request(&mut self) -> CustomerRequest {
        self.issue(1)
    }

    /// `None` when `page` lies outside `[1, total_pages]`, nothing has been
    /// loaded yet, or a fetch is already in flight.
    pub fn begin_page_request(&mut self, page: i64) -> Option<CustomerRequest> {
        let total_pages = self.state.pagination.as_ref()?.total_pages;

        if self.state.loading || page < 1 || page > total_pages {
            return None;
        }

        Some(self.issue(page))
    }

    pub fn next_page(&mut self) -> Option<CustomerRequest> {
        let current = self.state.pagination.as_ref()?.current_page;
        self.begin_page_request(current + 1)
    }

    pub fn prev_page(&mut self) -> Option<CustomerRequest> {
        let current = self.state.pagination.as_ref()?.current_page;
        self.begin_page_request(current - 1)
    }

    pub fn last_page(&mut self) -> Option<CustomerRequest> {
        let total = self.state.pagination.as_ref()?.total_pages;
        self.begin_page_request(total)
    }

    /// Re-issues the last requested page after a failure.
    pub fn retry(&mut self) -> Option<CustomerRequest> {
        if self.state.error.is_none() || self.state.loading {
            return None;
        }

        let page = self.state.requested_page;
        Some(self.issue(page))
    }

    /// Applies a customer response. Returns `false` and leaves the state
    /// untouched when a newer request has been issued since.
    pub fn apply_customers(
        &mut self,
        generation: u64,
        result: Result<CustomerListData, ClientError>,
    ) -> bool {
        if generation != self.state.generation {
            return false;
        }

        self.update(|s| {
            s.loading = false;
            match result {
                Ok(data) => {
                    s.customers = data.customers;
                    s.pagination = Some(data.pagination);
                    s.error = None;
                }
                Err(e) => {
                    s.customers.clear();
                    s.error = Some(e.to_string());
                }
            }
        });

        true
    }

    pub fn apply_statistics(&mut self, result: Result<StatisticsResponse, ClientError>) {
        self.update(|s| match result {
            Ok(stats) => {
                s.statistics = Some(stats);
                s.statistics_error = None;
            }
            Err(e) => s.statistics_error = Some(e.to_string()),
        });
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.update(|s| s.search = term);
    }

    pub fn toggle_view(&mut self) {
        self.update(|s| s.view_mode = s.view_mode.toggled());
    }
}
