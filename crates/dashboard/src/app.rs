//! Terminal event loop: keys become actions, actions become state
//! transitions and fetches, fetch results flow back over a channel.

use crate::{
    client::{ClientError, DynReportApi},
    state::{CustomerRequest, DashboardStore},
    ui,
};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use shared::domain::responses::{CustomerListData, StatisticsResponse};
use std::{
    io::{self, stdout},
    time::Duration,
};
use tokio::{
    runtime::Handle,
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
};
use tracing::{info, warn};

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    ToggleView,
    Retry,
    StartSearch,
    SearchChar(char),
    SearchBackspace,
    FinishSearch,
    ClearSearch,
}

/// Maps a key press to an action. While the search box is focused every
/// printable key is text.
pub fn action_for(key: KeyEvent, editing_search: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if editing_search {
        return match key.code {
            KeyCode::Enter => Some(Action::FinishSearch),
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),
        KeyCode::Char('v') => Some(Action::ToggleView),
        KeyCode::Char('r') => Some(Action::Retry),
        KeyCode::Char('/') => Some(Action::StartSearch),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Fetch(CustomerRequest),
}

#[derive(Debug)]
pub enum FetchOutcome {
    Customers {
        generation: u64,
        result: Result<CustomerListData, ClientError>,
    },
    Statistics(Result<StatisticsResponse, ClientError>),
}

/// Input handling over the store, free of terminal and network concerns.
#[derive(Debug)]
pub struct Dashboard {
    pub store: DashboardStore,
    pub editing_search: bool,
}

impl Dashboard {
    pub fn new(page_size: i64) -> Self {
        Self {
            store: DashboardStore::new(page_size),
            editing_search: false,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        let fetch = |req: Option<CustomerRequest>| req.map_or(Effect::None, Effect::Fetch);

        match action {
            Action::Quit => Effect::Quit,
            Action::NextPage => fetch(self.store.next_page()),
            Action::PrevPage => fetch(self.store.prev_page()),
            Action::FirstPage => fetch(self.store.begin_page_request(1)),
            Action::LastPage => fetch(self.store.last_page()),
            Action::Retry => fetch(self.store.retry()),
            Action::ToggleView => {
                self.store.toggle_view();
                Effect::None
            }
            Action::StartSearch => {
                self.editing_search = true;
                Effect::None
            }
            Action::FinishSearch => {
                self.editing_search = false;
                Effect::None
            }
            Action::ClearSearch => {
                self.editing_search = false;
                self.store.set_search("");
                Effect::None
            }
            Action::SearchChar(c) => {
                let mut term = self.store.snapshot().search.clone();
                term.push(c);
                self.store.set_search(term);
                Effect::None
            }
            Action::SearchBackspace => {
                let mut term = self.store.snapshot().search.clone();
                term.pop();
                self.store.set_search(term);
                Effect::None
            }
        }
    }

    pub fn receive(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Customers { generation, result } => {
                if !self.store.apply_customers(generation, result) {
                    warn!("⏭️ Discarded stale customer page (generation {generation})");
                }
            }
            FetchOutcome::Statistics(result) => self.store.apply_statistics(result),
        }
    }
}

pub struct App {
    dashboard: Dashboard,
    api: DynReportApi,
    runtime: Handle,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
}

impl App {
    pub fn new(api: DynReportApi, page_size: i64, runtime: Handle) -> Self {
        let (tx, rx) = unbounded_channel();

        Self {
            dashboard: Dashboard::new(page_size),
            api,
            runtime,
            tx,
            rx,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        let request = self.dashboard.store.initial_request();
        self.spawn_customers(request);
        self.spawn_statistics();

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;

        result
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            while let Ok(outcome) = self.rx.try_recv() {
                self.dashboard.receive(outcome);
            }

            let state = self.dashboard.store.snapshot();
            let editing = self.dashboard.editing_search;
            terminal.draw(|frame| ui::render(frame, &state, editing))?;

            if !event::poll(TICK)? {
                continue;
            }

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = action_for(key, editing)
            {
                match self.dashboard.dispatch(action) {
                    Effect::Quit => {
                        info!("👋 Dashboard closed");
                        return Ok(());
                    }
                    Effect::Fetch(request) => self.spawn_customers(request),
                    Effect::None => {}
                }
            }
        }
    }

    fn spawn_customers(&self, request: CustomerRequest) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = api.fetch_customers(request.page, request.limit).await;
            // The receiver is gone only after the UI has exited.
            let _ = tx.send(FetchOutcome::Customers {
                generation: request.generation,
                result,
            });
        });
    }

    fn spawn_statistics(&self) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = api.fetch_statistics().await;
            let _ = tx.send(FetchOutcome::Statistics(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use shared::domain::{requests::PageRequest, responses::Pagination};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page(number: i64) -> CustomerListData {
        CustomerListData {
            customers: Vec::new(),
            pagination: Pagination::new(&PageRequest::new(number, 10, 100), 45),
        }
    }

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new(10);
        let req = dashboard.store.initial_request();
        dashboard.receive(FetchOutcome::Customers {
            generation: req.generation,
            result: Ok(page(1)),
        });
        dashboard
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Some(Action::Quit))]
    #[case(KeyCode::Esc, Some(Action::Quit))]
    #[case(KeyCode::Char('n'), Some(Action::NextPage))]
    #[case(KeyCode::Right, Some(Action::NextPage))]
    #[case(KeyCode::Left, Some(Action::PrevPage))]
    #[case(KeyCode::Char('G'), Some(Action::LastPage))]
    #[case(KeyCode::Char('v'), Some(Action::ToggleView))]
    #[case(KeyCode::Char('/'), Some(Action::StartSearch))]
    #[case(KeyCode::Char('x'), None)]
    fn browsing_keys(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        assert_eq!(action_for(press(code), false), expected);
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Some(Action::SearchChar('q')))]
    #[case(KeyCode::Esc, Some(Action::ClearSearch))]
    #[case(KeyCode::Enter, Some(Action::FinishSearch))]
    #[case(KeyCode::Backspace, Some(Action::SearchBackspace))]
    fn search_keys_are_text(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        assert_eq!(action_for(press(code), true), expected);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(action_for(key, true), Some(Action::Quit));
        assert_eq!(action_for(key, false), Some(Action::Quit));
    }

    #[test]
    fn paging_issues_fetches_within_range() {
        let mut dashboard = loaded();

        assert_eq!(dashboard.dispatch(Action::PrevPage), Effect::None);

        match dashboard.dispatch(Action::LastPage) {
            Effect::Fetch(req) => assert_eq!(req.page, 5),
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn typing_filters_without_fetching() {
        let mut dashboard = loaded();
        let generation = dashboard.store.snapshot().generation;

        dashboard.dispatch(Action::StartSearch);
        for c in "ada".chars() {
            assert_eq!(dashboard.dispatch(Action::SearchChar(c)), Effect::None);
        }
        dashboard.dispatch(Action::SearchBackspace);

        assert_eq!(dashboard.store.snapshot().search, "ad");
        assert_eq!(dashboard.store.snapshot().generation, generation);

        dashboard.dispatch(Action::ClearSearch);
        assert!(!dashboard.editing_search);
        assert!(dashboard.store.snapshot().search.is_empty());
    }

    #[test]
    fn late_page_is_dropped() {
        let mut dashboard = loaded();

        let Effect::Fetch(first) = dashboard.dispatch(Action::NextPage) else {
            panic!("expected a fetch");
        };
        dashboard.receive(FetchOutcome::Customers {
            generation: first.generation,
            result: Err(ClientError::Decode("truncated".into())),
        });
        let Effect::Fetch(second) = dashboard.dispatch(Action::Retry) else {
            panic!("expected a retry");
        };

        dashboard.receive(FetchOutcome::Customers {
            generation: first.generation,
            result: Ok(page(4)),
        });
        assert!(dashboard.store.snapshot().loading);

        dashboard.receive(FetchOutcome::Customers {
            generation: second.generation,
            result: Ok(page(2)),
        });
        let state = dashboard.store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.pagination.map(|p| p.current_page), Some(2));
    }
}
