//! Rendering of the dashboard from a `ViewState` snapshot.

use crate::{
    pagination::PagerControls,
    state::{ViewMode, ViewState},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};
use shared::domain::responses::CustomerResponse;

const CARD_HEIGHT: u16 = 7;
const CARDS_PER_ROW: usize = 3;

pub fn render(frame: &mut Frame, state: &ViewState, editing_search: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stat tiles
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Customers
            Constraint::Length(1), // Pager
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    render_stats(frame, state, chunks[0]);
    render_search(frame, state, editing_search, chunks[1]);
    render_customers(frame, state, chunks[2]);
    frame.render_widget(pager_line(state), chunks[3]);
    frame.render_widget(help_line(state, editing_search), chunks[4]);
}

fn render_stats(frame: &mut Frame, state: &ViewState, area: Rect) {
    let tiles: Vec<(&str, String)> = match (&state.statistics, &state.statistics_error) {
        (Some(stats), _) => vec![
            ("Customers", stats.total_customers.to_string()),
            ("Orders", stats.total_orders.to_string()),
            ("Items sold", stats.total_items_sold.to_string()),
            ("Avg items", format!("{:.2}", stats.average_items_per_order)),
            ("Delivery rate", stats.delivery_rate.clone()),
            ("Return rate", stats.return_rate.clone()),
        ],
        (None, Some(_)) => vec![("Statistics", "unavailable".to_string())],
        (None, None) => vec![("Statistics", "loading...".to_string())],
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()])
        .split(area);

    for ((label, value), column) in tiles.into_iter().zip(columns.iter()) {
        let tile = Paragraph::new(Span::styled(value, Style::default().fg(Color::White).bold()))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {label} "))
                    .title_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(tile, *column);
    }
}

fn render_search(frame: &mut Frame, state: &ViewState, editing: bool, area: Rect) {
    let border = if editing { Color::Yellow } else { Color::DarkGray };
    let mut text = vec![Span::raw(state.search.as_str())];
    if editing {
        text.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search name or email (/) "),
    );
    frame.render_widget(search, area);
}

fn render_customers(frame: &mut Frame, state: &ViewState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Customers ({}) ", state.view_mode.label()))
        .title_style(Style::default().fg(Color::Cyan).bold());

    if let Some(error) = &state.error {
        let lines = vec![
            Line::from(Span::styled(
                "Could not load customers",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(Span::styled(
                "press r to retry",
                Style::default().fg(Color::Yellow),
            )),
        ];
        let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(p, area);
        return;
    }

    if state.loading && state.customers.is_empty() {
        frame.render_widget(Paragraph::new("Loading customers...").block(block), area);
        return;
    }

    let visible = state.visible_customers();

    if state.no_matches() {
        let p = Paragraph::new(Span::styled(
            format!("No customers match \"{}\"", state.search),
            Style::default().fg(Color::Yellow),
        ))
        .block(block);
        frame.render_widget(p, area);
        return;
    }

    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No customers on this page").block(block),
            area,
        );
        return;
    }

    match state.view_mode {
        ViewMode::Table => render_table(frame, &visible, block, area),
        ViewMode::Cards => render_cards(frame, &visible, block, area),
    }
}

fn location(c: &CustomerResponse) -> String {
    [c.city.as_deref(), c.state.as_deref(), c.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

fn render_table(frame: &mut Frame, customers: &[&CustomerResponse], block: Block, area: Rect) {
    let header = Row::new(["ID", "Name", "Email", "Age", "Location", "Source", "Orders"])
        .style(Style::default().fg(Color::Yellow).bold());

    let rows = customers.iter().map(|c| {
        Row::new(vec![
            c.id.to_string(),
            c.full_name(),
            or_dash(c.email.as_deref()),
            c.age.map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
            location(c),
            or_dash(c.traffic_source.as_deref()),
            c.order_count.to_string(),
        ])
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(22),
        Constraint::Min(24),
        Constraint::Length(4),
        Constraint::Length(28),
        Constraint::Length(10),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

fn render_cards(frame: &mut Frame, customers: &[&CustomerResponse], block: Block, area: Rect) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows_that_fit = (inner.height / CARD_HEIGHT).max(1) as usize;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows_that_fit])
        .split(inner);

    for (row_area, chunk) in row_areas.iter().zip(customers.chunks(CARDS_PER_ROW)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, CARDS_PER_ROW as u32);
                CARDS_PER_ROW
            ])
            .split(*row_area);

        for (customer, column) in chunk.iter().zip(columns.iter()) {
            frame.render_widget(card(customer), *column);
        }
    }
}

fn card(c: &CustomerResponse) -> Paragraph<'static> {
    let label = Style::default().fg(Color::Gray);
    let age = c.age.map(|a| a.to_string()).unwrap_or_else(|| "-".into());

    let lines = vec![
        Line::from(or_dash(c.email.as_deref())),
        Line::from(vec![
            Span::styled("Age ", label),
            Span::raw(age),
            Span::styled("  Gender ", label),
            Span::raw(or_dash(c.gender.as_deref())),
        ]),
        Line::from(location(c)),
        Line::from(vec![
            Span::styled("Orders: ", label),
            Span::styled(c.order_count.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Source: ", label),
            Span::raw(or_dash(c.traffic_source.as_deref())),
        ]),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" #{} {} ", c.id, c.full_name()))
            .title_style(Style::default().fg(Color::Cyan).bold()),
    )
}

fn pager_line(state: &ViewState) -> Paragraph<'static> {
    let Some(pagination) = state.pagination else {
        return Paragraph::new("");
    };

    let pager = PagerControls::new(&pagination, state.loading);
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        "< Prev ",
        if pager.prev_enabled { enabled } else { disabled },
    )];

    for page in &pager.pages {
        if *page == pager.current {
            spans.push(Span::styled(
                format!(" [{page}] "),
                Style::default().fg(Color::Cyan).bold(),
            ));
        } else {
            spans.push(Span::styled(format!("  {page}  "), enabled));
        }
    }

    spans.push(Span::styled(
        " Next >",
        if pager.next_enabled { enabled } else { disabled },
    ));
    spans.push(Span::styled(
        format!(
            "   page {} of {} | {} customers",
            pagination.current_page, pagination.total_pages, pagination.total_items
        ),
        Style::default().fg(Color::Gray),
    ));

    Paragraph::new(Line::from(spans))
}

fn help_line(state: &ViewState, editing: bool) -> Paragraph<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);

    let keys: &[(&str, &str)] = if editing {
        &[("enter", " done  "), ("esc", " clear  ")]
    } else {
        &[
            ("q", " quit  "),
            ("n/p", " page  "),
            ("g/G", " first/last  "),
            ("v", " view  "),
            ("/", " search  "),
            ("r", " retry  "),
        ]
    };

    let mut spans: Vec<Span> = keys
        .iter()
        .flat_map(|(k, t)| [Span::styled(*k, key), Span::styled(*t, text)])
        .collect();

    if state.loading {
        spans.push(Span::styled("loading...", Style::default().fg(Color::Cyan)));
    }

    Paragraph::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardStore;
    use ratatui::backend::TestBackend;
    use shared::domain::{
        requests::PageRequest,
        responses::{CustomerListData, Pagination, StatisticsResponse},
    };

    fn customer(id: i64, first: &str, last: &str) -> CustomerResponse {
        CustomerResponse {
            id,
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: Some(format!("{}@example.com", first.to_lowercase())),
            age: Some(31),
            gender: Some("M".into()),
            city: Some("Lyon".into()),
            state: None,
            country: Some("France".into()),
            traffic_source: Some("Organic".into()),
            created_at: None,
            order_count: 4,
        }
    }

    fn loaded(page: i64) -> DashboardStore {
        let mut store = DashboardStore::new(10);
        let req = store.initial_request();
        store.apply_customers(
            req.generation,
            Ok(CustomerListData {
                customers: vec![customer(1, "Marie", "Curie"), customer(2, "Pierre", "Curie")],
                pagination: Pagination::new(&PageRequest::new(page, 10, 100), 25),
            }),
        );
        store
    }

    fn draw(state: &ViewState, editing: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, state, editing)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn table_lists_customers_with_headers() {
        let screen = draw(&loaded(1).snapshot(), false);

        assert!(screen.contains("Email"));
        assert!(screen.contains("Marie Curie"));
        assert!(screen.contains("pierre@example.com"));
        assert!(screen.contains("Lyon, France"));
    }

    #[test]
    fn cards_show_the_same_customers() {
        let mut store = loaded(1);
        store.toggle_view();
        let screen = draw(&store.snapshot(), false);

        assert!(screen.contains("Customers (cards)"));
        assert!(screen.contains("#1 Marie Curie"));
        assert!(screen.contains("#2 Pierre Curie"));
        assert!(screen.contains("Orders: 4"));
    }

    #[test]
    fn empty_search_result_is_called_out() {
        let mut store = loaded(1);
        store.set_search("zzz");
        let screen = draw(&store.snapshot(), true);

        assert!(screen.contains("No customers match \"zzz\""));
        assert!(screen.contains("page 1 of 3 | 25 customers"));
    }

    #[test]
    fn failure_offers_retry() {
        let mut store = loaded(1);
        let req = store.next_page().unwrap();
        store.apply_customers(
            req.generation,
            Err(crate::client::ClientError::Rejected("database down".into())),
        );
        let screen = draw(&store.snapshot(), false);

        assert!(screen.contains("Could not load customers"));
        assert!(screen.contains("database down"));
        assert!(screen.contains("press r to retry"));
    }

    #[test]
    fn pager_marks_current_page() {
        let screen = draw(&loaded(2).snapshot(), false);

        assert!(screen.contains("[2]"));
        assert!(screen.contains("< Prev"));
        assert!(screen.contains("Next >"));
    }

    #[test]
    fn stat_tiles_show_formatted_rates() {
        let mut store = loaded(1);
        store.apply_statistics(Ok(StatisticsResponse {
            total_customers: 25,
            total_orders: 4,
            average_items_per_order: 2.5,
            total_items_sold: 10,
            delivered_orders: 1,
            returned_orders: 1,
            traffic_sources: 2,
            delivery_rate: "25.00%".into(),
            return_rate: "25.00%".into(),
        }));
        let screen = draw(&store.snapshot(), false);

        assert!(screen.contains("Delivery rate"));
        assert!(screen.contains("25.00%"));
        assert!(screen.contains("2.50"));
    }

    #[test]
    fn missing_statistics_do_not_hide_customers() {
        let mut store = loaded(1);
        store.apply_statistics(Err(crate::client::ClientError::Rejected("nope".into())));
        let screen = draw(&store.snapshot(), false);

        assert!(screen.contains("unavailable"));
        assert!(screen.contains("Marie Curie"));
    }

    #[test]
    fn first_load_shows_progress() {
        let mut store = DashboardStore::new(10);
        store.initial_request();
        let screen = draw(&store.snapshot(), false);

        assert!(screen.contains("Loading customers..."));
    }
}
