use crate::app::App;
use janken_core::{Hand, RoundResult};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    draw_hands(frame, root[1], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[2]);

    draw_result(frame, middle[0], app);
    draw_tallies(frame, middle[1], app);
    draw_events(frame, root[3], app);

    if app.show_help {
        draw_help_popup(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("{} | {}", app.t("game.title"), app.t("game.submit"));
    let extra = format!(
        "{}: {} | {}: {} | {}",
        app.t("game.language"),
        app.i18n.language_name(&app.locale).unwrap_or(&app.locale),
        app.t("game.seed"),
        app.seed,
        app.rounds_left_line()
    );
    let lines = vec![
        Line::from(title.bold()),
        Line::from(extra),
        Line::from(format!("{}: {}", app.t("game.status"), app.status_line)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.t("site.title"));
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_hands(frame: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    let enabled = app.controls_enabled();
    for (idx, hand) in Hand::ALL.iter().copied().enumerate() {
        let focused = idx == app.hand_cursor;
        let selected = app.selected == Some(hand);
        let marker = if selected { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if !enabled {
            style = style.fg(Color::DarkGray);
        } else if selected {
            style = style.fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        let block = pane_block(format!("{} {}", idx + 1, marker), focused && enabled);
        let paragraph = Paragraph::new(vec![
            Line::from(hand.glyph()),
            Line::from(app.t(hand.label_key())),
        ])
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
        frame.render_widget(paragraph, cells[idx]);
    }
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block(app.t("game.result").to_string(), false);
    let Some(outcome) = app.last_outcome else {
        frame.render_widget(
            Paragraph::new(app.t("game.choose_hand"))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    };
    let color = match outcome.result {
        RoundResult::Win => Color::Green,
        RoundResult::Lose => Color::Red,
        RoundResult::Draw => Color::Yellow,
    };
    let lines = vec![
        Line::from(format!(
            "{}: {}",
            app.t("game.you_played"),
            app.hand_label(outcome.user_hand)
        )),
        Line::from(format!(
            "{}: {}",
            app.t("game.system_played"),
            app.hand_label(outcome.system_hand)
        )),
        Line::from(app.t(outcome.result.label_key()).fg(color).bold()),
        Line::from(format!(
            "{}: {}",
            app.t("game.rounds_left"),
            outcome.rounds_remaining
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tallies(frame: &mut Frame, area: Rect, app: &App) {
    let (title, summary) = match app.summary() {
        Some(summary) => (app.t("game.over"), summary),
        None => (app.t("game.summary"), app.engine.standings()),
    };
    let mut lines: Vec<Line<'_>> = app
        .summary_lines(&summary)
        .into_iter()
        .map(Line::from)
        .collect();
    if app.summary().is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("n: {}", app.t("game.new_game")).bold()));
    }
    let block = pane_block(title.to_string(), app.summary().is_some());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = pane_block(app.t("game.events").to_string(), false);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 40, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(app.t("game.help.keys")),
        Line::from(""),
        Line::from(app.rounds_left_line()),
    ];
    let block = Block::default()
        .title(app.t("game.help"))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    block
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
