use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::core::app::App;
use crate::core::constants::INPUT_PLACEHOLDER;

const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const SEND_HINT: &str = "[ Send ⏎ ]";

/// Rows available to the message list for a terminal of the given height.
pub fn message_viewport_height(term_height: u16) -> u16 {
    // The list block draws a border on each side.
    term_height.saturating_sub(HEADER_HEIGHT + INPUT_HEIGHT + 2)
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.ui.theme.background_color)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let header = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.session.title),
        theme.header_style,
    )))
    .style(theme.header_style)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.header_style),
    );
    f.render_widget(header, area);
}

fn render_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(app.ui.theme.border_style);
    let inner = block.inner(area);

    let layout = app.ui.prewrap.layout(
        app.store.messages(),
        &app.session,
        &app.ui.theme,
        inner.width,
    );
    let line_count = layout.line_count();
    let lines = layout.lines.clone();
    let offset = app
        .ui
        .scroll
        .follow(app.store.len(), line_count, inner.height);

    let list = Paragraph::new(lines)
        .block(block)
        .scroll((offset, 0));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style)
        .title_top(Line::from(Span::styled(SEND_HINT, theme.send_hint_style)).right_aligned());
    let inner = block.inner(area);

    let input = app.ui.get_input_text();
    let cursor_width = app.ui.input_cursor_display_width();
    let inner_width = usize::from(inner.width);
    let horizontal_scroll = cursor_width.saturating_sub(inner_width.saturating_sub(1));

    let paragraph = if input.is_empty() {
        Paragraph::new(Span::styled(INPUT_PLACEHOLDER, theme.placeholder_style))
    } else {
        Paragraph::new(Span::styled(input.to_string(), theme.input_text_style))
            .scroll((0, u16::try_from(horizontal_scroll).unwrap_or(u16::MAX)))
    };
    f.render_widget(paragraph.block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let visible = u16::try_from(cursor_width - horizontal_scroll).unwrap_or(0);
        f.set_cursor_position((inner.x + visible.min(inner.width - 1), inner.y));
    }
}
