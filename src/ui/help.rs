use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(44, 12, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" DSpace — Keybindings (? or F1 to close) ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        key_line(theme, "  r / F5",      "Refresh the reading"),
        key_line(theme, "  t",           "Cycle color theme"),
        key_line(theme, "  ? / F1",      "Toggle this help"),
        key_line(theme, "  Esc",         "Close overlay"),
        key_line(theme, "  q / Ctrl-C",  "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Readings only change when you refresh.",
            theme.text_dim,
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<16}", key), theme.title),
        Span::styled(desc, theme.text),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1]);
    horiz[1]
}
