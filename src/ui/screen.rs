use crate::app::{App, ProbeState};
use crate::models::snapshot::StorageSnapshot;
use crate::ui::footer;
use crate::util::human::{fmt_pct, format_size};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let area  = f.area();
    let theme = &app.theme;

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // Header
    let now = Local::now().format("%H:%M:%S").to_string();
    let title = format!(" DSpace — Storage   {}", now);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(title, theme.title))).style(theme.header),
        root[0],
    );

    // Body
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(format!(" {} ", app.mount.display()), theme.title));
    let inner = block.inner(root[1]);
    f.render_widget(block, root[1]);

    match &app.probe_state {
        ProbeState::Computing   => render_notice(f, inner, "computing…", theme.text_dim),
        ProbeState::Unavailable => render_notice(f, inner, "storage unavailable", theme.warn),
        ProbeState::Ready(snap) => render_snapshot(f, inner, snap, app),
    }

    footer::render_footer(f, root[2], theme);
}

/// Centered single-line notice — the placeholder and error states.
fn render_notice(f: &mut Frame, area: Rect, msg: &str, style: ratatui::style::Style) {
    if area.height == 0 { return; }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(Span::styled(msg, style)).alignment(Alignment::Center),
        rows[1],
    );
}

fn render_snapshot(f: &mut Frame, area: Rect, snap: &StorageSnapshot, app: &App) {
    if area.height == 0 { return; }
    let theme = &app.theme;
    let t     = &app.config.thresholds;

    let pct   = snap.used_pct();
    let style = theme.usage_style(pct, t.warn_pct, t.crit_pct);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // padding
            Constraint::Length(1),  // gauge label
            Constraint::Length(1),  // gauge
            Constraint::Length(1),  // padding
            Constraint::Length(1),  // total
            Constraint::Length(1),  // used
            Constraint::Length(1),  // free
            Constraint::Length(1),  // padding
            Constraint::Length(1),  // last refresh
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("Usage", theme.text_dim)),
        rows[1],
    );

    let gauge = Gauge::default()
        .gauge_style(style)
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(fmt_pct(pct));
    f.render_widget(gauge, rows[2]);

    let stats = [
        ("Total", snap.total_bytes, theme.text),
        ("Used",  snap.used_bytes,  style),
        ("Free",  snap.free_bytes,  theme.text),
    ];
    for (i, (label, bytes, value_style)) in stats.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("{:<7}", label), theme.text_dim),
            Span::styled(format!("{:>12}", format_size(*bytes)), *value_style),
        ]);
        f.render_widget(Paragraph::new(line), rows[4 + i]);
    }

    if let Some(ts) = &app.last_refresh {
        f.render_widget(
            Paragraph::new(Span::styled(format!("updated {}", ts), theme.text_dim)),
            rows[8],
        );
    }
}
