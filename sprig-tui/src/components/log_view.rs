use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sprig_core::state::{AppState, Mode};
use unicode_width::UnicodeWidthStr;

const INPUT_PROMPT: &str = "git> ";

/// Scrollback pane following the tail, with the input line below it
pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    draw_scrollback(f, chunks[0], state, theme);
    draw_input_line(f, chunks[1], state, theme);
}

fn draw_scrollback(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let visible_rows = usize::from(area.height.saturating_sub(2));
    let start = state.log.len().saturating_sub(visible_rows);
    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|line| {
            if line.starts_with("[error]") {
                Line::from(Span::styled(line.as_str(), Style::default().fg(theme.error)))
            } else if line.starts_with('$') || line.starts_with('>') {
                Line::from(Span::styled(
                    line.as_str(),
                    Style::default().fg(theme.accent),
                ))
            } else {
                Line::raw(line.as_str())
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Git output (type into git> when prompted) ")
            .border_style(Style::default().fg(theme.muted)),
    );
    f.render_widget(paragraph, area);
}

fn draw_input_line(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let busy = matches!(state.mode, Mode::Busy { .. });
    let prompt_style = if busy {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let line = Line::from(vec![
        Span::styled(INPUT_PROMPT, prompt_style),
        Span::raw(state.input.text.as_str()),
    ]);
    f.render_widget(Paragraph::new(line), area);

    // Only show a cursor while a process can actually receive input
    if busy {
        let before_cursor = &state.input.text[..state.input.cursor.min(state.input.text.len())];
        let x = area.x
            + u16::try_from(INPUT_PROMPT.width() + before_cursor.width()).unwrap_or(u16::MAX);
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
    }
}
