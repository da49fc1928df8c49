use crate::{components::centered_rect, theme::Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Confirmation overlay for escalating a failed delete to `-D`. Drawn on
/// top of the normal panes so the scrollback explaining the failure
/// stays visible around it.
pub fn draw_force_delete(f: &mut Frame, area: Rect, branch: &str, theme: &Theme) {
    let text = vec![
        Line::from(vec![
            Span::raw("Delete failed. FORCE delete "),
            Span::styled(
                format!("\"{branch}\""),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("This discards unmerged commits. "),
            Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to confirm / "),
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to cancel"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Force Delete ")
        .border_style(Style::default().fg(theme.error));

    let centered = centered_rect(50, 20, area);
    f.render_widget(Clear, centered);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, centered);
}
