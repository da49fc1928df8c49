use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use sprig_core::state::AppState;

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Branches ")
        .border_style(Style::default().fg(theme.muted));

    if state.branches.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No branches found",
            Style::default().fg(theme.muted),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .branches
        .iter()
        .map(|branch| {
            let prefix = if branch.is_current { "* " } else { "  " };
            let style = if branch.is_current {
                Style::default().fg(theme.success)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{}", branch.name),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.secondary)
            .fg(theme.highlight_fg)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(state.branches.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use sprig_core::{branch::Branch, config::ThemeConfig};
    use std::path::PathBuf;

    fn make_state(names: &[&str], current: Option<&str>) -> AppState {
        let branches = names
            .iter()
            .map(|name| Branch {
                name: (*name).to_string(),
                is_current: Some(*name) == current,
            })
            .collect();
        let mut state = AppState::new(PathBuf::from("/tmp/repo"), branches, false);
        state.session_log_file = None;
        state
    }

    fn render_branch_list(state: &AppState, width: u16, height: u16) -> String {
        let theme = Theme::from_config(&ThemeConfig::default());
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw(f, f.area(), state, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push(buffer[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_empty_list_shows_message_instead_of_list() {
        let state = make_state(&[], None);
        let output = render_branch_list(&state, 40, 10);
        assert!(
            output.contains("No branches found"),
            "empty list should show the placeholder: {output}"
        );
        assert!(output.contains("Branches"), "should keep the pane title");
    }

    #[test]
    fn test_current_branch_carries_star_marker() {
        let state = make_state(&["main", "dev"], Some("main"));
        let output = render_branch_list(&state, 40, 10);
        assert!(output.contains("* main"), "current branch marked: {output}");
        assert!(output.contains("  dev"), "others indented: {output}");
        assert!(!output.contains("* dev"));
    }
}
