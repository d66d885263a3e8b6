//! Trace pane: the step log with the cursor emphasized

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::engine::StepTrace;
use crate::ui::theme::DEFAULT_THEME;

/// Render the whole trace, one line per step: past steps in the normal
/// foreground, the current step emphasized, future steps dimmed. Scrolls so
/// the cursor stays visible.
pub fn render_trace_pane(frame: &mut Frame, area: Rect, trace: &StepTrace, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(trace.len());

    for (index, step) in trace.iter().enumerate() {
        let label_style = if step.kind.is_failure() {
            Style::default().fg(DEFAULT_THEME.error)
        } else {
            Style::default().fg(DEFAULT_THEME.primary)
        };

        let message_style = if index == cursor {
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.focus)
                .add_modifier(Modifier::BOLD)
        } else if index < cursor {
            Style::default().fg(DEFAULT_THEME.fg)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        let marker = if index == cursor { "▶" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {:>3} ", marker, index + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(format!("{:<16}", step.kind.label()), label_style),
            Span::styled(step.message.clone(), message_style),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No trace loaded. Press b/e/p/d to run an operation.",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    // Keep the cursor line inside the viewport (borders take two rows).
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = if visible > 0 {
        cursor.saturating_sub(visible.saturating_sub(1))
    } else {
        0
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Steps ")
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(Color::Reset))
            .scroll((scroll as u16, 0)),
        area,
    );
}
