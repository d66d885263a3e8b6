//! Status bar rendering with keybindings and playback state

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::playback::PlaybackMode;
use crate::ui::theme::DEFAULT_THEME;

/// Render the status bar at the bottom.
///
/// `prompt` replaces the status message while the operation prompt is open.
#[allow(clippy::too_many_arguments)]
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    prompt: Option<&str>,
    cursor: usize,
    total: usize,
    mode: PlaybackMode,
    speed: u64,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: step badge and the status message or prompt
    let step_text = if total > 0 {
        format!(" Step {}/{} ", cursor + 1, total)
    } else {
        " Step -/- ".to_string()
    };

    let badge_bg = match mode {
        PlaybackMode::Playing => DEFAULT_THEME.secondary,
        PlaybackMode::Finished => DEFAULT_THEME.error,
        _ => DEFAULT_THEME.primary,
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        match prompt {
            Some(prompt) => Span::styled(
                format!(" {} ", prompt),
                Style::default()
                    .bg(DEFAULT_THEME.bar_bg)
                    .fg(DEFAULT_THEME.focus)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                format!(" {} ", message),
                Style::default().bg(DEFAULT_THEME.bar_bg).fg(DEFAULT_THEME.fg),
            ),
        },
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(DEFAULT_THEME.bar_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds and mode indicator
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" b/e/p/d ", key_style),
        Span::styled(" op ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(format!(" speed {} ", speed), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let mode_badge = match mode {
        PlaybackMode::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackMode::Paused => Some((" ⏸ PAUSED ", DEFAULT_THEME.primary)),
        PlaybackMode::Finished => Some((" END ", DEFAULT_THEME.error)),
        PlaybackMode::Idle if total > 0 => Some((" READY ", DEFAULT_THEME.success)),
        PlaybackMode::Idle => None,
    };
    if let Some((text, bg)) = mode_badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(DEFAULT_THEME.bar_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}
