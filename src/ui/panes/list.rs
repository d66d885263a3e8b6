//! List pane: the chain of nodes with step-driven highlighting

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::engine::{EdgeDir, Step};
use crate::list::{DoublyLinkedList, NodeId};
use crate::ui::theme::DEFAULT_THEME;

/// Render the live chain head to tail, highlighting the current step's
/// focus node, highlighted nodes, and highlighted edges.
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    list: &DoublyLinkedList,
    step: Option<&Step>,
) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    if list.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (empty list)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        lines.push(chain_line(list, step));
    }

    lines.push(Line::from(""));
    lines.push(summary_line(list));

    if let Some(step) = step {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", step.description),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" List ")
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn chain_line<'a>(list: &DoublyLinkedList, step: Option<&Step>) -> Line<'a> {
    let mut spans = vec![Span::styled(
        "  head → ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];

    let mut prev_id: Option<NodeId> = None;
    for node in list.iter() {
        if let Some(left) = prev_id {
            spans.push(arrow_span(left, node.id, step));
        }
        spans.push(node_span(node.id, node.value, step));
        prev_id = Some(node.id);
    }

    spans.push(Span::styled(
        " ← tail",
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    Line::from(spans)
}

fn node_span<'a>(id: NodeId, value: i64, step: Option<&Step>) -> Span<'a> {
    let text = format!(" {} ", value);
    let style = match step {
        Some(step) if step.focus == Some(id) => Style::default()
            .bg(DEFAULT_THEME.focus)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(step) if step.highlighted_nodes.contains(&id) => Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.primary),
    };
    Span::styled(text, style)
}

/// The arrow between two adjacent nodes stands for `left.next` and
/// `right.prev`; it lights up when either pointer is highlighted.
fn arrow_span<'a>(left: NodeId, right: NodeId, step: Option<&Step>) -> Span<'a> {
    let highlighted = step.is_some_and(|step| {
        step.highlighted_edges.iter().any(|edge| {
            (edge.from == left && edge.dir == EdgeDir::Next)
                || (edge.from == right && edge.dir == EdgeDir::Prev)
        })
    });
    let style = if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };
    Span::styled(" ⇄ ", style)
}

fn summary_line<'a>(list: &DoublyLinkedList) -> Line<'a> {
    let value_of = |id: Option<NodeId>| {
        id.and_then(|id| list.get(id))
            .map(|n| n.value.to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    Line::from(Span::styled(
        format!(
            "  head: {}   tail: {}   size: {}",
            value_of(list.head()),
            value_of(list.tail()),
            list.len()
        ),
        Style::default().fg(DEFAULT_THEME.fg),
    ))
}
