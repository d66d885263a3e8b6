#![allow(dead_code)] // Complete API module, not all methods used by the binary
//! Step records and the trace they accumulate into
//!
//! A [`Step`] describes one atomic phase of a mutation — a node allocation, a
//! single pointer write, one hop of a traversal — with enough metadata to
//! drive a highlight-based animation frame. A [`StepTrace`] is the ordered
//! record of every step one operation emitted. Traces are built by the
//! mutation engine and frozen once the operation returns: `push` is
//! crate-internal, so consumers can only read.
//!
//! Steps are snapshots, not live references. They stay interpretable after
//! the list mutates further because deleted nodes are tombstoned in the
//! arena rather than dropped.

use crate::list::NodeId;

/// The phase of a mutation a step describes.
///
/// A closed enum so the presentation layer can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Operation requested; emitted once at the start of every trace.
    Start,
    /// A detached node was allocated.
    CreateNode,
    /// Insertion into an empty list: head and tail both point at the new node.
    SetHeadTail,
    /// Head insert: the new node's `next` was pointed at the old head.
    LinkNext,
    /// Head insert: the old head's `prev` was pointed at the new node.
    LinkPrev,
    /// Head moved to the new node.
    UpdateHead,
    /// Tail insert: the new node's `prev` was pointed at the old tail.
    LinkPrevTail,
    /// Tail insert: the old tail's `next` was pointed at the new node.
    LinkNextTail,
    /// Tail moved to the new node.
    UpdateTail,
    /// One hop of a positional traversal.
    Traverse,
    /// The node currently occupying the target position was reached.
    FoundPosition,
    /// Positional insert: both of the new node's links were set.
    LinkNewNode,
    /// Positional insert: the neighbors were rewired around the new node.
    UpdateLinks,
    /// One visited node that did not match the deletion target.
    Search,
    /// The first node matching the deletion target.
    Found,
    /// Deletion of the only node: head and tail both cleared.
    DeleteOnlyNode,
    /// Deletion at the head: head advanced to its successor.
    DeleteHead,
    /// Deletion at the tail: tail retreated to its predecessor.
    DeleteTail,
    /// Deletion in the middle: the neighbors were spliced together.
    DeleteMiddle,
    /// The operation finished and the list is back in a settled state.
    Complete,
    /// The operation was rejected (invalid position); the list is untouched.
    Error,
    /// Deletion requested on an empty list; nothing to do.
    EmptyList,
    /// Deletion target not present; the list is untouched.
    NotFound,
}

impl StepKind {
    /// Short tag used in the trace pane.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::CreateNode => "create_node",
            StepKind::SetHeadTail => "set_head_tail",
            StepKind::LinkNext => "link_next",
            StepKind::LinkPrev => "link_prev",
            StepKind::UpdateHead => "update_head",
            StepKind::LinkPrevTail => "link_prev_tail",
            StepKind::LinkNextTail => "link_next_tail",
            StepKind::UpdateTail => "update_tail",
            StepKind::Traverse => "traverse",
            StepKind::FoundPosition => "found_position",
            StepKind::LinkNewNode => "link_new_node",
            StepKind::UpdateLinks => "update_links",
            StepKind::Search => "search",
            StepKind::Found => "found",
            StepKind::DeleteOnlyNode => "delete_only_node",
            StepKind::DeleteHead => "delete_head",
            StepKind::DeleteTail => "delete_tail",
            StepKind::DeleteMiddle => "delete_middle",
            StepKind::Complete => "complete",
            StepKind::Error => "error",
            StepKind::EmptyList => "empty_list",
            StepKind::NotFound => "not_found",
        }
    }

    /// True for the step kinds that end a trace.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StepKind::Complete | StepKind::Error | StepKind::EmptyList | StepKind::NotFound
        )
    }

    /// True for the step kinds that report an operation that did not mutate.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            StepKind::Error | StepKind::EmptyList | StepKind::NotFound
        )
    }
}

/// Which pointer of a node an edge highlight refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDir {
    Next,
    Prev,
}

/// A highlighted pointer: the `dir` link leaving `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub dir: EdgeDir,
}

impl Edge {
    pub fn next(from: NodeId) -> Self {
        Edge {
            from,
            dir: EdgeDir::Next,
        }
    }

    pub fn prev(from: NodeId) -> Self {
        Edge {
            from,
            dir: EdgeDir::Prev,
        }
    }
}

/// One atomic, described phase of a mutation.
#[derive(Debug, Clone)]
pub struct Step {
    pub kind: StepKind,
    /// The node this phase centers on, if any.
    pub focus: Option<NodeId>,
    /// Nodes to highlight alongside the focus. No duplicates.
    pub highlighted_nodes: Vec<NodeId>,
    /// Pointers to highlight.
    pub highlighted_edges: Vec<Edge>,
    /// Short status line ("Created node 25").
    pub message: String,
    /// Fuller sentence for the detail pane.
    pub description: String,
}

impl Step {
    pub fn new(kind: StepKind, message: impl Into<String>, description: impl Into<String>) -> Self {
        Step {
            kind,
            focus: None,
            highlighted_nodes: Vec::new(),
            highlighted_edges: Vec::new(),
            message: message.into(),
            description: description.into(),
        }
    }

    pub fn focus(mut self, id: NodeId) -> Self {
        self.focus = Some(id);
        self
    }

    pub fn nodes(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        for id in ids {
            if !self.highlighted_nodes.contains(&id) {
                self.highlighted_nodes.push(id);
            }
        }
        self
    }

    pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.highlighted_edges.extend(edges);
        self
    }
}

/// The ordered record of every step one operation emitted.
///
/// Fully materialized so playback can seek by index; nothing is deduplicated
/// or compacted — the animation depends on visiting every intermediate node.
#[derive(Debug, Clone, Default)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new() -> Self {
        StepTrace { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Step kinds in emission order. Handy for asserting exact sequences.
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }
}
