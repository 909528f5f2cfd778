//! Pure view: app state in, tree of tagged UI nodes out.
//!
//! [render] never mutates. Front ends paint the tree and feed the [Action]s
//! carried by interactive nodes back into [TodoApp::dispatch].

use std::fmt::Write;

use serde::Serialize;
use todo_constant::Labels;

use crate::app::{Action, TodoApp};
use crate::filter::Filter;
use crate::row::{RowMode, TaskRow};
use crate::task::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Title,
    Body,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Add,
    Edit,
    Delete,
    Save,
}

impl Icon {
    /// Terminal glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Add => "+",
            Icon::Edit => "✎",
            Icon::Delete => "✕",
            Icon::Save => "✓",
        }
    }
}

/// Which buffer a text field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTarget {
    NewTask,
    Rename(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub label: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ViewNode {
    Column {
        children: Vec<ViewNode>,
    },
    /// Horizontal group. `spread` pushes the last child to the right edge.
    /// `key` ties a task row to its task.
    Row {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<TaskId>,
        spread: bool,
        children: Vec<ViewNode>,
    },
    /// Scrollable column of task rows.
    List {
        children: Vec<ViewNode>,
    },
    Text {
        text: String,
        role: TextRole,
    },
    TextField {
        value: String,
        hint: String,
        /// Byte offset of the cursor in `value`.
        cursor: usize,
        target: FieldTarget,
    },
    Button {
        label: String,
        action: Action,
    },
    IconButton {
        icon: Icon,
        tooltip: String,
        action: Action,
    },
    Checkbox {
        label: String,
        checked: bool,
        action: Action,
    },
    Tabs {
        tabs: Vec<Tab>,
        selected: usize,
    },
}

impl ViewNode {
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Column { children }
            | ViewNode::Row { children, .. }
            | ViewNode::List { children } => children,
            _ => &[],
        }
    }

    /// Depth-first visit, parents before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a ViewNode)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Every action reachable in this subtree, in paint order.
    pub fn actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            ViewNode::Button { action, .. }
            | ViewNode::IconButton { action, .. }
            | ViewNode::Checkbox { action, .. } => out.push(*action),
            ViewNode::Tabs { tabs, .. } => out.extend(tabs.iter().map(|t| t.action)),
            _ => {}
        });
        out
    }

    /// The list node, if the tree has one.
    pub fn list(&self) -> Option<&ViewNode> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() && matches!(node, ViewNode::List { .. }) {
                found = Some(node);
            }
        });
        found
    }

    /// Indented one-node-per-line dump, used by `todo tree`.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0);
        out
    }

    fn outline_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        let _ = match self {
            ViewNode::Column { .. } => writeln!(out, "{pad}column"),
            ViewNode::Row { key: Some(id), .. } => writeln!(out, "{pad}row {id}"),
            ViewNode::Row { key: None, .. } => writeln!(out, "{pad}row"),
            ViewNode::List { children } => writeln!(out, "{pad}list ({})", children.len()),
            ViewNode::Text { text, .. } => writeln!(out, "{pad}text {text:?}"),
            ViewNode::TextField { value, hint, .. } if value.is_empty() => {
                writeln!(out, "{pad}field (hint {hint:?})")
            }
            ViewNode::TextField { value, .. } => writeln!(out, "{pad}field {value:?}"),
            ViewNode::Button { label, .. } => writeln!(out, "{pad}button {label:?}"),
            ViewNode::IconButton { icon, tooltip, .. } => {
                writeln!(out, "{pad}icon {} {tooltip:?}", icon.glyph())
            }
            ViewNode::Checkbox { label, checked, .. } => {
                let mark = if *checked { "x" } else { " " };
                writeln!(out, "{pad}[{mark}] {label:?}")
            }
            ViewNode::Tabs { tabs, selected } => {
                let names: Vec<String> = tabs
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        if i == *selected {
                            format!("*{}*", t.label)
                        } else {
                            t.label.clone()
                        }
                    })
                    .collect();
                writeln!(out, "{pad}tabs {}", names.join(" | "))
            }
        };
        for child in self.children() {
            child.outline_into(out, depth + 1);
        }
    }
}

/// Build the whole UI tree for the current state.
pub fn render(app: &TodoApp) -> ViewNode {
    let labels = app.labels();
    let mut children = vec![
        ViewNode::Text {
            text: labels.title.to_string(),
            role: TextRole::Title,
        },
        ViewNode::Row {
            key: None,
            spread: false,
            children: vec![
                ViewNode::TextField {
                    value: app.input().text().to_string(),
                    hint: labels.input_hint.to_string(),
                    cursor: app.input().cursor(),
                    target: FieldTarget::NewTask,
                },
                ViewNode::IconButton {
                    icon: Icon::Add,
                    tooltip: labels.add.to_string(),
                    action: Action::AddClicked,
                },
            ],
        },
    ];

    if app.variant().has_filters() {
        children.push(filter_tabs(app.filter(), labels));
    }

    children.push(ViewNode::List {
        children: app.visible_rows().map(|r| task_row(r, labels)).collect(),
    });

    if app.variant().has_filters() {
        children.push(ViewNode::Row {
            key: None,
            spread: true,
            children: vec![
                ViewNode::Text {
                    text: labels.remaining(app.remaining()),
                    role: TextRole::Muted,
                },
                ViewNode::Button {
                    label: labels.clear_completed.to_string(),
                    action: Action::ClearCompleted,
                },
            ],
        });
    }

    ViewNode::Column { children }
}

fn filter_tabs(current: Filter, labels: &Labels) -> ViewNode {
    ViewNode::Tabs {
        tabs: Filter::TABS
            .iter()
            .map(|f| Tab {
                label: f.label(labels).to_string(),
                action: Action::SelectFilter(*f),
            })
            .collect(),
        selected: current.index(),
    }
}

fn task_row(row: &TaskRow, labels: &Labels) -> ViewNode {
    let id = row.id();
    let children = match row.mode() {
        RowMode::Display => vec![
            ViewNode::Checkbox {
                label: row.name().to_string(),
                checked: row.is_completed(),
                action: Action::ToggleTask(id),
            },
            ViewNode::Row {
                key: None,
                spread: false,
                children: vec![
                    ViewNode::IconButton {
                        icon: Icon::Edit,
                        tooltip: labels.edit.to_string(),
                        action: Action::EditTask(id),
                    },
                    ViewNode::IconButton {
                        icon: Icon::Delete,
                        tooltip: labels.delete.to_string(),
                        action: Action::DeleteTask(id),
                    },
                ],
            },
        ],
        RowMode::Editing => vec![
            ViewNode::TextField {
                value: row.edit_buffer().text().to_string(),
                hint: String::new(),
                cursor: row.edit_buffer().cursor(),
                target: FieldTarget::Rename(id),
            },
            ViewNode::IconButton {
                icon: Icon::Save,
                tooltip: labels.save.to_string(),
                action: Action::SaveTask(id),
            },
        ],
    };
    ViewNode::Row {
        key: Some(id),
        spread: true,
        children,
    }
}
