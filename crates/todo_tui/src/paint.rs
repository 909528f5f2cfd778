//! Paint a [ViewNode] tree into terminal lines plus a click map.
//!
//! Top-level column children stack one line each (the title takes two). The
//! list takes whatever height is left, so anything after it sits at the
//! bottom of the body. Inside a row, one leaf flexes to fill the width: the
//! first text field, else the first checkbox. A `spread` row with no flexing
//! leaf pushes its last child to the right edge.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use todo_core::view::Tab;
use todo_core::{Action, FieldTarget, Icon, TaskId, TextRole, ViewNode};

use crate::layouts::{
    background_style, danger_style, selected_style, success_style, text_muted_style, text_style,
};
use crate::theme::TodoPalette;
use crate::utils::{column_window, display_width, pad_to_width, truncate_ellipsis, INLINE_GAP};

/// What a click on a cell resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Action(Action),
    Field(FieldTarget),
    /// Anywhere on a task row not covered by a control.
    Row(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub rect: Rect,
    pub target: HitTarget,
}

/// Target under (`x`, `y`). Later hits sit on top of earlier ones.
pub fn hit_at(hits: &[Hit], x: u16, y: u16) -> Option<HitTarget> {
    hits.iter()
        .rev()
        .find(|h| {
            x >= h.rect.x
                && x < h.rect.x.saturating_add(h.rect.width)
                && y >= h.rect.y
                && y < h.rect.y.saturating_add(h.rect.height)
        })
        .map(|h| h.target)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaintOptions {
    /// Highlighted task row.
    pub selected: Option<TaskId>,
    /// Field that owns the terminal cursor.
    pub focused_field: Option<FieldTarget>,
    /// First list row shown; adjusted so `selected` stays visible.
    pub list_scroll: usize,
}

#[derive(Debug, Default)]
pub struct Painted {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<Hit>,
    /// Absolute cursor position inside the focused field.
    pub cursor: Option<(u16, u16)>,
    /// Scroll actually used (clamped).
    pub list_scroll: usize,
    /// Task ids of the list, top to bottom, scrolled out ones included.
    pub list_ids: Vec<TaskId>,
}

pub fn paint(tree: &ViewNode, palette: &TodoPalette, area: Rect, opts: PaintOptions) -> Painted {
    let mut painter = Painter {
        palette,
        area,
        opts,
        out: Painted {
            list_scroll: opts.list_scroll,
            ..Painted::default()
        },
    };
    if area.width == 0 || area.height == 0 {
        return painter.out;
    }

    let blocks = match tree {
        ViewNode::Column { children } => children.as_slice(),
        other => std::slice::from_ref(other),
    };
    let fixed: usize = blocks.iter().map(block_height).sum();
    let list_height = (area.height as usize).saturating_sub(fixed);
    for node in blocks {
        painter.block(node, list_height);
    }

    let bottom = area.y.saturating_add(area.height);
    let mut out = painter.out;
    out.lines.truncate(area.height as usize);
    out.hits.retain(|h| h.rect.y < bottom);
    out.cursor = out.cursor.filter(|(_, y)| *y < bottom);
    out
}

fn block_height(node: &ViewNode) -> usize {
    match node {
        ViewNode::List { .. } => 0,
        ViewNode::Text {
            role: TextRole::Title,
            ..
        } => 2,
        ViewNode::Column { children } => children.iter().map(block_height).sum(),
        _ => 1,
    }
}

fn row_key(node: &ViewNode) -> Option<TaskId> {
    match node {
        ViewNode::Row { key, .. } => *key,
        _ => None,
    }
}

/// Leaves of a row, nested rows flattened.
fn flatten<'a>(nodes: &'a [ViewNode], out: &mut Vec<&'a ViewNode>) {
    for node in nodes {
        match node {
            ViewNode::Row { children, .. } | ViewNode::Column { children } => flatten(children, out),
            leaf => out.push(leaf),
        }
    }
}

fn natural_width(node: &ViewNode) -> usize {
    match node {
        ViewNode::Text { text, .. } => display_width(text),
        ViewNode::TextField { value, hint, .. } => display_width(value).max(display_width(hint)) + 1,
        ViewNode::Button { label, .. } => display_width(label) + 2,
        ViewNode::IconButton { icon, .. } => display_width(icon.glyph()) + 2,
        ViewNode::Checkbox { label, .. } => display_width(label) + 4,
        _ => 0,
    }
}

struct Painter<'a> {
    palette: &'a TodoPalette,
    area: Rect,
    opts: PaintOptions,
    out: Painted,
}

impl Painter<'_> {
    fn y(&self) -> u16 {
        self.area.y.saturating_add(self.out.lines.len() as u16)
    }

    fn push_hit(&mut self, x: usize, y: u16, width: usize, target: HitTarget) {
        if width == 0 {
            return;
        }
        self.out.hits.push(Hit {
            rect: Rect {
                x: self.area.x.saturating_add(x as u16),
                y,
                width: width as u16,
                height: 1,
            },
            target,
        });
    }

    fn block(&mut self, node: &ViewNode, list_height: usize) {
        match node {
            ViewNode::Column { children } => {
                for child in children {
                    self.block(child, list_height);
                }
            }
            ViewNode::Text { text, role } => {
                let width = self.area.width as usize;
                let span = Span::styled(truncate_ellipsis(text, width), self.role_style(*role));
                self.out.lines.push(Line::from(span));
                if *role == TextRole::Title {
                    self.out.lines.push(Line::default());
                }
            }
            ViewNode::List { children } => self.list(children, list_height),
            ViewNode::Tabs { tabs, selected } => self.tabs(tabs, *selected),
            ViewNode::Row { key, spread, children } => self.row(*key, *spread, children),
            leaf => self.row(None, false, std::slice::from_ref(leaf)),
        }
    }

    fn list(&mut self, children: &[ViewNode], height: usize) {
        let ids: Vec<TaskId> = children.iter().filter_map(row_key).collect();
        let mut scroll = self.opts.list_scroll;
        if let Some(sel) = self
            .opts
            .selected
            .and_then(|s| children.iter().position(|c| row_key(c) == Some(s)))
        {
            if sel < scroll {
                scroll = sel;
            } else if height > 0 && sel >= scroll + height {
                scroll = sel + 1 - height;
            }
        }
        scroll = scroll.min(children.len().saturating_sub(height));

        for child in children.iter().skip(scroll).take(height) {
            self.block(child, 0);
        }
        let drawn = children.len().saturating_sub(scroll).min(height);
        for _ in drawn..height {
            self.out.lines.push(Line::default());
        }
        self.out.list_scroll = scroll;
        self.out.list_ids = ids;
    }

    fn tabs(&mut self, tabs: &[Tab], selected: usize) {
        let y = self.y();
        let mut spans = Vec::new();
        let mut x = 0;
        for (i, tab) in tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(INLINE_GAP as usize)));
                x += INLINE_GAP as usize;
            }
            let text = format!(" {} ", tab.label);
            let width = display_width(&text);
            let style = if i == selected {
                selected_style(self.palette.element_selected)
                    .fg(self.palette.text.into())
                    .add_modifier(Modifier::BOLD)
            } else {
                text_muted_style(self.palette.text_muted)
            };
            spans.push(Span::styled(text, style));
            self.push_hit(x, y, width, HitTarget::Action(tab.action));
            x += width;
        }
        self.out.lines.push(Line::from(spans));
    }

    fn row(&mut self, key: Option<TaskId>, spread: bool, children: &[ViewNode]) {
        let y = self.y();
        let width = self.area.width as usize;
        let gap = INLINE_GAP as usize;

        let (left, right) = if spread && children.len() > 1 {
            children.split_at(children.len() - 1)
        } else {
            (children, &[][..])
        };
        let mut leaves = Vec::new();
        flatten(left, &mut leaves);
        let split = leaves.len();
        flatten(right, &mut leaves);

        let flex = leaves[..split]
            .iter()
            .position(|n| matches!(n, ViewNode::TextField { .. }))
            .or_else(|| {
                leaves[..split]
                    .iter()
                    .position(|n| matches!(n, ViewNode::Checkbox { .. }))
            });
        let gaps = gap * leaves.len().saturating_sub(1);
        let fixed: usize = leaves
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != flex)
            .map(|(_, n)| natural_width(n))
            .sum();
        let free = width.saturating_sub(fixed + gaps);
        let filler = if flex.is_none() && split < leaves.len() { free } else { 0 };

        if let Some(id) = key {
            self.push_hit(0, y, width, HitTarget::Row(id));
        }

        let mut spans = Vec::new();
        let mut x = 0;
        for (i, leaf) in leaves.iter().enumerate() {
            if i > 0 {
                let pad = if i == split { gap + filler } else { gap };
                spans.push(Span::raw(" ".repeat(pad)));
                x += pad;
            }
            let w = if Some(i) == flex { free } else { natural_width(leaf) };
            self.leaf(leaf, x, y, w, &mut spans);
            x += w;
        }

        let mut line = Line::from(spans);
        if key.is_some() && key == self.opts.selected {
            line = line.style(selected_style(self.palette.element_selected));
        }
        self.out.lines.push(line);
    }

    fn leaf(&mut self, node: &ViewNode, x: usize, y: u16, w: usize, spans: &mut Vec<Span<'static>>) {
        match node {
            ViewNode::Text { text, role } => {
                let shown = pad_to_width(&truncate_ellipsis(text, w), w);
                spans.push(Span::styled(shown, self.role_style(*role)));
            }
            ViewNode::TextField {
                value,
                hint,
                cursor,
                target,
            } => {
                let field = background_style(self.palette.surface_background);
                let before = value.get(..*cursor).unwrap_or(value.as_str());
                let col = display_width(before);
                let skip = col.saturating_sub(w.saturating_sub(1));
                if value.is_empty() {
                    let shown = pad_to_width(&truncate_ellipsis(hint, w), w);
                    spans.push(Span::styled(shown, field.fg(self.palette.text_placeholder.into())));
                } else {
                    let shown = pad_to_width(&column_window(value, skip, w), w);
                    spans.push(Span::styled(shown, field.fg(self.palette.text.into())));
                }
                if self.opts.focused_field == Some(*target) && w > 0 {
                    let cx = self.area.x.saturating_add((x + col - skip) as u16);
                    self.out.cursor = Some((cx, y));
                }
                self.push_hit(x, y, w, HitTarget::Field(*target));
            }
            ViewNode::Button { label, action } => {
                let style = text_style(self.palette.accent).add_modifier(Modifier::BOLD);
                spans.push(Span::styled(format!("[{label}]"), style));
                self.push_hit(x, y, w, HitTarget::Action(*action));
            }
            ViewNode::IconButton { icon, action, .. } => {
                let style = match icon {
                    Icon::Delete => danger_style(self.palette.danger),
                    Icon::Save => success_style(self.palette.success),
                    Icon::Add | Icon::Edit => text_style(self.palette.accent),
                };
                spans.push(Span::styled(format!("[{}]", icon.glyph()), style));
                self.push_hit(x, y, w, HitTarget::Action(*action));
            }
            ViewNode::Checkbox {
                label,
                checked,
                action,
            } => {
                let (mark, mark_style) = if *checked {
                    ("[x] ", success_style(self.palette.success))
                } else {
                    ("[ ] ", text_style(self.palette.text))
                };
                let label_style = if *checked {
                    text_muted_style(self.palette.text_muted).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    text_style(self.palette.text)
                };
                let room = w.saturating_sub(4);
                spans.push(Span::styled(mark, mark_style));
                spans.push(Span::styled(truncate_ellipsis(label, room), label_style));
                let used = 4 + display_width(&truncate_ellipsis(label, room));
                if w > used {
                    spans.push(Span::raw(" ".repeat(w - used)));
                }
                self.push_hit(x, y, w, HitTarget::Action(*action));
            }
            _ => spans.push(Span::raw(" ".repeat(w))),
        }
    }

    fn role_style(&self, role: TextRole) -> Style {
        match role {
            TextRole::Title => text_style(self.palette.text).add_modifier(Modifier::BOLD),
            TextRole::Body => text_style(self.palette.text),
            TextRole::Muted => text_muted_style(self.palette.text_muted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{render, Filter, TodoApp};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn paint_app(app: &TodoApp, width: u16, height: u16, opts: PaintOptions) -> Painted {
        paint(&render(app), &TodoPalette::dark(), Rect::new(0, 0, width, height), opts)
    }

    #[test]
    fn full_layout_lines() {
        let mut app = TodoApp::default();
        app.add_task("Buy milk");
        let p = paint_app(&app, 40, 10, PaintOptions::default());
        assert_eq!(p.lines.len(), 10);
        assert_eq!(text(&p.lines[0]), "Todo list");
        assert!(text(&p.lines[1]).is_empty());
        assert!(text(&p.lines[3]).starts_with(" All "));
        assert!(text(&p.lines[4]).starts_with("[ ] Buy milk"));
        assert!(text(&p.lines[9]).starts_with("1 active task left"));
        assert!(text(&p.lines[9]).ends_with("[Clear completed]"));
        assert_eq!(display_width(&text(&p.lines[9])), 40);
    }

    #[test]
    fn clicks_resolve_to_actions() {
        let mut app = TodoApp::default();
        let id = app.add_task("Buy milk");
        let p = paint_app(&app, 40, 10, PaintOptions::default());
        assert_eq!(hit_at(&p.hits, 5, 2), Some(HitTarget::Field(FieldTarget::NewTask)));
        assert_eq!(hit_at(&p.hits, 38, 2), Some(HitTarget::Action(Action::AddClicked)));
        assert_eq!(
            hit_at(&p.hits, 7, 3),
            Some(HitTarget::Action(Action::SelectFilter(Filter::Active)))
        );
        assert_eq!(hit_at(&p.hits, 1, 4), Some(HitTarget::Action(Action::ToggleTask(id))));
        assert_eq!(hit_at(&p.hits, 34, 4), Some(HitTarget::Action(Action::EditTask(id))));
        assert_eq!(hit_at(&p.hits, 38, 4), Some(HitTarget::Action(Action::DeleteTask(id))));
        assert_eq!(hit_at(&p.hits, 32, 4), Some(HitTarget::Row(id)));
        assert_eq!(hit_at(&p.hits, 39, 9), Some(HitTarget::Action(Action::ClearCompleted)));
        assert_eq!(hit_at(&p.hits, 0, 6), None);
    }

    #[test]
    fn cursor_follows_focused_field() {
        let mut app = TodoApp::default();
        app.input_mut().set("ab");
        let focused = PaintOptions {
            focused_field: Some(FieldTarget::NewTask),
            ..PaintOptions::default()
        };
        assert_eq!(paint_app(&app, 40, 10, focused).cursor, Some((2, 2)));
        assert_eq!(paint_app(&app, 40, 10, PaintOptions::default()).cursor, None);
    }

    #[test]
    fn empty_field_shows_hint() {
        let app = TodoApp::default();
        let p = paint_app(&app, 40, 10, PaintOptions::default());
        assert!(text(&p.lines[2]).starts_with("What needs to be done?"));
    }

    #[test]
    fn list_scrolls_to_selection() {
        let mut app = TodoApp::default();
        let ids: Vec<TaskId> = (0..10).map(|i| app.add_task(format!("t{i}"))).collect();
        let opts = PaintOptions {
            selected: Some(ids[5]),
            ..PaintOptions::default()
        };
        let p = paint_app(&app, 40, 8, opts);
        assert_eq!(p.lines.len(), 8);
        assert_eq!(p.list_scroll, 3);
        assert_eq!(p.list_ids.len(), 10);
        assert!(text(&p.lines[4]).starts_with("[ ] t3"));
        assert_eq!(hit_at(&p.hits, 0, 6), Some(HitTarget::Action(Action::ToggleTask(ids[5]))));
    }

    #[test]
    fn scroll_clamped_when_list_shrinks() {
        let mut app = TodoApp::default();
        app.add_task("only");
        let opts = PaintOptions {
            list_scroll: 7,
            ..PaintOptions::default()
        };
        assert_eq!(paint_app(&app, 40, 10, opts).list_scroll, 0);
    }

    #[test]
    fn editing_row_paints_field_and_save() {
        let mut app = TodoApp::default();
        let id = app.add_task("milk");
        app.dispatch(Action::EditTask(id));
        let opts = PaintOptions {
            focused_field: Some(FieldTarget::Rename(id)),
            ..PaintOptions::default()
        };
        let p = paint_app(&app, 40, 10, opts);
        assert!(text(&p.lines[4]).starts_with("milk"));
        assert!(text(&p.lines[4]).ends_with("[✓]"));
        assert_eq!(p.cursor, Some((4, 4)));
        assert_eq!(hit_at(&p.hits, 38, 4), Some(HitTarget::Action(Action::SaveTask(id))));
    }

    #[test]
    fn wide_names_are_truncated_to_row() {
        let mut app = TodoApp::default();
        app.add_task("牛乳を買う牛乳を買う牛乳を買う");
        let p = paint_app(&app, 20, 10, PaintOptions::default());
        assert_eq!(display_width(&text(&p.lines[4])), 20);
        assert!(text(&p.lines[4]).contains('…'));
    }

    #[test]
    fn zero_area_paints_nothing() {
        let app = TodoApp::default();
        let p = paint_app(&app, 0, 0, PaintOptions::default());
        assert!(p.lines.is_empty());
        assert!(p.hits.is_empty());
    }
}
