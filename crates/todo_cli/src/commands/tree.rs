//! `todo tree` — build the app from flags, render once, print the UI tree.

use anyhow::{anyhow, Result};
use serde::Serialize;
use todo_core::{render, Action, AppVariant, Filter, Task, TaskId, TodoApp, ViewNode};
use todo_observability::{command_span, init, record_error};

use crate::cli::AppArgs;
use crate::output;

#[derive(Serialize)]
struct TreeReport<'a> {
    variant: AppVariant,
    locale: &'static str,
    filter: Filter,
    remaining: usize,
    tasks: Vec<&'a Task>,
    visible: &'a [TaskId],
    tree: ViewNode,
}

pub fn handle(args: AppArgs, filter: Filter, done: &[usize], verbose: u8) -> Result<()> {
    if let Err(e) = init(super::observability(verbose, "warn")) {
        output::warning(&format!("Observability init failed (continuing): {e}"));
    }
    let span = command_span!("tree", args.variant.as_str());
    let _guard = span.enter();

    if !args.variant.has_filters() && filter != Filter::All {
        output::warning(&format!("the {} variant has no filter tabs; showing all tasks", args.variant));
    }
    let app = build(&args, filter, done).inspect_err(|e| record_error(e))?;
    let tree = render(&app);

    if output::is_json() {
        let report = TreeReport {
            variant: app.variant(),
            locale: app.labels().locale.as_str(),
            filter: app.filter(),
            remaining: app.remaining(),
            tasks: app.tasks().collect(),
            visible: app.visible_ids(),
            tree,
        };
        output::data("tree", &report);
        return Ok(());
    }

    output::header(&format!("{} · {} · {}", app.variant(), app.labels().locale, app.filter()));
    print!("{}", tree.outline());
    if !app.is_empty() {
        println!();
        print_table(&app);
    }
    output::kv("remaining", &app.remaining().to_string());
    Ok(())
}

/// App with `args.tasks` added in order, `done` positions (1-based) completed and `filter` selected.
pub fn build(args: &AppArgs, filter: Filter, done: &[usize]) -> Result<TodoApp> {
    let mut app = TodoApp::new(args.variant, args.locale);
    let ids: Vec<TaskId> = args.tasks.iter().map(|name| app.add_task(name.clone())).collect();
    for &pos in done {
        let id = pos
            .checked_sub(1)
            .and_then(|i| ids.get(i))
            .copied()
            .ok_or_else(|| anyhow!("--done {pos}: no task at that position (have {})", ids.len()))?;
        if !app.row(id).is_some_and(|r| r.is_completed()) {
            app.dispatch(Action::ToggleTask(id));
        }
    }
    app.dispatch(Action::SelectFilter(filter));
    Ok(app)
}

fn print_table(app: &TodoApp) {
    let mut table = output::table();
    output::table_header(&mut table, &["#", "Task", "Status", "Shown"]);
    for (i, task) in app.tasks().enumerate() {
        let status = if task.completed { "done" } else { "active" };
        let shown = if app.visible_ids().contains(&task.id) { "yes" } else { "no" };
        output::table_row(
            &mut table,
            &[(i + 1).to_string(), task.name.clone(), status.to_string(), shown.to_string()],
        );
    }
    println!("{table}");
}
