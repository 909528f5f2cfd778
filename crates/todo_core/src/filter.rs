//! Status filter: a view-only predicate over tasks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TodoError;
use crate::task::Task;

/// Which tasks the list shows. Never alters the underlying data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tab order.
    pub const TABS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// True if `task` is visible under this filter.
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Position in [Filter::TABS].
    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Active => 1,
            Filter::Completed => 2,
        }
    }

    /// Filter at tab position `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::TABS.get(index).copied()
    }

    /// Next tab, wrapping.
    pub fn next(self) -> Self {
        Self::TABS[(self.index() + 1) % Self::TABS.len()]
    }

    /// Previous tab, wrapping.
    pub fn prev(self) -> Self {
        Self::TABS[(self.index() + Self::TABS.len() - 1) % Self::TABS.len()]
    }

    /// Tab caption from the given label table.
    pub fn label(self, labels: &todo_constant::Labels) -> &'static str {
        match self {
            Filter::All => labels.tab_all,
            Filter::Active => labels.tab_active,
            Filter::Completed => labels.tab_completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(TodoError::InvalidFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(completed: bool) -> Task {
        Task {
            id: TaskId(1),
            name: "t".into(),
            completed,
        }
    }

    #[test]
    fn admits_matches_predicate() {
        for completed in [false, true] {
            let t = task(completed);
            assert!(Filter::All.admits(&t));
            assert_eq!(Filter::Active.admits(&t), !completed);
            assert_eq!(Filter::Completed.admits(&t), completed);
        }
    }

    #[test]
    fn next_prev_wrap() {
        assert_eq!(Filter::Completed.next(), Filter::All);
        assert_eq!(Filter::All.prev(), Filter::Completed);
        assert_eq!(Filter::Active.next().prev(), Filter::Active);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Filter::from_index(1), Some(Filter::Active));
        assert_eq!(Filter::from_index(3), None);
    }

    #[test]
    fn parse_filter() {
        assert_eq!("Completed".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!(" active ".parse::<Filter>().unwrap(), Filter::Active);
        assert!(matches!(
            "nope".parse::<Filter>(),
            Err(TodoError::InvalidFilter(s)) if s == "nope"
        ));
    }

    #[test]
    fn japanese_tab_labels() {
        let labels = todo_constant::Locale::Ja.labels();
        assert_eq!(Filter::Active.label(labels), "未完");
    }
}
