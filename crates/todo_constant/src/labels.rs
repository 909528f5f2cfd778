//! User-visible strings, one table per locale.
//!
//! The Japanese table carries the wording of the first release of the app;
//! English is the default.

use std::fmt;
use std::str::FromStr;

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Label table for this locale.
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ja => &JA,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [Locale::from_str] for an unsupported language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}' (expected en or ja)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Every string the view tree shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub locale: Locale,
    pub title: &'static str,
    pub input_hint: &'static str,
    pub add: &'static str,
    pub tab_all: &'static str,
    pub tab_active: &'static str,
    pub tab_completed: &'static str,
    pub clear_completed: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
}

impl Labels {
    /// Remaining-count label, e.g. "2 active tasks left".
    pub fn remaining(&self, count: usize) -> String {
        match self.locale {
            Locale::En if count == 1 => "1 active task left".to_string(),
            Locale::En => format!("{count} active tasks left"),
            Locale::Ja => format!("未完タスク {count} 件"),
        }
    }
}

pub static EN: Labels = Labels {
    locale: Locale::En,
    title: "Todo list",
    input_hint: "What needs to be done?",
    add: "Add",
    tab_all: "All",
    tab_active: "Active",
    tab_completed: "Completed",
    clear_completed: "Clear completed",
    edit: "Edit",
    delete: "Delete",
    save: "Save",
};

pub static JA: Labels = Labels {
    locale: Locale::Ja,
    title: "ToDoリスト",
    input_hint: "タスク名を入力...",
    add: "追加",
    tab_all: "すべて",
    tab_active: "未完",
    tab_completed: "完了",
    clear_completed: "完了したタスクを削除",
    edit: "編集",
    delete: "削除",
    save: "更新",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locale_aliases() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("jp".parse::<Locale>().unwrap(), Locale::Ja);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn remaining_pluralises_english() {
        assert_eq!(EN.remaining(1), "1 active task left");
        assert_eq!(EN.remaining(0), "0 active tasks left");
        assert_eq!(EN.remaining(3), "3 active tasks left");
    }

    #[test]
    fn remaining_japanese() {
        assert_eq!(JA.remaining(2), "未完タスク 2 件");
    }

    #[test]
    fn labels_match_locale() {
        assert_eq!(Locale::Ja.labels().locale, Locale::Ja);
        assert_eq!(Locale::default().labels().title, "Todo list");
    }
}
