//! Env file loading. Process env always wins: dotenvy never overrides a set variable,
//! so files loaded first take precedence over files loaded later.
//!
//! Order: 1) `.todo/env` in cwd or nearest parent  2) `.env` in cwd or nearest parent  3) `~/.todo/env`

use std::path::{Path, PathBuf};

use todo_constant::app::{DATA_DIR, ENV_FILE};

/// How many parent directories are searched.
const MAX_DEPTH: usize = 32;

/// First `dir/rel` that exists, walking from `start` up through its parents.
pub fn find_upwards(start: &Path, rel: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_DEPTH)
        .map(|dir| dir.join(rel))
        .find(|candidate| candidate.is_file())
}

/// Env files to load, highest precedence first.
pub fn env_files(cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    let project_env = Path::new(DATA_DIR).join(ENV_FILE);
    let mut files = Vec::new();
    if let Some(cwd) = cwd {
        files.extend(find_upwards(cwd, &project_env));
        files.extend(find_upwards(cwd, Path::new(".env")));
    }
    if let Some(home) = home {
        let global = home.join(DATA_DIR).join(ENV_FILE);
        if global.is_file() && !files.contains(&global) {
            files.push(global);
        }
    }
    files
}

/// Load env files into the process environment.
pub fn load_env() {
    let cwd = std::env::current_dir().ok();
    let home = dirs::home_dir();
    for path in env_files(cwd.as_deref(), home.as_deref()) {
        // unreadable files are skipped; logging is not up yet
        let _ = dotenvy::from_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_env_in_parent() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(".env"), "TODO_VARIANT=basic\n").unwrap();
        let found = find_upwards(&nested, Path::new(".env")).unwrap();
        assert_eq!(found, root.path().join(".env"));
    }

    #[test]
    fn nearest_file_wins() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(".env"), "").unwrap();
        fs::write(nested.join(".env"), "").unwrap();
        assert_eq!(find_upwards(&nested, Path::new(".env")), Some(nested.join(".env")));
    }

    #[test]
    fn order_is_project_dotenv_then_home() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(project.path().join(".todo")).unwrap();
        fs::write(project.path().join(".todo").join("env"), "").unwrap();
        fs::write(project.path().join(".env"), "").unwrap();
        fs::create_dir_all(home.path().join(".todo")).unwrap();
        fs::write(home.path().join(".todo").join("env"), "").unwrap();

        let files = env_files(Some(project.path()), Some(home.path()));
        assert_eq!(
            files,
            [
                project.path().join(".todo").join("env"),
                project.path().join(".env"),
                home.path().join(".todo").join("env"),
            ]
        );
    }

    #[test]
    fn missing_files_are_skipped() {
        let empty = tempfile::tempdir().unwrap();
        assert!(env_files(None, Some(empty.path())).is_empty());
    }
}
