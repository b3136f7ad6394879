use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::source::fs::{FileSource, DEFAULT_PAPERS_PATH};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SHELF_DIR: &str = ".papershelf";

pub struct ShelfContext {
    pub api: ShelfApi<FileSource>,
    pub config: ShelfConfig,
    pub config_dir: PathBuf,
    pub root: PathBuf,
}

/// Find the project root by walking up from cwd looking for a directory that has
/// either a `.papershelf` directory or a `papers/papers.json` document.
/// Returns None if nothing matches before reaching home or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(SHELF_DIR).is_dir() || current.join(DEFAULT_PAPERS_PATH).is_file() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Where configuration lives: the project's `.papershelf`, else the user config dir.
fn config_dir_for(root: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(root) = root {
        return root.join(SHELF_DIR);
    }
    ProjectDirs::from("org", "papershelf", "papershelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(SHELF_DIR))
}

/// Builds the API for the collection around `cwd`. `papers_override` replaces the
/// configured document path; relative paths resolve against `cwd`.
pub fn initialize(cwd: &Path, papers_override: Option<&Path>) -> Result<ShelfContext> {
    let found = find_project_root(cwd);
    let root = found.clone().unwrap_or_else(|| cwd.to_path_buf());
    let config_dir = config_dir_for(found.as_deref(), cwd);
    let config = ShelfConfig::load(&config_dir)?;

    let papers_path = match papers_override {
        Some(path) => cwd.join(path),
        None => root.join(&config.papers_path),
    };
    debug!(
        root = %root.display(),
        config_dir = %config_dir.display(),
        papers = %papers_path.display(),
        "initialized context"
    );

    let api = ShelfApi::new(FileSource::new(papers_path), config.clone());
    Ok(ShelfContext {
        api,
        config,
        config_dir,
        root,
    })
}
