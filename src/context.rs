use std::path::{Path, PathBuf};

use crate::config::Config;

/// Directories resolved from the declaration, shared across steps
pub struct Context {
    pub root_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Context {
    pub fn new(project_dir: &Path, cfg: &Config) -> Self {
        let root = cfg.root.clone().unwrap_or("src".into());
        let output = cfg.output.clone().unwrap_or("dist".into());

        Self {
            root_dir: project_dir.join(root),
            output_dir: project_dir.join(output),
        }
    }
}
