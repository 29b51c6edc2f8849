use std::path::{Path, PathBuf};

use anyhow::Context;
use lms_config::LmsConfig;

/// Load `.env` (if any) and then the layered configuration.
pub fn load_config() -> anyhow::Result<LmsConfig> {
    load_project_dotenv()?;
    LmsConfig::load().context("failed to load lmsadm configuration")
}

/// Prefer `.env` in the current directory, then the nearest ancestor that
/// holds an `.lms/` directory.
fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    if let Some(env_path) = find_dotenv(&cwd) {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn find_dotenv(start: &Path) -> Option<PathBuf> {
    let local = start.join(".env");
    if local.is_file() {
        return Some(local);
    }
    start
        .ancestors()
        .find(|dir| dir.join(".lms").is_dir())
        .map(|root| root.join(".env"))
        .filter(|path| path.is_file())
}
