use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the soon directory - checks for local .soon first, then falls back to global ~/.soon
pub fn get_soon_dir() -> Result<PathBuf> {
    // Check for local .soon directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_soon(&current_dir) {
        return Ok(local_dir);
    }

    // Fall back to global ~/.soon
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".soon"))
}

/// Find local .soon directory by walking up the directory tree
fn find_local_soon(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let soon_dir = current.join(".soon");
        if soon_dir.exists() && soon_dir.is_dir() {
            return Some(soon_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the soon directory exists
pub fn ensure_soon_dir() -> Result<PathBuf> {
    let dir = get_soon_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .soon directory in the current directory
pub fn init_local_soon() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let soon_dir = current_dir.join(".soon");

    if soon_dir.exists() {
        anyhow::bail!("Soon directory already exists: {}", soon_dir.display());
    }

    fs::create_dir_all(&soon_dir)
        .with_context(|| format!("Failed to create directory: {}", soon_dir.display()))?;

    Ok(soon_dir)
}

/// Get path to state.json (the event key-value store)
pub fn state_file() -> Result<PathBuf> {
    Ok(ensure_soon_dir()?.join("state.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
