use std::{
    fs::{self, File},
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use walkdir::WalkDir;

const MAX_UNIQUE_DIR_ATTEMPTS: u32 = 1000;

/// Lists regular files under `dir_path`, sorted by path. A missing directory
/// yields an empty list.
pub fn list_files<P: AsRef<Path>>(dir_path: P, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    let dir_path = dir_path.as_ref();
    if !dir_path.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(dir_path).max_depth(if recursive { usize::MAX } else { 1 }) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Writes through a temp file and a rename, so readers never see a partial file.
pub fn write<P: AsRef<Path>>(file_path: P, contents: impl AsRef<[u8]>) -> std::io::Result<()> {
    let file_path = file_path.as_ref();
    let parent_dir = file_path.parent().ok_or_else(|| {
        std::io::Error::new(
            ErrorKind::InvalidInput,
            "File path has no parent directory",
        )
    })?;

    let temp_path = create_temp_file_path(parent_dir);

    if let Err(err) = fs::write(&temp_path, contents.as_ref()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    if let Err(err) = fs::rename(&temp_path, file_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}

/// Write atomically, creating all leading directories.
pub fn create_dirs_then_write<P: AsRef<Path>>(
    file_path: P,
    contents: impl AsRef<[u8]>,
) -> std::io::Result<()> {
    let file_path = file_path.as_ref();

    if let Some(parent_dir) = file_path.parent()
        && !parent_dir.as_os_str().is_empty()
    {
        fs::create_dir_all(parent_dir)?;
    }

    write(file_path, contents)
}

/// Creates a fresh directory `parent/name`. When that name is taken the
/// directory is created as `name_2`, `name_3`, ... instead; an existing
/// directory is never reused.
pub fn create_unique_dir(parent: &Path, name: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(parent)?;

    for attempt in 1..=MAX_UNIQUE_DIR_ATTEMPTS {
        let candidate = if attempt == 1 {
            parent.join(name)
        } else {
            parent.join(format!("{name}_{attempt}"))
        };

        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!("{} already exists, trying next suffix", candidate.display());
            }
            Err(err) => return Err(err),
        }
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!(
            "no free directory name for '{name}' in {} after {MAX_UNIQUE_DIR_ATTEMPTS} attempts",
            parent.display()
        ),
    ))
}

fn create_temp_file_path(dir: &Path) -> PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    let process_id = std::process::id();
    let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);
    let temp_name = format!(".tmp_{}__{}_{}", process_id, timestamp, sequence);

    dir.join(temp_name)
}

pub fn read_toml_file_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => return Err(err.into()),
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let value: T =
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(value)
}
