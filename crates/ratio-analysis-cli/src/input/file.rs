use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialization format of an input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                FileFormat::Yaml
            }
            _ => FileFormat::Json,
        }
    }
}

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    read_as(path, FileFormat::Json)
}

/// Read a JSON or YAML file, picking the parser from the extension.
pub fn read_any<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    read_as(path, FileFormat::from_path(Path::new(path)))
}

fn read_as<T: DeserializeOwned>(
    path: &str,
    format: FileFormat,
) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let parsed = match format {
        FileFormat::Json => serde_json::from_str(&contents).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::from_str(&contents).map_err(|e| e.to_string()),
    };
    let value: T = parsed.map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Resolve the path against the working directory and require a regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
