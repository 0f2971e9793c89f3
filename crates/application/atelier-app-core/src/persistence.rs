use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::domain::StudioSettings;

const QUALIFIER: &str = "dev";
const ORG: &str = "atelier";
const APP: &str = "studio";

/// Settings live as pretty JSON under the platform config directory.
pub struct FilePersistence {
    root_override: Option<PathBuf>,
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePersistence {
    pub fn new() -> Self {
        Self {
            root_override: None,
        }
    }

    /// Pins the config directory, used by tests.
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            root_override: Some(root),
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        let dir = match &self.root_override {
            Some(root) => root.clone(),
            None => ProjectDirs::from(QUALIFIER, ORG, APP)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .config_dir()
                .to_path_buf(),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    fn settings_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("settings.json"))
    }

    pub fn load_settings(&self) -> Result<StudioSettings> {
        let path = self.settings_path()?;
        if !path.exists() {
            return Ok(StudioSettings::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read settings")?;
        let settings: StudioSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &StudioSettings) -> Result<()> {
        let path = self.settings_path()?;
        let json = serde_json::to_string_pretty(settings)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write settings")?;
        Ok(())
    }
}

/// Write-then-rename so a crash mid-write never truncates the settings file.
fn atomic_write(path: &std::path::Path, contents: &[u8]) -> Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {}", tmp_path.display()))?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path)
                .with_context(|| format!("Failed to replace {}", path.display()))
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_and_missing_file_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let persistence = FilePersistence::with_root(dir.path().to_path_buf());

        assert_eq!(
            persistence.load_settings().expect("load default"),
            StudioSettings::default()
        );

        let settings = StudioSettings {
            post_url: Some("http://127.0.0.1:9999/post".into()),
            ..Default::default()
        };
        persistence.save_settings(&settings).expect("save");
        assert_eq!(persistence.load_settings().expect("reload"), settings);
    }
}
