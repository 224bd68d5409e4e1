use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::BoardPolicy;
use crate::store::IdPolicy;

/// Flags that can come from the command line or a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub legacy_ids: bool,
    pub validate_update: bool,
    pub keep_stale_selection: bool,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            legacy_ids: self.legacy_ids || other.legacy_ids,
            validate_update: self.validate_update || other.validate_update,
            keep_stale_selection: self.keep_stale_selection || other.keep_stale_selection,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    pub const fn id_policy(&self) -> IdPolicy {
        if self.legacy_ids {
            IdPolicy::Length
        } else {
            IdPolicy::Monotonic
        }
    }

    pub const fn board_policy(&self) -> BoardPolicy {
        BoardPolicy {
            validate_update: self.validate_update,
            clear_selection_on_delete: !self.keep_stale_selection,
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("noteboard").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("noteboard")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("noteboard").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("noteboard")
                .join("config");
        }
    }

    PathBuf::from(".noteboardrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".noteboardrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# noteboard defaults (saved with --save)".to_string()];
    if flags.legacy_ids {
        lines.push("--legacy-ids".to_string());
    }
    if flags.validate_update {
        lines.push("--validate-update".to_string());
    }
    if flags.keep_stale_selection {
        lines.push("--keep-stale-selection".to_string());
    }
    if let Some(log_file) = &flags.log_file {
        lines.push(format!("--log-file={}", log_file.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Split one config line into flag tokens.
///
/// A `--log-file` line keeps the rest of the line as its value, so paths
/// with spaces survive a save and reload.
fn line_tokens(line: &str) -> Vec<String> {
    if let Some(rest) = line.strip_prefix("--log-file")
        && (rest.starts_with('=') || rest.starts_with(char::is_whitespace))
    {
        let value = rest.strip_prefix('=').unwrap_or(rest).trim();
        return vec![format!("--log-file={value}")];
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

/// Pick known flags out of raw argv-style tokens; unknown tokens are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--legacy-ids" {
            flags.legacy_ids = true;
        } else if token == "--validate-update" {
            flags.validate_update = true;
        } else if token == "--keep-stale-selection" {
            flags.keep_stale_selection = true;
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
