use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub addr: String,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    model: Option<ModelSettings>,
    server: Option<ServerSettings>,
}

#[derive(Debug, Default, Deserialize)]
struct ModelSettings {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSettings {
    addr: Option<String>,
}

/// Loads settings from the environment with an optional TOML overlay.
///
/// The upstream credential is mandatory: `GOOGLE_API_KEY`, with
/// `GEMINI_API_KEY` accepted as a fallback. Model and bind address may be
/// overridden by `settings.toml` / `settings.local.toml` in the working
/// directory or by an explicit extra file.
pub fn load_settings(extra_path: Option<&Path>) -> Result<Settings> {
    let api_key = get_env("GOOGLE_API_KEY")
        .or_else(|| get_env("GEMINI_API_KEY"))
        .ok_or_else(|| anyhow!("GOOGLE_API_KEY environment variable is not set"))?;

    let mut settings = Settings {
        api_key,
        model: DEFAULT_MODEL.to_string(),
        addr: DEFAULT_ADDR.to_string(),
    };

    let mut ordered_paths = Vec::new();
    ordered_paths.push(PathBuf::from("settings.toml"));
    ordered_paths.push(PathBuf::from("settings.local.toml"));
    if let Some(extra) = extra_path {
        if !extra.exists() {
            return Err(anyhow!("settings file not found: {}", extra.display()));
        }
        ordered_paths.push(extra.to_path_buf());
    }

    for path in ordered_paths {
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            let parsed: SettingsFile = toml::from_str(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?;
            settings.merge(parsed);
        }
    }

    Ok(settings)
}

impl Settings {
    fn merge(&mut self, incoming: SettingsFile) {
        if let Some(model) = incoming.model
            && let Some(name) = model.name
            && !name.trim().is_empty()
        {
            self.model = name;
        }
        if let Some(server) = incoming.server
            && let Some(addr) = server.addr
            && !addr.trim().is_empty()
        {
            self.addr = addr;
        }
    }
}

fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let value = value.trim().to_string();
        if value.is_empty() { None } else { Some(value) }
    })
}
