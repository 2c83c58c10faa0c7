//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::generated::{GeneratedBank, Sequence};

/// A generated deck listed in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDeckConfig {
    /// Rule that produces question and answer text.
    #[serde(flatten)]
    pub sequence: Sequence,
    /// How many terms (`1..=count`) to ask about.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl GeneratedDeckConfig {
    pub fn build(&self) -> GeneratedBank {
        GeneratedBank::new(self.sequence, self.count)
    }

    /// Menu title, e.g. "Cubes (1-10)".
    pub fn title(&self) -> String {
        format!("{} (1-{})", self.sequence, self.count)
    }
}

fn default_count() -> u32 {
    10
}

/// Top-level studydeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Directory scanned for `*.txt` decks.
    #[serde(default = "default_deck_dir")]
    pub deck_dir: PathBuf,
    /// When set, each finished session writes a JSON report here.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
    /// Procedurally generated decks offered alongside the file decks.
    #[serde(default = "default_generated")]
    pub generated: Vec<GeneratedDeckConfig>,
}

fn default_deck_dir() -> PathBuf {
    PathBuf::from("decks")
}

fn default_generated() -> Vec<GeneratedDeckConfig> {
    vec![
        GeneratedDeckConfig {
            sequence: Sequence::Squares,
            count: default_count(),
        },
        GeneratedDeckConfig {
            sequence: Sequence::Cubes,
            count: default_count(),
        },
    ]
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            deck_dir: default_deck_dir(),
            report_dir: None,
            generated: default_generated(),
        }
    }
}

/// Expand `${NAME}` references from the environment in one left-to-right
/// pass. Substituted text is never rescanned. Unset variables expand to
/// nothing; an unterminated `${` is kept literally.
fn expand_env_refs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        if !name.is_empty() && !name.contains(['=', '\0']) {
            if let Ok(value) = std::env::var(name) {
                out.push_str(&value);
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_refs(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studydeck.toml` in the current directory
/// 2. `~/.config/studydeck/config.toml`
///
/// Environment variable overrides: `STUDYDECK_DECK_DIR`, `STUDYDECK_REPORT_DIR`.
pub fn load_config() -> Result<StudyConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studydeck.toml");
        if local.exists() {
            Some(local)
        } else {
            user_config_file().filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<StudyConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => StudyConfig::default(),
    };

    if let Ok(dir) = std::env::var("STUDYDECK_DECK_DIR") {
        config.deck_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("STUDYDECK_REPORT_DIR") {
        config.report_dir = Some(PathBuf::from(dir));
    }

    config.deck_dir = resolve_path(&config.deck_dir);
    config.report_dir = config.report_dir.as_deref().map(resolve_path);

    Ok(config)
}

/// `$HOME/.config/studydeck/config.toml`, when `HOME` is set.
fn user_config_file() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(Path::new(&home).join(".config/studydeck/config.toml"))
}
