use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use turnlog_core::{MarkerTable, Role};

/// One marker line in the YAML config. Role accepts "user", "assistant",
/// or the legacy "agent" spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub token: String,
    pub role: String,
}

/// Banner lines that wrap the conversation body in some raw dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banners {
    pub begin: String,
    pub end: String,
}

impl Default for Banners {
    fn default() -> Self {
        Banners {
            begin: "===== FULL TRANSCRIPT".to_string(),
            end: "===== END OF TRANSCRIPT".to_string(),
        }
    }
}

/// Caller-supplied parser configuration.
///
/// Different logs use different marker vocabularies (USER/GEMINI,
/// USER/AGENT, ...), so nothing here is baked into the library crates;
/// the default below is just the CLI's out-of-the-box vocabulary and is
/// replaced wholesale by `--markers <file>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub markers: Vec<MarkerSpec>,
    #[serde(default)]
    pub banners: Banners,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            markers: vec![
                MarkerSpec {
                    token: "USER".to_string(),
                    role: "user".to_string(),
                },
                MarkerSpec {
                    token: "GEMINI".to_string(),
                    role: "assistant".to_string(),
                },
                MarkerSpec {
                    token: "AGENT".to_string(),
                    role: "assistant".to_string(),
                },
            ],
            banners: Banners::default(),
        }
    }
}

impl MarkerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading marker config {}", path.display()))?;
        let config: MarkerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing marker config {}", path.display()))?;
        Ok(config)
    }

    /// Use the config file when given, the built-in vocabulary otherwise.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Validate and build the marker table. Unknown roles, duplicate
    /// tokens, and an empty list are all rejected here, before any
    /// scanning happens.
    pub fn table(&self) -> anyhow::Result<MarkerTable> {
        let mut entries: Vec<(String, Role)> = Vec::with_capacity(self.markers.len());
        for spec in &self.markers {
            let role: Role = spec
                .role
                .parse()
                .with_context(|| format!("marker token {:?}", spec.token))?;
            entries.push((spec.token.clone(), role));
        }
        let table = MarkerTable::new(entries)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, yaml: &str) -> std::path::PathBuf {
        let path = dir.join("markers.yaml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(yaml.as_bytes()).unwrap();
        path
    }

    #[test]
    fn default_config_builds_a_table() {
        let table = MarkerConfig::default().table().unwrap();
        assert_eq!(table.entries().len(), 3);
        assert_eq!(table.match_line("GEMINI: hi").unwrap().role, Role::Assistant);
    }

    #[test]
    fn load_yaml_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            "markers:\n  - token: USER\n    role: user\n  - token: AGENT\n    role: agent\n",
        );
        let config = MarkerConfig::load(&path).unwrap();
        let table = config.table().unwrap();
        assert_eq!(table.entries().len(), 2);
        // Legacy "agent" spelling normalizes to assistant.
        assert_eq!(table.match_line("AGENT: x").unwrap().role, Role::Assistant);
        // Banners fall back to the defaults when omitted.
        assert_eq!(config.banners.begin, "===== FULL TRANSCRIPT");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            "markers:\n  - token: SYSTEM\n    role: moderator\n",
        );
        let config = MarkerConfig::load(&path).unwrap();
        assert!(config.table().is_err());
    }

    #[test]
    fn empty_marker_list_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "markers: []\n");
        let config = MarkerConfig::load(&path).unwrap();
        assert!(config.table().is_err());
    }

    #[test]
    fn duplicate_token_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            "markers:\n  - token: USER\n    role: user\n  - token: USER\n    role: assistant\n",
        );
        let config = MarkerConfig::load(&path).unwrap();
        assert!(config.table().is_err());
    }
}
