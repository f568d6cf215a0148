use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Mount point to measure when none is given on the command line.
    pub mount_point: String,
    /// Color theme: default, dracula, gruvbox, nord
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Usage percentage where the gauge turns orange (and --check warns).
    pub warn_pct: f64,
    /// Usage percentage where the gauge turns red (and --check goes critical).
    pub crit_pct: f64,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            general:    GeneralConfig::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { mount_point: "/".to_string(), theme: "default".to_string() }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { warn_pct: 85.0, crit_pct: 95.0 }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dspace").join("dspace.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# dspace configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.general.mount_point, "/");
        assert_eq!(cfg.general.theme, "default");
        assert!(cfg.thresholds.warn_pct < cfg.thresholds.crit_pct);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.general.mount_point, "/");
        assert_eq!(cfg.thresholds.crit_pct, 95.0);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let cfg: Config = toml::from_str(
            "[general]\nmount_point = \"/data\"\ntheme = \"nord\"\n",
        ).unwrap();
        assert_eq!(cfg.general.mount_point, "/data");
        assert_eq!(cfg.general.theme, "nord");
        assert_eq!(cfg.thresholds.warn_pct, 85.0);
    }

    #[test]
    fn round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.general.mount_point, "/");
        assert_eq!(back.thresholds.warn_pct, 85.0);
    }
}
