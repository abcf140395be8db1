use serde::Deserialize;
use std::path::Path;

/// CLI configuration loaded from environment variables or TOML file.
///
/// Only presentation-adjacent knobs live here; normalization itself takes
/// no configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Column label for the date axis of the emitted chart table.
    #[serde(default = "default_date_label")]
    pub date_label: String,
    /// Column label for the view-count column.
    #[serde(default = "default_views_label")]
    pub views_label: String,
    /// Pretty-print the emitted JSON (default: false).
    #[serde(default)]
    pub pretty: bool,
}

fn default_date_label() -> String {
    "Date".to_string()
}

fn default_views_label() -> String {
    "Views".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_label: default_date_label(),
            views_label: default_views_label(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults.
    ///
    /// Environment variables override file values:
    /// - `MEDIA_ANALYTICS_DATE_LABEL` → date_label
    /// - `MEDIA_ANALYTICS_VIEWS_LABEL` → views_label
    /// - `MEDIA_ANALYTICS_PRETTY` → pretty
    pub fn load(config_path: Option<&Path>) -> Self {
        let mut config =
            config_path.map_or_else(Self::default, |path| match std::fs::read_to_string(path) {
                Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                    tracing::warn!("Failed to parse config file: {e}, using defaults");
                    Self::default()
                }),
                Err(e) => {
                    tracing::warn!("Failed to read config file: {e}, using defaults");
                    Self::default()
                }
            });

        // Environment variable overrides
        if let Ok(label) = std::env::var("MEDIA_ANALYTICS_DATE_LABEL") {
            config.date_label = label;
        }
        if let Ok(label) = std::env::var("MEDIA_ANALYTICS_VIEWS_LABEL") {
            config.views_label = label;
        }
        if let Ok(val) = std::env::var("MEDIA_ANALYTICS_PRETTY") {
            config.pretty = val != "0" && val.to_lowercase() != "false";
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    /// Mutex to serialize tests that call `Config::load`, which reads
    /// environment variables. Without this, `test_env_var_overrides` can
    /// pollute other tests running in parallel.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.date_label, "Date");
        assert_eq!(config.views_label, "Views");
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_from_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        write!(
            file,
            r#"
date_label = "Day"
views_label = "Plays"
pretty = true
"#
        )
        .unwrap();

        let config = Config::load(Some(&config_path));
        assert_eq!(config.date_label, "Day");
        assert_eq!(config.views_label, "Plays");
        assert!(config.pretty);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert_eq!(config.date_label, "Date");
    }

    #[test]
    fn test_load_no_path_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = Config::load(None);
        assert_eq!(config.views_label, "Views");
        assert!(!config.pretty);
    }

    #[test]
    fn test_env_var_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();

        // Save original values
        let orig_label = std::env::var("MEDIA_ANALYTICS_VIEWS_LABEL").ok();

        std::env::set_var("MEDIA_ANALYTICS_VIEWS_LABEL", "Plays");
        let config = Config::load(None);
        assert_eq!(config.views_label, "Plays");

        // Restore
        match orig_label {
            Some(v) => std::env::set_var("MEDIA_ANALYTICS_VIEWS_LABEL", v),
            None => std::env::remove_var("MEDIA_ANALYTICS_VIEWS_LABEL"),
        }
    }

    #[test]
    fn test_invalid_toml_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "this is not valid toml {{{").unwrap();

        let config = Config::load(Some(&config_path));
        assert_eq!(config.date_label, "Date");
    }
}
