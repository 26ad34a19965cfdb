//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pluggable";
const PROJECT_FILES: [&str; 2] = ["pluggable.toml", ".pluggable.toml"];
const ENV_PREFIX: &str = "PLUGGABLE_";

/// One place configuration may come from, for `--show-config`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub location: String,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PLUGGABLE_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./pluggable.toml` or `./.pluggable.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/pluggable/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(Path::new("."), config_path)
    }

    /// Same as [`ConfigLoader::load`], resolving project files in `project_dir`
    pub fn load_from(
        project_dir: &Path,
        config_path: Option<&PathBuf>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path_in(project_dir) {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Uses the platform config directory (`$XDG_CONFIG_HOME` on Linux).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_path_in(Path::new("."))
    }

    fn project_config_path_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Describe the config sources in priority order
    pub fn sources(config_path: Option<&PathBuf>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        sources.push(ConfigSource {
            label: "Env",
            location: format!("{}*", ENV_PREFIX),
            found: std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX)),
        });

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match Self::project_config_path() {
            Some(path) => ConfigSource {
                label: "Project",
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                label: "Project",
                location: PROJECT_FILES.map(|f| format!("./{}", f)).join(" or "),
                found: false,
            },
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                location: path.display().to_string(),
            });
        }

        sources.push(ConfigSource {
            label: "Default",
            location: "built-in defaults".to_string(),
            found: true,
        });

        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pluggable_domain::Money;
    use std::time::Duration;

    // Tests that call `load_from` run inside a `Jail`, which serializes them
    // and restores the environment afterwards.

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.report.format, "text");
        assert_eq!(config.notifications.channels, vec!["email"]);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.ends_with(Path::new("pluggable").join("config.toml")));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(".pluggable.toml", "[report]\nformat = \"html\"\n")?;

            let config = ConfigLoader::load_from(jail.directory(), None).map_err(|e| *e)?;
            assert_eq!(config.report.format, "html");
            assert_eq!(config.notifications.channels, vec!["email"]);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "pluggable.toml",
                "[report]\nformat = \"html\"\n\n[notifications]\nchannels = [\"sms\"]\n",
            )?;
            jail.create_file("override.toml", "[report]\nformat = \"json\"\n")?;
            let explicit = jail.directory().join("override.toml");

            let config =
                ConfigLoader::load_from(jail.directory(), Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.report.format, "json");
            assert_eq!(config.notifications.channels, vec!["sms"]);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[payment]\nmax_retry = \"many\"\n")?;
            let explicit = jail.directory().join("broken.toml");

            assert!(ConfigLoader::load_from(jail.directory(), Some(&explicit)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let missing = jail.directory().join("typo.toml");

            let err = ConfigLoader::load_from(jail.directory(), Some(&missing)).unwrap_err();
            assert!(err.to_string().contains("config file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "pluggable.toml",
                "[report]\nformat = \"html\"\n\n[payment]\nmax_amount = \"50.00\"\n",
            )?;
            jail.set_env("PLUGGABLE_REPORT__FORMAT", "csv");
            jail.set_env("PLUGGABLE_PAYMENT__MAX_AMOUNT", "250.00");
            jail.set_env("PLUGGABLE_PAYMENT__TIMEOUT_SECONDS", "5");

            let config = ConfigLoader::load_from(jail.directory(), None).map_err(|e| *e)?;
            assert_eq!(config.report.format, "csv");

            let params = config.payment.to_params().unwrap();
            assert_eq!(params.max_amount, Money::from_units(250));
            assert_eq!(params.timeout, Duration::from_secs(5));
            Ok(())
        });
    }

    #[test]
    fn test_sources_end_with_defaults() {
        let explicit = PathBuf::from("does-not-exist.toml");
        let sources = ConfigLoader::sources(Some(&explicit));
        let explicit_source = sources.iter().find(|s| s.label == "Explicit").unwrap();
        assert!(!explicit_source.found);
        assert_eq!(sources.last().map(|s| s.label), Some("Default"));
    }
}
