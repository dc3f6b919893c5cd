// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

/// Store location when neither `SDIRS` nor `PREFIX` is set.
pub const FALLBACK_PREFIX: &str = "/data/data/com.termux/files/usr";

/// Store location relative to the prefix.
pub const STORE_SUBPATH: &str = "etc/sdirs";

pub const DEFAULT_SHELL: &str = "bash";

pub const ENV_STORE: &str = "SDIRS";
pub const ENV_PREFIX: &str = "PREFIX";
pub const ENV_SHELL: &str = "BM_SHELL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path to the bookmark store file
    pub store_path: PathBuf,

    /// Program started as interactive shell on "go"
    pub shell: String,
}

/// Config file content; every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

/// Environment variables relevant to the configuration. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvInputs {
    pub store: Option<String>,
    pub prefix: Option<String>,
    pub shell: Option<String>,
}

impl EnvInputs {
    pub fn from_env() -> Self {
        Self {
            store: non_empty_var(ENV_STORE),
            prefix: non_empty_var(ENV_PREFIX),
            shell: non_empty_var(ENV_SHELL),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Resolves the store file.
///
/// Precedence:
/// 1. `SDIRS`
/// 2. `store_path` from the config file
/// 3. `$PREFIX/etc/sdirs`
/// 4. `/data/data/com.termux/files/usr/etc/sdirs`
pub fn resolve_store_path(
    store: Option<&str>,
    configured: Option<&Path>,
    prefix: Option<&str>,
) -> PathBuf {
    if let Some(store) = store.filter(|s| !s.is_empty()) {
        return PathBuf::from(store);
    }
    if let Some(configured) = configured {
        return configured.to_path_buf();
    }
    let prefix = prefix.filter(|p| !p.is_empty()).unwrap_or(FALLBACK_PREFIX);
    Path::new(prefix).join(STORE_SUBPATH)
}

/// `BM_SHELL` before the config file before `bash`.
pub fn resolve_shell(env_shell: Option<&str>, configured: Option<&str>) -> String {
    env_shell
        .filter(|s| !s.is_empty())
        .or(configured.filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_SHELL)
        .to_string()
}

impl Settings {
    /// Settings from environment inputs and an optional config file layer.
    pub fn resolve(env: &EnvInputs, file: &FileSettings) -> DomainResult<Self> {
        let configured = file
            .store_path
            .as_deref()
            .map(expand_path)
            .transpose()?;
        Ok(Self {
            store_path: resolve_store_path(
                env.store.as_deref(),
                configured.as_deref(),
                env.prefix.as_deref(),
            ),
            shell: resolve_shell(env.shell.as_deref(), file.shell.as_deref()),
        })
    }

    /// Settings ignoring any config file.
    pub fn from_env() -> Self {
        let env = EnvInputs::from_env();
        Self {
            store_path: resolve_store_path(env.store.as_deref(), None, env.prefix.as_deref()),
            shell: resolve_shell(env.shell.as_deref(), None),
        }
    }
}

fn expand_path(raw: &str) -> DomainResult<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| DomainError::Config(format!("Cannot expand store_path '{}': {}", raw, e)))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/bm/config.toml"))
}

pub fn read_config_file(path: &Path) -> DomainResult<FileSettings> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;
    toml::from_str(&text).map_err(|e| {
        DomainError::Config(format!("Cannot parse config file {}: {}", path.display(), e))
    })
}

/// Loads settings: defaults, then the config file, then environment variables.
///
/// An explicitly given `config_path` must exist; the default location is optional.
#[instrument(level = "debug")]
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let file = match config_path {
        Some(path) => read_config_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                trace!("Loading config from: {:?}", path);
                read_config_file(&path)?
            }
            None => FileSettings::default(),
        },
    };

    let settings = Settings::resolve(&EnvInputs::from_env(), &file)?;
    debug!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config(settings: &Settings) -> String {
    let file = FileSettings {
        store_path: Some(settings.store_path.display().to_string()),
        shell: Some(settings.shell.clone()),
    };
    toml::to_string_pretty(&file)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config_file(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn given_sdirs_when_resolve_store_path_then_sdirs_wins() {
        let path = resolve_store_path(Some("/x/sdirs"), Some(Path::new("/cfg")), Some("/usr"));
        assert_eq!(path, PathBuf::from("/x/sdirs"));
    }

    #[test]
    fn given_config_value_when_resolve_store_path_then_before_prefix() {
        let path = resolve_store_path(None, Some(Path::new("/cfg/sdirs")), Some("/usr"));
        assert_eq!(path, PathBuf::from("/cfg/sdirs"));
    }

    #[test]
    fn given_prefix_only_when_resolve_store_path_then_joined() {
        let path = resolve_store_path(None, None, Some("/opt/local"));
        assert_eq!(path, PathBuf::from("/opt/local/etc/sdirs"));
    }

    #[test]
    fn given_nothing_when_resolve_store_path_then_fallback() {
        assert_eq!(
            resolve_store_path(None, None, None),
            PathBuf::from("/data/data/com.termux/files/usr/etc/sdirs")
        );
        assert_eq!(
            resolve_store_path(Some(""), None, Some("")),
            PathBuf::from("/data/data/com.termux/files/usr/etc/sdirs")
        );
    }

    #[test]
    fn given_shell_sources_when_resolve_shell_then_precedence() {
        assert_eq!(resolve_shell(Some("zsh"), Some("fish")), "zsh");
        assert_eq!(resolve_shell(None, Some("fish")), "fish");
        assert_eq!(resolve_shell(None, None), "bash");
    }

    #[test]
    fn given_file_store_path_with_tilde_when_resolve_then_expanded() {
        let env = EnvInputs::default();
        let file = FileSettings {
            store_path: Some("~/sdirs".to_string()),
            shell: None,
        };

        let settings = Settings::resolve(&env, &file).unwrap();

        assert!(!settings.store_path.to_string_lossy().contains('~'));
        assert!(settings.store_path.ends_with("sdirs"));
        assert_eq!(settings.shell, "bash");
    }

    #[test]
    #[serial]
    fn given_environment_when_load_settings_then_env_overrides_file() {
        let _guard = EnvGuard::new();
        env::set_var("SDIRS", "/env/sdirs");
        env::set_var("BM_SHELL", "zsh");
        let (_dir, config_path) = create_temp_config_file(
            r#"
            store_path = "/config/sdirs"
            shell = "fish"
            "#,
        );

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.store_path, PathBuf::from("/env/sdirs"));
        assert_eq!(settings.shell, "zsh");
    }

    #[test]
    #[serial]
    fn given_config_file_only_when_load_settings_then_file_values_used() {
        let _guard = EnvGuard::new();
        env::remove_var("SDIRS");
        env::remove_var("BM_SHELL");
        env::set_var("PREFIX", "/prefix");
        let (_dir, config_path) = create_temp_config_file(
            r#"
            store_path = "/config/sdirs"
            shell = "fish"
            "#,
        );

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.store_path, PathBuf::from("/config/sdirs"));
        assert_eq!(settings.shell, "fish");
    }

    #[test]
    #[serial]
    fn given_prefix_env_when_from_env_then_prefix_path() {
        let _guard = EnvGuard::new();
        env::remove_var("SDIRS");
        env::remove_var("BM_SHELL");
        env::set_var("PREFIX", "/prefix");

        let settings = Settings::from_env();

        assert_eq!(settings.store_path, PathBuf::from("/prefix/etc/sdirs"));
        assert_eq!(settings.shell, "bash");
    }

    #[test]
    #[serial]
    fn given_missing_explicit_config_when_load_settings_then_error() {
        let _guard = EnvGuard::new();
        let result = load_settings(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    #[serial]
    fn given_broken_toml_when_load_settings_then_error() {
        let _guard = EnvGuard::new();
        let (_dir, config_path) = create_temp_config_file("store_path = [");
        assert!(matches!(
            load_settings(Some(&config_path)),
            Err(DomainError::Config(_))
        ));
    }

    #[test]
    fn given_settings_when_generate_default_config_then_parsable_toml() {
        let settings = Settings {
            store_path: PathBuf::from("/tmp/sdirs"),
            shell: "bash".to_string(),
        };

        let text = generate_default_config(&settings);
        let parsed: FileSettings = toml::from_str(&text).unwrap();

        assert_eq!(parsed.store_path.as_deref(), Some("/tmp/sdirs"));
        assert_eq!(parsed.shell.as_deref(), Some("bash"));
    }
}
