//! Tests for configuration file loading.

use super::*;
use crate::table::schema::{EARNINGS, PROJECT, REGION};
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_classview_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("classview") && path_str.ends_with("config.toml"),
        "Path should contain 'classview' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_classview_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("classview.log"),
        "got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None), "Missing config file is not an error");
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp(
        "classview_test_config.toml",
        r#"
rows_per_page = 50
sort_column = 11
sort_direction = "desc"
no_color = true
log_file_path = "/tmp/classview-test.log"
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.rows_per_page, Some(50));
    assert_eq!(config.sort_column, Some(EARNINGS));
    assert_eq!(config.sort_direction, Some(SortDirection::Desc));
    assert_eq!(config.no_color, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/classview-test.log"))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp("classview_test_invalid.toml", "rows_per_page = [unclosed");

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "deny_unknown_fields should reject 'theme'");
}

#[test]
fn config_file_rejects_unknown_sort_direction() {
    let result: Result<ConfigFile, _> = toml::from_str("sort_direction = \"up\"");
    assert!(result.is_err());
}

#[test]
fn config_file_accepts_reserved_keybindings_table() {
    let config: ConfigFile = toml::from_str("[keybindings]\nquit = \"x\"\n").unwrap();
    assert!(config.keybindings.is_some());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_takes_valid_file_values() {
    let resolved = merge_config(Some(ConfigFile {
        rows_per_page: Some(100),
        sort_column: Some(PROJECT),
        no_color: Some(true),
        ..ConfigFile::default()
    }));

    assert_eq!(resolved.rows_per_page, 100);
    assert_eq!(
        resolved.sort,
        Some(SortSpec {
            column: PROJECT,
            direction: SortDirection::Asc
        })
    );
    assert!(resolved.no_color);
}

#[test]
fn merge_config_ignores_invalid_values() {
    let resolved = merge_config(Some(ConfigFile {
        rows_per_page: Some(25),
        sort_column: Some(REGION),
        ..ConfigFile::default()
    }));

    assert_eq!(resolved.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    assert_eq!(resolved.sort, None);
}

#[test]
fn merge_config_direction_without_column_has_no_effect() {
    let resolved = merge_config(Some(ConfigFile {
        sort_direction: Some(SortDirection::Desc),
        ..ConfigFile::default()
    }));
    assert_eq!(resolved.sort, None);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(classview_rows_per_page)]
fn apply_env_overrides_respects_rows_per_page() {
    let _guard = EnvGuard::new(ROWS_PER_PAGE_ENV_VAR);
    env::set_var(ROWS_PER_PAGE_ENV_VAR, "200");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.rows_per_page, 200);
}

#[test]
#[serial(classview_rows_per_page)]
fn apply_env_overrides_keeps_previous_layer_on_invalid_value() {
    let _guard = EnvGuard::new(ROWS_PER_PAGE_ENV_VAR);
    let base = ResolvedConfig {
        rows_per_page: 50,
        ..ResolvedConfig::default()
    };

    env::set_var(ROWS_PER_PAGE_ENV_VAR, "7");
    assert_eq!(apply_env_overrides(base.clone()).rows_per_page, 50);

    env::set_var(ROWS_PER_PAGE_ENV_VAR, "lots");
    assert_eq!(apply_env_overrides(base).rows_per_page, 50);
}

#[test]
#[serial(classview_rows_per_page)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ROWS_PER_PAGE_ENV_VAR);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(classview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = write_temp("classview_explicit.toml", "rows_per_page = 10");
    let from_env = write_temp("classview_env.toml", "rows_per_page = 500");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();

    assert_eq!(config.rows_per_page, Some(10));
}

#[test]
#[serial(classview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = write_temp("classview_env_only.toml", "no_color = true");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    fs::remove_file(from_env).ok();

    assert_eq!(config.no_color, Some(true));
}

#[test]
#[serial(classview_config)]
fn load_config_with_precedence_env_var_to_missing_file_is_none() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/classview/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig {
        rows_per_page: 50,
        sort: Some(SortSpec {
            column: PROJECT,
            direction: SortDirection::Asc,
        }),
        ..ResolvedConfig::default()
    };
    assert_eq!(apply_cli_overrides(base.clone(), None, None, false, false), base);
}

#[test]
fn apply_cli_overrides_sort_and_page_size() {
    let result = apply_cli_overrides(ResolvedConfig::default(), Some(10), Some(EARNINGS), true, true);

    assert_eq!(result.rows_per_page, 10);
    assert_eq!(
        result.sort,
        Some(SortSpec {
            column: EARNINGS,
            direction: SortDirection::Desc
        })
    );
    assert!(result.no_color);
}

#[test]
fn apply_cli_desc_alone_flips_configured_sort() {
    let base = ResolvedConfig {
        sort: Some(SortSpec {
            column: PROJECT,
            direction: SortDirection::Asc,
        }),
        ..ResolvedConfig::default()
    };
    let result = apply_cli_overrides(base, None, None, true, false);
    assert_eq!(result.sort.map(|s| s.direction), Some(SortDirection::Desc));
}

#[test]
fn apply_cli_desc_alone_without_sort_is_noop() {
    let result = apply_cli_overrides(ResolvedConfig::default(), None, None, true, false);
    assert_eq!(result.sort, None);
}

#[test]
#[serial(classview_rows_per_page)]
fn precedence_chain_file_env_cli() {
    let _guard = EnvGuard::new(ROWS_PER_PAGE_ENV_VAR);
    let file = ConfigFile {
        rows_per_page: Some(50),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(file));
    assert_eq!(merged.rows_per_page, 50);

    env::set_var(ROWS_PER_PAGE_ENV_VAR, "100");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.rows_per_page, 100);

    let with_cli = apply_cli_overrides(with_env, Some(500), None, false, false);
    assert_eq!(with_cli.rows_per_page, 500);
}
