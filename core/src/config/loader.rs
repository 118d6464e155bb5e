use std::path::{Path, PathBuf};

use super::types::AppConfig;

pub const ENV_OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_API_KEY: &str = "TASKWISE_API_KEY";
pub const ENV_BASE_URL: &str = "TASKWISE_BASE_URL";
pub const ENV_MODEL: &str = "TASKWISE_MODEL";
pub const ENV_PORT: &str = "TASKWISE_PORT";

/// Get the default taskwise data directory: ~/.taskwise
pub fn get_taskwise_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".taskwise"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    load(None)
}

/// Loads `.env` files, then `explicit` (or the default search path), then
/// environment overrides.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    // .env files never override variables already present in the process.
    let _ = dotenvy::dotenv();
    let data_dir = get_taskwise_data_dir().ok();
    if let Some(dir) = data_dir.as_ref() {
        let _ = dotenvy::from_path(dir.join(".env"));
    }

    let cwd = std::env::current_dir()?;
    let mut cfg = resolve_config(data_dir.as_deref(), &cwd, explicit)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

/// Picks the config file: `explicit` if given, else `<data_dir>/config.toml`,
/// else `<cwd>/config.toml`, else built-in defaults.
pub fn resolve_config(
    data_dir: Option<&Path>,
    cwd: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    let user_config = data_dir.map(|d| d.join("config.toml"));
    let local_config = cwd.join("config.toml");
    match user_config.filter(|p| p.exists()) {
        Some(path) => load_from_path(&path),
        None if local_config.exists() => load_from_path(&local_config),
        None => Ok(AppConfig::default()),
    }
}

/// Environment variables take precedence over the config file. Blank values
/// are ignored; a port that does not parse is an error.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(ENV_API_KEY).or_else(|| get(ENV_OPENROUTER_API_KEY)) {
        cfg.completion.api_key = v;
    }
    if let Some(v) = get(ENV_BASE_URL) {
        cfg.completion.base_url = v;
    }
    if let Some(v) = get(ENV_MODEL) {
        cfg.completion.model = v;
    }
    if let Some(v) = get(ENV_PORT) {
        cfg.http_server.port = v
            .trim()
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("invalid {ENV_PORT}={v}: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[completion]\nmodel = \"other/model\"\n\n[schedule]\nstart_time = \"9 am\""
        )
        .unwrap();
        let cfg = load_from_path(file.path()).unwrap();
        assert_eq!(cfg.completion.model, "other/model");
        assert_eq!(cfg.schedule.start_time, "9 am");
        assert_eq!(cfg.http_server.port, 3000);
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[completion\nmodel = 1").unwrap();
        let err = load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_env_overrides() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(
            &mut cfg,
            lookup_from(&[
                (ENV_OPENROUTER_API_KEY, "or-key"),
                (ENV_BASE_URL, "http://localhost:9999/v1"),
                (ENV_MODEL, "  "),
                (ENV_PORT, "4000"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.completion.api_key, "or-key");
        assert_eq!(cfg.completion.base_url, "http://localhost:9999/v1");
        assert_eq!(cfg.completion.model, "deepseek/deepseek-chat-v3-0324:free");
        assert_eq!(cfg.http_server.port, 4000);
    }

    #[test]
    fn test_taskwise_key_beats_openrouter_key() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(
            &mut cfg,
            lookup_from(&[(ENV_OPENROUTER_API_KEY, "a"), (ENV_API_KEY, "b")]),
        )
        .unwrap();
        assert_eq!(cfg.completion.api_key, "b");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut cfg = AppConfig::default();
        let err = apply_env_overrides(&mut cfg, lookup_from(&[(ENV_PORT, "http")])).unwrap_err();
        assert!(err.to_string().contains(ENV_PORT));
        assert_eq!(cfg.http_server.port, 3000);
    }

    fn write_config(dir: &Path, model: &str) -> PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, format!("[completion]\nmodel = \"{model}\"\n")).unwrap();
        path
    }

    #[test]
    fn test_resolve_prefers_data_dir_over_cwd() {
        let data = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_config(data.path(), "user/model");
        write_config(cwd.path(), "local/model");

        let cfg = resolve_config(Some(data.path()), cwd.path(), None).unwrap();
        assert_eq!(cfg.completion.model, "user/model");
    }

    #[test]
    fn test_resolve_falls_back_to_cwd() {
        let data = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_config(cwd.path(), "local/model");

        let cfg = resolve_config(Some(data.path()), cwd.path(), None).unwrap();
        assert_eq!(cfg.completion.model, "local/model");

        let cfg = resolve_config(None, cwd.path(), None).unwrap();
        assert_eq!(cfg.completion.model, "local/model");
    }

    #[test]
    fn test_resolve_defaults_when_nothing_found() {
        let data = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        let cfg = resolve_config(Some(data.path()), cwd.path(), None).unwrap();
        assert_eq!(cfg.completion.model, "deepseek/deepseek-chat-v3-0324:free");
        assert_eq!(cfg.http_server.port, 3000);
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let data = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        write_config(data.path(), "user/model");
        write_config(cwd.path(), "local/model");
        let explicit = write_config(other.path(), "explicit/model");

        let cfg = resolve_config(Some(data.path()), cwd.path(), Some(&explicit)).unwrap();
        assert_eq!(cfg.completion.model, "explicit/model");
    }

    #[test]
    fn test_resolve_missing_explicit_path_is_an_error() {
        let cwd = tempfile::tempdir().unwrap();
        write_config(cwd.path(), "local/model");
        let missing = cwd.path().join("nope.toml");

        let err = resolve_config(None, cwd.path(), Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
