use facemetric_store::DEFAULT_HISTORY_LIMIT;
use std::path::PathBuf;

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the SQLite history database.
    pub db_path: PathBuf,
    /// User key under which history is stored.
    pub user: String,
    /// Number of records `history` lists by default.
    pub history_limit: usize,
}

impl Config {
    /// Load configuration from `FACEMETRIC_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = get("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = get("HOME").unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(home).join(".local/share")
            })
            .join("facemetric");

        let db_path = get("FACEMETRIC_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("history.db"));

        let user = non_blank(get("FACEMETRIC_USER"))
            .or_else(|| non_blank(get("USER")))
            .unwrap_or_else(|| "anonymous".to_string());

        Self {
            db_path,
            user,
            history_limit: parse_or(get("FACEMETRIC_HISTORY_LIMIT"), DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Apply a `--user` flag. Blank values leave the configured user alone.
    pub fn override_user(&mut self, user: Option<String>) {
        if let Some(user) = non_blank(user) {
            self.user = user;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config_from(&[("HOME", "/home/alice"), ("USER", "alice")]);
        assert_eq!(cfg.db_path, PathBuf::from("/home/alice/.local/share/facemetric/history.db"));
        assert_eq!(cfg.user, "alice");
        assert_eq!(cfg.history_limit, 50);
    }

    #[test]
    fn test_xdg_data_home() {
        let cfg = config_from(&[("XDG_DATA_HOME", "/data"), ("HOME", "/home/alice")]);
        assert_eq!(cfg.db_path, PathBuf::from("/data/facemetric/history.db"));
    }

    #[test]
    fn test_no_home_falls_back_to_tmp() {
        let cfg = config_from(&[]);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/.local/share/facemetric/history.db"));
        assert_eq!(cfg.user, "anonymous");
    }

    #[test]
    fn test_overrides() {
        let cfg = config_from(&[
            ("FACEMETRIC_DB_PATH", "/var/lib/fm.db"),
            ("FACEMETRIC_USER", "bob"),
            ("USER", "alice"),
            ("FACEMETRIC_HISTORY_LIMIT", "10"),
        ]);
        assert_eq!(cfg.db_path, PathBuf::from("/var/lib/fm.db"));
        assert_eq!(cfg.user, "bob");
        assert_eq!(cfg.history_limit, 10);
    }

    #[test]
    fn test_blank_user_variable_falls_through() {
        let cfg = config_from(&[("FACEMETRIC_USER", "  "), ("USER", "alice")]);
        assert_eq!(cfg.user, "alice");
    }

    #[test]
    fn test_user_flag_ignores_blank() {
        let mut cfg = config_from(&[("USER", "alice")]);
        cfg.override_user(Some(String::new()));
        assert_eq!(cfg.user, "alice");
        cfg.override_user(Some(" \t".to_string()));
        assert_eq!(cfg.user, "alice");
        cfg.override_user(None);
        assert_eq!(cfg.user, "alice");
        cfg.override_user(Some("carol".to_string()));
        assert_eq!(cfg.user, "carol");
    }

    #[test]
    fn test_bad_limit_uses_default() {
        let cfg = config_from(&[("FACEMETRIC_HISTORY_LIMIT", "lots")]);
        assert_eq!(cfg.history_limit, DEFAULT_HISTORY_LIMIT);
    }
}
