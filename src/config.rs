use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use range_pager_core::{PaginationConfig, TrailingGap};

use crate::error::Result;
use crate::render::RenderOptions;

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "range-pager.toml";

/// Complete configuration: link calculation plus markup options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub render: RenderOptions,
}

/// Values given on the command line. `None` keeps the lower layer's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub total: Option<u64>,
    pub current: Option<i64>,
    pub page_size: Option<u64>,
    pub mid_range: Option<u64>,
    pub limit: Option<u64>,
    pub url: Option<String>,
    pub hide_prev_next: bool,
    pub hide_first_last: bool,
    pub legacy_gap: bool,
}

impl Config {
    /// Load configuration from file, environment, and CLI arguments
    pub fn load(config_path: Option<&PathBuf>, overrides: &Overrides) -> Result<Self> {
        // Start with default config
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    debug!("No config file, using defaults");
                    Config::default()
                }
            }
        };

        // Override with environment variables
        config.apply_env(|key| std::env::var(key).ok());

        // Override with CLI arguments
        config.apply_overrides(overrides);

        config.pagination.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading config file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `RANGE_PAGER_*` variables. Unparseable numbers are ignored.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(size) = var("RANGE_PAGER_PAGE_SIZE").and_then(|v| v.parse().ok()) {
            self.pagination.page_size = size;
        }
        if let Some(mid) = var("RANGE_PAGER_MID_RANGE").and_then(|v| v.parse().ok()) {
            self.pagination.mid_range = mid;
        }
        if let Some(limit) = var("RANGE_PAGER_LIMIT").and_then(|v| v.parse().ok()) {
            self.pagination.limit = limit;
        }
        if let Some(url) = var("RANGE_PAGER_URL") {
            self.render.url = url;
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        let p = &mut self.pagination;
        if let Some(total) = overrides.total {
            p.total = total;
        }
        if let Some(current) = overrides.current {
            p.current = current;
        }
        if let Some(size) = overrides.page_size {
            p.page_size = size;
        }
        if let Some(mid) = overrides.mid_range {
            p.mid_range = mid;
        }
        if let Some(limit) = overrides.limit {
            p.limit = limit;
        }
        if overrides.hide_prev_next {
            p.show_prev_next = false;
        }
        if overrides.hide_first_last {
            p.show_first_last = false;
        }
        if overrides.legacy_gap {
            p.trailing_gap = TrailingGap::FixedOffset;
        }
        if let Some(url) = &overrides.url {
            self.render.url = url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn reads_both_tables() {
        let config = Config::from_toml(
            r#"
            [pagination]
            page_size = 10
            mid_range = 7
            show_first_last = false
            trailing_gap = "fixed_offset"

            [render]
            url = "/posts?page=%n"
            "#,
        )
        .unwrap();

        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.pagination.mid_range, 7);
        assert_eq!(config.pagination.limit, 10);
        assert!(!config.pagination.show_first_last);
        assert_eq!(config.pagination.trailing_gap, TrailingGap::FixedOffset);
        assert_eq!(config.render.url, "/posts?page=%n");
        assert_eq!(config.render.active_class, "active");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_toml("[pagination]\npage_size = \"ten\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn env_then_cli_layering() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("RANGE_PAGER_PAGE_SIZE", "10"),
            ("RANGE_PAGER_LIMIT", "not-a-number"),
            ("RANGE_PAGER_URL", "/env/%n"),
        ]);
        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.pagination.limit, 10);
        assert_eq!(config.render.url, "/env/%n");

        config.apply_overrides(&Overrides {
            total: Some(300),
            current: Some(-4),
            page_size: Some(20),
            url: Some("/cli/%n".to_string()),
            hide_prev_next: true,
            legacy_gap: true,
            ..Default::default()
        });

        assert_eq!(config.pagination.total, 300);
        assert_eq!(config.pagination.current, -4);
        assert_eq!(config.pagination.page_size, 20);
        assert!(!config.pagination.show_prev_next);
        assert!(config.pagination.show_first_last);
        assert_eq!(config.pagination.trailing_gap, TrailingGap::FixedOffset);
        assert_eq!(config.render.url, "/cli/%n");
    }

    #[test]
    fn load_rejects_zero_page_size() {
        let dir = std::env::temp_dir().join(format!("range-pager-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("zero.toml");
        std::fs::write(&path, "[pagination]\ntotal = 5").unwrap();

        let overrides = Overrides {
            page_size: Some(0),
            ..Default::default()
        };
        let err = Config::load(Some(&path), &overrides).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
