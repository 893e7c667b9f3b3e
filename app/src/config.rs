use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = ".photo-gallery";

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn default_config_path() -> PathBuf {
    app_dir().join("config.toml")
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub catalog_path: PathBuf,
    pub data_dir: PathBuf,
    pub list_limit: usize,
    pub view_mode: String,
    pub trace_spans: bool,
}

#[derive(Default)]
pub struct AppConfigOverrides {
    pub log_level: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub list_limit: Option<usize>,
    pub trace_spans: bool,
}

impl AppConfig {
    pub fn load_from(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(default_config_path);
        let cfg = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()
            .unwrap_or_default();

        let log_level = cfg
            .get_string("log_level")
            .unwrap_or_else(|_| "info".to_string());
        let data_dir = cfg
            .get_string("data_dir")
            .map(PathBuf::from)
            .unwrap_or_else(|_| app_dir());
        let catalog_path = cfg
            .get_string("catalog_path")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("photos.json"));
        let list_limit = cfg.get_int("list_limit").unwrap_or(50).max(0) as usize;
        let view_mode = cfg
            .get_string("view_mode")
            .unwrap_or_else(|_| "grid".to_string());
        let trace_spans = cfg.get_bool("trace_spans").unwrap_or(false);

        Self {
            log_level,
            catalog_path,
            data_dir,
            list_limit,
            view_mode,
            trace_spans,
        }
    }

    pub fn apply_overrides(mut self, ov: &AppConfigOverrides) -> Self {
        if let Some(l) = &ov.log_level {
            self.log_level = l.clone();
        }
        if let Some(p) = &ov.catalog_path {
            self.catalog_path = p.clone();
        }
        if let Some(n) = ov.list_limit {
            self.list_limit = n;
        }
        if ov.trace_spans {
            self.trace_spans = true;
        }
        self
    }

    pub fn save_to(&self, path: Option<PathBuf>) -> std::io::Result<()> {
        let path = path.unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = toml::to_string(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}
