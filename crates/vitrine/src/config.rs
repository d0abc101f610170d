use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use folio::carousel::InteractionPolicy;
use folio::catalog::{Project, TechnologyItem, Testimonial};
use folio::radar::{self, SkillAxis};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RadarConfig {
    #[serde(default = "default_radar_size")]
    pub size: f64,
    #[serde(default)]
    pub axes: Vec<SkillAxis>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: default_radar_size(),
            axes: Vec::new(),
        }
    }
}

fn default_radar_size() -> f64 {
    radar::SURFACE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarouselConfig<T> {
    pub interval_ms: u64,
    #[serde(default)]
    pub policy: InteractionPolicy,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> CarouselConfig<T> {
    fn with_interval(interval: Duration, policy: InteractionPolicy) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            policy,
            items: Vec::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub radar: RadarConfig,
    #[serde(default = "default_technologies")]
    pub technologies: CarouselConfig<TechnologyItem>,
    #[serde(default = "default_testimonials")]
    pub testimonials: CarouselConfig<Testimonial>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radar: RadarConfig::default(),
            technologies: default_technologies(),
            testimonials: default_testimonials(),
            projects: Vec::new(),
        }
    }
}

fn default_technologies() -> CarouselConfig<TechnologyItem> {
    CarouselConfig::with_interval(
        folio::carousel::TECHNOLOGY_INTERVAL,
        InteractionPolicy::KeepRunning,
    )
}

fn default_testimonials() -> CarouselConfig<Testimonial> {
    CarouselConfig::with_interval(
        folio::carousel::TESTIMONIAL_INTERVAL,
        InteractionPolicy::SuspendOnInteraction,
    )
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "vitrine", "vitrine").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn builtin_source() -> config::File<config::FileSourceString, config::FileFormat> {
    config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml)
}

/// Built-in defaults, overlaid by the file at `path` (if present) and then by
/// `VITRINE__*` environment variables.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(builtin_source())
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("VITRINE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn builtin_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(builtin_source())
        .build()?;
    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config from {}: {}", path.display(), e);
            builtin_config().unwrap_or_else(|e| {
                log::error!("Built-in config is unusable: {}", e);
                Config::default()
            })
        }
    }
}

pub fn write_default_config(path: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

/// Why a filesystem event means the config file needs reloading, if it does.
fn reload_cause(event: &Event, file_name: &OsStr) -> Option<&'static str> {
    let cause = match event.kind {
        EventKind::Create(_) => "created",
        EventKind::Modify(ModifyKind::Name(_)) => "replaced",
        EventKind::Modify(_) => "modified",
        EventKind::Remove(_) => "removed",
        _ => return None,
    };
    // editors often save through a temp file renamed over the original
    event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name))
        .then_some(cause)
}

type WatchEvents = async_channel::Receiver<notify::Result<Event>>;

fn watch_config_dir(dir: &Path) -> Result<(RecommendedWatcher, WatchEvents), ConfigError> {
    fs_err::create_dir_all(dir)?;

    let (events_tx, events_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok((watcher, events_rx))
}

/// Posts `AppEvent::ConfigReload` whenever the config file changes, until the GUI stops
/// listening.
pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let (Some(dir), Some(file_name)) = (config_path.parent(), config_path.file_name()) else {
        log::warn!("Not watching {}: no parent directory", config_path.display());
        return;
    };

    // the watcher stops when dropped, so it lives as long as this loop
    let (_watcher, events) = match watch_config_dir(dir) {
        Ok(watch) => watch,
        Err(e) => {
            log::error!("Config reload disabled: {}", e);
            return;
        }
    };
    log::debug!("Watching {} for changes", config_path.display());

    while let Ok(res) = events.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::error!("Watch error: {}", e);
                continue;
            }
        };
        if let Some(cause) = reload_cause(&event, file_name) {
            log::info!("{} {}, reloading", config_path.display(), cause);
            if tx.send(AppEvent::ConfigReload).await.is_err() {
                break;
            }
        }
    }
}
