use bevy::prelude::*;

use crate::components::{DemoStage, Layout};

/// Contents of game.json, or of the copy embedded at build time.
#[derive(serde::Deserialize, Default, Debug, Clone)]
pub struct StartupConfig {
    pub window_title: Option<String>,
    /// Defaults to the layout's screen width.
    pub window_width: Option<f32>,
    /// Defaults to the layout's screen height.
    pub window_height: Option<f32>,
    pub background_color: Option<[f32; 3]>,
    pub texture_filter: Option<String>,
    pub assets_dir: Option<String>,
    #[serde(default)]
    pub stage: DemoStage,
    #[serde(default)]
    pub layout: Layout,
    /// Keys present in the file that nothing reads.
    #[serde(skip)]
    pub unknown_keys: Vec<String>,
}

const TOP_LEVEL_KEYS: &[&str] = &[
    "window_title",
    "window_width",
    "window_height",
    "background_color",
    "texture_filter",
    "assets_dir",
    "stage",
    "layout",
];

const EMBEDDED_CONFIG: &str =
    include_str!(concat!(env!("OUT_DIR"), "/liftwarp_embedded_game_config.json"));

impl StartupConfig {
    pub fn parse(contents: &str) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(contents).map_err(|e| format!("invalid config: {e}"))?;
        let unknown_keys = unknown_keys(&value);
        let mut cfg: StartupConfig =
            serde_json::from_value(value).map_err(|e| format!("invalid config: {e}"))?;
        cfg.layout
            .validate()
            .map_err(|e| format!("invalid layout: {e}"))?;
        for (name, size) in [("window_width", cfg.window_width), ("window_height", cfg.window_height)] {
            if let Some(size) = size {
                if !(size.is_finite() && size > 0.0) {
                    return Err(format!("{name} must be positive, got {size}"));
                }
            }
        }
        cfg.unknown_keys = unknown_keys;
        Ok(cfg)
    }

    pub fn nearest_filter(&self) -> bool {
        self.texture_filter
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("nearest"))
    }

    pub fn window_size(&self) -> (f32, f32) {
        (
            self.window_width.unwrap_or(self.layout.screen_width),
            self.window_height.unwrap_or(self.layout.screen_height),
        )
    }
}

/// Dotted paths of keys that neither `StartupConfig` nor `Layout` declare.
fn unknown_keys(value: &serde_json::Value) -> Vec<String> {
    let Some(top) = value.as_object() else {
        return Vec::new();
    };
    let mut unknown: Vec<String> = top
        .keys()
        .filter(|k| !TOP_LEVEL_KEYS.contains(&k.as_str()))
        .cloned()
        .collect();

    if let Some(layout) = top.get("layout").and_then(|v| v.as_object()) {
        let known = serde_json::to_value(Layout::default()).unwrap_or_default();
        for key in layout.keys() {
            if known.get(key).is_none() {
                unknown.push(format!("layout.{key}"));
            }
        }
    }
    unknown
}

/// Problems found while loading config, reported once logging is up.
#[derive(Resource, Default, Clone, Debug)]
pub struct ConfigWarnings(pub Vec<String>);

pub fn log_config_warnings(warnings: Res<ConfigWarnings>) {
    for warning in &warnings.0 {
        warn!("[Liftwarp config] {}", warning);
    }
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Read the startup config. Falls back to defaults when the file is missing or bad.
pub fn load_startup_config() -> (StartupConfig, ConfigWarnings) {
    let path = env_override("LIFTWARP_GAME_CONFIG").unwrap_or_else(|| "game.json".to_string());
    let (source, contents) = match std::fs::read_to_string(&path) {
        Ok(contents) => (path, contents),
        Err(_) => ("embedded config".to_string(), EMBEDDED_CONFIG.to_string()),
    };
    let mut warnings = Vec::new();
    let mut cfg = match StartupConfig::parse(&contents) {
        Ok(cfg) => {
            println!("[Liftwarp] Loaded startup config from {}", source);
            cfg
        }
        Err(e) => {
            eprintln!("[Liftwarp] Ignoring {}: {}", source, e);
            warnings.push(format!("using defaults, {source} rejected: {e}"));
            StartupConfig::default()
        }
    };
    warnings.extend(
        cfg.unknown_keys
            .iter()
            .map(|k| format!("unknown key {k:?} in {source}")),
    );
    if let Some(dir) = env_override("LIFTWARP_ASSETS_DIR") {
        cfg.assets_dir = Some(dir);
    }
    (cfg, ConfigWarnings(warnings))
}
