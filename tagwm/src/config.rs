//! `tagwm` general configuration

mod checks;
mod default;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tagwm_core::config::{Rule, ScratchPad, StepDivisors};
use tagwm_core::layouts::Layout;
use tagwm_core::models::{Gaps, TagMask};
use tagwm_core::utils::status_file;
use xdg::BaseDirectories;

/// Initial placement for windows matching `class`, `instance` and `title`.
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// [[rules]]
/// class = "Gimp"
/// tags = [3]
/// floating = true
/// ```
///
/// windows whose class contains "Gimp" will spawn floating on tag 3 (1-indexed).
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RuleConfig {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub title: Option<String>,
    /// 1-indexed tags, empty keeps the tags the monitor shows.
    pub tags: Vec<usize>,
    pub floating: bool,
    pub monitor: Option<usize>,
    pub hide_border: bool,
    /// Floating geometry. Negative `x` and `y` count from the right and bottom edge.
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RuleConfig {
    /// Tags outside of `1..=MAX_TAGS` are dropped.
    pub fn tag_mask(&self) -> TagMask {
        self.tags
            .iter()
            .filter(|&&tag| (1..=tagwm_core::models::MAX_TAGS).contains(&tag))
            .fold(TagMask::EMPTY, |mask, &tag| mask | TagMask::tag(tag - 1))
    }
}

impl From<&RuleConfig> for Rule {
    fn from(rule: &RuleConfig) -> Self {
        Self {
            class: rule.class.clone(),
            instance: rule.instance.clone(),
            title: rule.title.clone(),
            tags: rule.tag_mask(),
            floating: rule.floating,
            monitor: rule.monitor,
            hide_border: rule.hide_border,
            x: rule.x,
            y: rule.y,
            w: rule.w,
            h: rule.h,
        }
    }
}

/// General configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tags: Vec<String>,
    pub border_width: i32,
    pub snap: i32,
    pub top_bar: bool,
    pub show_bar: bool,
    pub bar_height: i32,
    pub gap_inner_h: i32,
    pub gap_inner_v: i32,
    pub gap_outer_h: i32,
    pub gap_outer_v: i32,
    pub smart_gaps: bool,
    pub float_gap_inner_h: i32,
    pub float_gap_inner_v: i32,
    pub float_gap_outer_h: i32,
    pub float_gap_outer_v: i32,
    pub master_factor: f32,
    pub master_count: i32,
    pub resize_hints: bool,
    pub lock_fullscreen: bool,
    pub layouts: Vec<Layout>,
    pub move_step_v: i32,
    pub move_step_h: i32,
    pub resize_step_v: i32,
    pub resize_step_h: i32,
    pub scratchpad_name: String,
    pub scratchpad_command: Vec<String>,
    pub write_status: bool,
    pub status_file: Option<PathBuf>,
    pub log_level: String,
    pub rules: Vec<RuleConfig>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| tracing::warn!("Unable to load the configuration: {err:?}"))
        .unwrap_or_default()
}

/// Load `$XDG_CONFIG_HOME/tagwm/config.toml`, writing the defaults there on first run.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, or if config.toml cannot be read or parsed.
fn load_from_file() -> Result<Config> {
    tracing::debug!("Loading config file");
    let path = BaseDirectories::with_prefix("tagwm")?;
    let config_file = path.place_config_file("config.toml")?;

    if config_file.exists() {
        tracing::debug!("Config file '{}' found.", config_file.display());
        load_path(&config_file)
    } else {
        tracing::debug!("Config file not found. Writing the default config file.");
        let config = Config::default();
        fs::write(&config_file, toml::to_string_pretty(&config)?)?;
        Ok(config)
    }
}

/// # Errors
///
/// Fails when the file cannot be read or is not a valid configuration.
pub fn load_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

impl tagwm_core::Config for Config {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn snap(&self) -> i32 {
        self.snap
    }

    fn show_bar(&self) -> bool {
        self.show_bar
    }

    fn top_bar(&self) -> bool {
        self.top_bar
    }

    fn bar_height(&self) -> i32 {
        self.bar_height
    }

    fn gaps(&self) -> Gaps {
        Gaps {
            outer_h: self.gap_outer_h,
            outer_v: self.gap_outer_v,
            inner_h: self.gap_inner_h,
            inner_v: self.gap_inner_v,
        }
    }

    fn smart_gaps(&self) -> bool {
        self.smart_gaps
    }

    fn float_gaps(&self) -> Gaps {
        Gaps {
            outer_h: self.float_gap_outer_h,
            outer_v: self.float_gap_outer_v,
            inner_h: self.float_gap_inner_h,
            inner_v: self.float_gap_inner_v,
        }
    }

    fn master_factor(&self) -> f32 {
        self.master_factor
    }

    fn master_count(&self) -> i32 {
        self.master_count
    }

    fn resize_hints(&self) -> bool {
        self.resize_hints
    }

    fn lock_fullscreen(&self) -> bool {
        self.lock_fullscreen
    }

    fn layouts(&self) -> Vec<Layout> {
        self.layouts.clone()
    }

    fn steps(&self) -> StepDivisors {
        StepDivisors {
            move_v: self.move_step_v,
            move_h: self.move_step_h,
            resize_v: self.resize_step_v,
            resize_h: self.resize_step_h,
        }
    }

    fn rules(&self) -> Vec<Rule> {
        self.rules.iter().map(Rule::from).collect()
    }

    fn scratchpad(&self) -> ScratchPad {
        ScratchPad {
            name: self.scratchpad_name.clone(),
            command: self.scratchpad_command.clone(),
        }
    }

    fn status_file(&self) -> Option<PathBuf> {
        if !self.write_status {
            return None;
        }
        self.status_file.clone().or_else(|| {
            status_file::default_path()
                .map_err(|err| tracing::warn!("No place for the status file: {err}"))
                .ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwm_core::Config as _;

    #[test]
    fn default_config_survives_toml() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("border_width = 2\nlayouts = [\"monocle\", \"tile\"]").unwrap();
        assert_eq!(config.border_width, 2);
        assert_eq!(config.layouts, vec![Layout::Monocle, Layout::Tile]);
        assert_eq!(config.tags.len(), 9);
        assert_eq!(config.gaps(), Gaps::uniform(10));
    }

    #[test]
    fn rule_tags_are_one_indexed() {
        let config: Config = toml::from_str(
            r#"
            [[rules]]
            class = "Gimp"
            tags = [1, 3]
            floating = true

            [[rules]]
            title = "Picture-in-Picture"
            tags = [0, 40]
            x = -10
            "#,
        )
        .unwrap();
        let rules = config.rules();
        assert_eq!(rules[0].tags, TagMask(0b101));
        assert!(rules[0].floating);
        assert_eq!(rules[0].class.as_deref(), Some("Gimp"));
        assert_eq!(rules[1].tags, TagMask::EMPTY);
        assert_eq!(rules[1].x, -10);
    }

    #[test]
    fn config_files_load_from_a_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tags = [\"www\", \"dev\"]\nsmart_gaps = false\n").unwrap();
        let config = load_path(&path).unwrap();
        assert_eq!(config.tags(), vec!["www".to_string(), "dev".to_string()]);
        assert!(!config.smart_gaps());
        assert!(load_path(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn the_status_file_can_be_disabled() {
        let config = Config {
            write_status: false,
            status_file: Some(PathBuf::from("/tmp/status.json")),
            ..Config::default()
        };
        assert_eq!(config.status_file(), None);
        let config = Config {
            status_file: Some(PathBuf::from("/tmp/status.json")),
            ..Config::default()
        };
        assert_eq!(config.status_file(), Some(PathBuf::from("/tmp/status.json")));
    }
}
