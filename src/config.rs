use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::classifier::rules::{ScorePredicate, SentimentRule};
use crate::domain::SentimentLabel;
use crate::error::{ReleaseTreeError, Result};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "releasetree.toml";

/// Represents the complete configuration for release-tree.
///
/// Contains the classification rules, layout constants, scene styling, input
/// column names, and logging options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub scene: SceneConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Checks settings that parse fine but cannot drive the pipeline.
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;

        if !self.layout.step.is_finite() || self.layout.step <= 0.0 {
            return Err(ReleaseTreeError::config(format!(
                "layout.step must be a positive number, got {}",
                self.layout.step
            )));
        }

        for (name, value) in [
            ("layout.base", self.layout.base),
            ("layout.horizontal_reach", self.layout.horizontal_reach),
            ("layout.branch_rise", self.layout.branch_rise),
            ("scene.leaf_spread", self.scene.leaf_spread),
            ("scene.leaf_radius", self.scene.leaf_radius),
        ] {
            if !value.is_finite() {
                return Err(ReleaseTreeError::config(format!(
                    "{} must be a finite number",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Returns the default keywords that mark a review as positive.
fn default_positive_keywords() -> Vec<String> {
    ["excellent", "great", "love", "amazing", "good", "nice", "useful"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Returns the default keywords that mark a review as negative.
fn default_negative_keywords() -> Vec<String> {
    ["bad", "issue", "bug", "terrible", "worst", "poor"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Returns the default ordered rule list: positive first, then negative.
fn default_rules() -> Vec<SentimentRule> {
    vec![
        SentimentRule {
            label: SentimentLabel::Positive,
            keywords: default_positive_keywords(),
            score: Some(ScorePredicate::AtLeast(4.0)),
        },
        SentimentRule {
            label: SentimentLabel::Negative,
            keywords: default_negative_keywords(),
            score: Some(ScorePredicate::AtMost(2.0)),
        },
    ]
}

fn default_fallback() -> SentimentLabel {
    SentimentLabel::Neutral
}

/// Configuration for review classification.
///
/// Rules are evaluated in order and the first match wins; reviews matching no
/// rule get the fallback label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<SentimentRule>,

    #[serde(default = "default_fallback")]
    pub fallback: SentimentLabel,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            rules: default_rules(),
            fallback: default_fallback(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(ReleaseTreeError::rules("at least one rule is required"));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ReleaseTreeError::rules(format!(
                    "rule {} ({}) contains an empty keyword",
                    index + 1,
                    rule.label
                )));
            }
            if let Some(predicate) = &rule.score {
                if !predicate.threshold().is_finite() {
                    return Err(ReleaseTreeError::rules(format!(
                        "rule {} ({}) has a non-finite score threshold",
                        index + 1,
                        rule.label
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Order in which releases are assigned branches
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseOrder {
    /// Order of first appearance in the input table
    #[default]
    FirstAppearance,
    /// Ascending numeric version; unparsable identifiers keep input order
    Version,
}

impl FromStr for ReleaseOrder {
    type Err = ReleaseTreeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first-appearance" | "input" => Ok(ReleaseOrder::FirstAppearance),
            "version" => Ok(ReleaseOrder::Version),
            other => Err(ReleaseTreeError::config(format!(
                "unknown release order '{}'",
                other
            ))),
        }
    }
}

fn default_base() -> f64 {
    2.5
}

fn default_step() -> f64 {
    2.0
}

fn default_horizontal_reach() -> f64 {
    5.0
}

/// Layout constants for branch placement.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Height of the first branch
    #[serde(default = "default_base")]
    pub base: f64,

    /// Vertical distance between consecutive branches
    #[serde(default = "default_step")]
    pub step: f64,

    /// Horizontal distance from trunk to branch end
    #[serde(default = "default_horizontal_reach")]
    pub horizontal_reach: f64,

    /// Vertical rise from branch start to branch end
    #[serde(default)]
    pub branch_rise: f64,

    #[serde(default)]
    pub order: ReleaseOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            base: default_base(),
            step: default_step(),
            horizontal_reach: default_horizontal_reach(),
            branch_rise: 0.0,
            order: ReleaseOrder::default(),
        }
    }
}

/// A date (or other) label drawn on the trunk at a fixed height
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TimelineMark {
    pub label: String,
    pub y: f64,
}

fn default_title() -> String {
    "Tree of Releases".to_string()
}

fn default_caption() -> String {
    "Leaves represent user reviews: green = positive, orange = neutral, red = negative. \
     Branches are versions, and blossoms/wilts show sentiment highlights."
        .to_string()
}

fn default_leaf_spread() -> f64 {
    0.5
}

fn default_leaf_radius() -> f64 {
    0.2
}

fn default_label_offset() -> f64 {
    0.6
}

fn default_marker_offset() -> f64 {
    0.7
}

fn default_trunk_bottom() -> f64 {
    1.0
}

fn default_trunk_top() -> f64 {
    14.0
}

fn default_trunk_width() -> f64 {
    0.8
}

fn default_timeline() -> Vec<TimelineMark> {
    [
        ("Jan 2022", 2.0),
        ("Jul 2022", 4.0),
        ("Jan 2023", 6.0),
        ("Jul 2023", 8.0),
        ("Jan 2024", 10.0),
    ]
    .iter()
    .map(|(label, y)| TimelineMark {
        label: label.to_string(),
        y: *y,
    })
    .collect()
}

/// Styling constants for the scene description.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SceneConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_caption")]
    pub caption: String,

    /// Maximum distance of a leaf centre from its branch end
    #[serde(default = "default_leaf_spread")]
    pub leaf_spread: f64,

    #[serde(default = "default_leaf_radius")]
    pub leaf_radius: f64,

    /// Horizontal gap between branch end and version label
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,

    /// Height of blossom/wilt markers above the branch end
    #[serde(default = "default_marker_offset")]
    pub marker_offset: f64,

    #[serde(default = "default_trunk_bottom")]
    pub trunk_bottom: f64,

    /// Minimum trunk height; the trunk grows past it for tall trees
    #[serde(default = "default_trunk_top")]
    pub trunk_top: f64,

    #[serde(default = "default_trunk_width")]
    pub trunk_width: f64,

    #[serde(default = "default_timeline")]
    pub timeline: Vec<TimelineMark>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            title: default_title(),
            caption: default_caption(),
            leaf_spread: default_leaf_spread(),
            leaf_radius: default_leaf_radius(),
            label_offset: default_label_offset(),
            marker_offset: default_marker_offset(),
            trunk_bottom: default_trunk_bottom(),
            trunk_top: default_trunk_top(),
            trunk_width: default_trunk_width(),
            timeline: default_timeline(),
        }
    }
}

fn default_content_column() -> String {
    "content".to_string()
}

fn default_score_column() -> String {
    "score".to_string()
}

fn default_release_column() -> String {
    "Release Version".to_string()
}

/// Column names of the input review table.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_content_column")]
    pub content_column: String,

    #[serde(default = "default_score_column")]
    pub score_column: String,

    #[serde(default = "default_release_column")]
    pub release_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            content_column: default_content_column(),
            score_column: default_score_column(),
            release_column: default_release_column(),
        }
    }
}

/// Log output format
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration for diagnostic logging.
///
/// `RUST_LOG` overrides `level` when set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetree.toml` in current directory
/// 3. `.releasetree.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated (or default) configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}
