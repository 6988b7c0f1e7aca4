use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::parse::{ParseError, PatternDateParser, formats};
use crate::selection::{SelectionMode, SelectionModel, SkippedValue};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML selection config")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON selection config")]
    Json(#[from] serde_json::Error),
    #[error("invalid date format in selection config")]
    Pattern(#[from] ParseError),
    #[error("initial selection has {} unparsable value(s)", skipped.len())]
    InitialSelection { skipped: Vec<SkippedValue> },
}

/// Settings for building a [`SelectionModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    #[serde(deserialize_with = "lenient_mode")]
    pub selection_mode: SelectionMode,
    /// Tried in order. Tokens are `YYYY`/`yyyy`, `MM`, `DD`/`dd`, `HH`,
    /// `mm` and `ss`; everything else is literal text.
    pub date_formats: Vec<String>,
    pub initial_selection: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            date_formats: formats::DEFAULTS.iter().map(|f| f.to_string()).collect(),
            initial_selection: Vec::new(),
        }
    }
}

/// Accepts the strict names as well as legacy ones; unknown names select
/// multiple intervals.
fn lenient_mode<'de, D>(deserializer: D) -> Result<SelectionMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(SelectionMode::from_name(&name))
}

impl SelectionConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads JSON for `.json` files and YAML for everything else.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    pub fn parser(&self) -> Result<PatternDateParser, ConfigError> {
        Ok(PatternDateParser::new(&self.date_formats)?)
    }
}

impl SelectionModel {
    /// Builds a model from settings. Unlike interactive calls, an initial
    /// selection with unparsable entries is rejected outright.
    pub fn from_config(config: &SelectionConfig) -> Result<Self, ConfigError> {
        let mut model = SelectionModel::with_mode(config.selection_mode).with_parser(config.parser()?);
        if !config.initial_selection.is_empty() {
            let outcome = model.set_selected_dates(config.initial_selection.iter().cloned());
            if !outcome.is_complete() {
                return Err(ConfigError::InitialSelection {
                    skipped: outcome.skipped,
                });
            }
        }
        log::debug!(
            target: "datesel",
            "built {} selection model with {} format(s)",
            config.selection_mode,
            config.date_formats.len()
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{ConfigError, SelectionConfig};
    use crate::core::calendar::Date;
    use crate::selection::{SelectionMode, SelectionModel};

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_parts(year, month, day).expect("valid date")
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = SelectionConfig::from_yaml_str("{}").expect("config");
        assert_eq!(config, SelectionConfig::default());
        assert_eq!(config.selection_mode, SelectionMode::MultipleInterval);
    }

    #[test]
    fn legacy_mode_names_are_accepted() {
        let config =
            SelectionConfig::from_yaml_str("selection_mode: singleInterval").expect("config");
        assert_eq!(config.selection_mode, SelectionMode::SingleInterval);

        let config = SelectionConfig::from_yaml_str("selection_mode: monthly").expect("config");
        assert_eq!(config.selection_mode, SelectionMode::MultipleInterval);
    }

    #[test]
    fn json_config_builds_a_populated_model() {
        let config = SelectionConfig::from_json_str(
            r#"{
                "selection_mode": "single_interval",
                "date_formats": ["DD.MM.YYYY"],
                "initial_selection": ["01.03.2024", "04.03.2024"]
            }"#,
        )
        .expect("config");
        let model = SelectionModel::from_config(&config).expect("model");
        assert_eq!(model.selection_mode(), SelectionMode::SingleInterval);
        assert_eq!(model.selected_dates().len(), 4);
        assert!(model.is_selected_date(date(2024, 3, 2)));
    }

    #[test]
    fn java_style_date_format_is_understood() {
        let config = SelectionConfig::from_yaml_str(
            "selection_mode: single\ndate_formats: ['dd/MM/yyyy']\ninitial_selection: ['31/12/2024']\n",
        )
        .expect("config");
        let model = SelectionModel::from_config(&config).expect("model");
        assert_eq!(model.selected_date(), Some(date(2024, 12, 31)));
    }

    #[test]
    fn unparsable_initial_selection_is_rejected() {
        let config = SelectionConfig {
            initial_selection: vec!["2024-01-01".to_string(), "tomorrow".to_string()],
            ..SelectionConfig::default()
        };
        let err = SelectionModel::from_config(&config).expect_err("should fail");
        match err {
            ConfigError::InitialSelection { skipped } => assert_eq!(skipped[0].index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_format_is_a_config_error() {
        let config = SelectionConfig {
            date_formats: vec!["MM/YYYY".to_string()],
            ..SelectionConfig::default()
        };
        assert!(matches!(
            SelectionModel::from_config(&config),
            Err(ConfigError::Pattern(_))
        ));
    }

    #[test]
    fn loads_yaml_files_from_disk() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "selection_mode: single").expect("write");
        writeln!(file, "initial_selection: [\"2024-07-04\"]").expect("write");

        let config = SelectionConfig::from_path(file.path()).expect("config");
        let model = SelectionModel::from_config(&config).expect("model");
        assert_eq!(model.selected_date(), Some(date(2024, 7, 4)));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.yaml");
        let err = SelectionConfig::from_path(&path).expect_err("should fail");
        assert!(err.to_string().contains("absent.yaml"));
    }
}
