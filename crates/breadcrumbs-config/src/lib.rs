//! Template configuration loader for the `breadcrumbs` command.
//!
//! A `.breadcrumbs.toml` in the working directory is applied over the
//! built-in defaults, then an explicit `--config` file over that. Each file is
//! validated as a whole before any of its settings take effect.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use breadcrumbs::{Breadcrumbs, TemplateSlot, Templates, TextTransform};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".breadcrumbs.toml";

/// Templates and path settings resolved from defaults and config files.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub templates: Templates,
    pub transform: TextTransform,
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path} not found")]
    NotFound { path: PathBuf },
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config {path}:\n- {}", .problems.join("\n- "))]
    Invalid { path: PathBuf, problems: Vec<String> },
}

impl Config {
    /// Applies `dir/.breadcrumbs.toml` when present, then `override_path`,
    /// which must exist. Relative override paths resolve against `dir`.
    pub fn discover(dir: &Path, override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let local = dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            config.apply_file(&local)?;
        }

        if let Some(path) = override_path {
            let path = dir.join(path);
            if !path.is_file() {
                return Err(ConfigError::NotFound { path });
            }
            config.apply_file(&path)?;
        }

        Ok(config)
    }

    /// Parses a single TOML document on top of the built-in defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let path = PathBuf::from("<inline>");
        let file: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        let mut config = Config::default();
        config
            .apply(file)
            .map_err(|problems| ConfigError::Invalid { path, problems })?;
        Ok(config)
    }

    /// Reads `path` and layers the settings it names over the current ones.
    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.into(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })?;
        self.apply(file).map_err(|problems| ConfigError::Invalid {
            path: path.into(),
            problems,
        })?;
        log::debug!("loaded breadcrumbs config {}", path.display());
        Ok(())
    }

    /// An empty trail that renders through the configured templates.
    pub fn breadcrumbs(&self) -> Breadcrumbs {
        Breadcrumbs::with_templates(self.templates.clone())
    }

    // Nothing is committed unless every setting in the file is valid.
    fn apply(&mut self, file: ConfigFile) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        let mut templates = self.templates.clone();
        let mut transform = self.transform;

        let section = file.templates;
        let slots = [
            (TemplateSlot::Outer, section.outer),
            (TemplateSlot::Item, section.item),
            (TemplateSlot::Active, section.active),
            (TemplateSlot::Separator, section.separator),
        ];
        for (slot, value) in slots {
            let Some(html) = value else {
                continue;
            };
            if let Err(err) = templates.set(slot, html) {
                problems.push(format!("templates.{slot}: {err}"));
            }
        }

        if let Some(name) = file.path.transform {
            match name.parse::<TextTransform>() {
                Ok(parsed) => transform = parsed,
                Err(()) => {
                    let expected: Vec<&str> =
                        TextTransform::ALL.iter().map(|t| t.as_str()).collect();
                    problems.push(format!(
                        "path.transform: unknown transform '{name}' (expected one of {})",
                        expected.join(", ")
                    ));
                }
            }
        }

        if !problems.is_empty() {
            return Err(problems);
        }
        self.templates = templates;
        self.transform = transform;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    templates: TemplateSection,
    path: PathSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TemplateSection {
    outer: Option<String>,
    item: Option<String>,
    active: Option<String>,
    separator: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PathSection {
    transform: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(contents: &str) -> ConfigFile {
        toml::from_str(contents).unwrap()
    }

    #[test]
    fn later_files_override_per_field() {
        let mut config = Config::default();
        config
            .apply(file("[templates]\nouter = \"<nav>{breadcrumbs}</nav>\"\nseparator = \" / \"\n"))
            .unwrap();
        config.apply(file("[templates]\nseparator = \" > \"\n")).unwrap();

        assert_eq!(config.templates.outer(), "<nav>{breadcrumbs}</nav>");
        assert_eq!(config.templates.separator(), " > ");
    }

    #[test]
    fn apply_collects_every_problem_and_changes_nothing() {
        let mut config = Config::default();
        let problems = config
            .apply(file(
                "[templates]\nouter = \"<ol>{breadcrumbs}</ol>\"\nitem = \"<a>{text}</a>\"\nactive = \"<b></b>\"\n[path]\ntransform = \"shout\"\n",
            ))
            .unwrap_err();

        let fields: Vec<&str> = problems
            .iter()
            .filter_map(|problem| problem.split(':').next())
            .collect();
        assert_eq!(fields, vec!["templates.item", "templates.active", "path.transform"]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.transform, TextTransform::Identity);
    }
}
