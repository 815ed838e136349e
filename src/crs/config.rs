//! Configuration for the crs toolchain.
//!
//! `defaults/crs.default.toml` is embedded into the binary so the documented defaults and
//! runtime behavior stay in sync. User files are layered on top through [`Loader`] before
//! deserializing into [`CrsConfig`].

use crate::crs::graph::CodeError;
use crate::crs::vocab::Vocabulary;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/crs.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct CrsConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    /// Use the strict parser instead of skipping unreadable input
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format
    pub format: String,
}

/// Realm names added to the built-in vocabulary, as `name = "Code"`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub realms: BTreeMap<String, String>,
}

impl CrsConfig {
    /// The built-in vocabulary extended with the configured realms
    pub fn vocabulary(&self) -> Result<Vocabulary, CodeError> {
        let mut vocabulary = Vocabulary::builtin().clone();
        for (name, code) in &self.vocabulary.realms {
            vocabulary.insert(name, code, None)?;
        }
        Ok(vocabulary)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, such as a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<CrsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<CrsConfig, ConfigError> {
    Loader::new().build()
}
