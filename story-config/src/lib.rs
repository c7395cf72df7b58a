//! Shared configuration loader for the story toolchain.
//!
//! `defaults/story.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`StoryConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use story_babel::HtmlOptions;
use story_parser::ParseOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/story.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "story.toml";

/// Top-level configuration consumed by story applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryConfig {
    pub parsing: ParsingConfig,
    pub html: HtmlConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ParseOptions`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParsingConfig {
    pub scene_breaks: bool,
    pub character_descriptions: bool,
    pub require_file_name_header: bool,
}

/// Page chrome for the HTML format.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub site_name: String,
    pub site_url: String,
    pub asset_prefix: String,
    pub story_json_dir: String,
}

/// Where generated files go.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub html_dir: PathBuf,
    pub json_dir: PathBuf,
    pub overwrite: bool,
}

impl From<ParsingConfig> for ParseOptions {
    fn from(config: ParsingConfig) -> Self {
        ParseOptions {
            scene_breaks: config.scene_breaks,
            character_descriptions: config.character_descriptions,
            require_file_name_header: config.require_file_name_header,
        }
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            site_name: config.site_name.clone(),
            site_url: config.site_url.clone(),
            asset_prefix: config.asset_prefix.clone(),
            story_json_dir: config.story_json_dir.clone(),
            story_stem: None,
        }
    }
}

/// Layers `story.toml` files and CLI flags over the embedded defaults.
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize it. The `[parsing]`, `[html]` and `[output]` tables
    /// must all resolve, which the embedded defaults guarantee unless an override removes a key.
    pub fn build(self) -> Result<StoryConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StoryConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.parsing.scene_breaks);
        assert!(!config.parsing.require_file_name_header);
        assert_eq!(config.html.site_name, "Pufflings");
        assert_eq!(config.html.asset_prefix, "../");
        assert_eq!(config.output.json_dir, PathBuf::from("CYOA"));
        assert!(!config.output.overwrite);
    }

    #[test]
    fn defaults_match_library_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(ParseOptions::from(config.parsing), ParseOptions::default());
        assert_eq!(HtmlOptions::from(&config.html), HtmlOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.require_file_name_header", true)
            .expect("override to apply")
            .set_override("output.html_dir", "site/prompts")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.parsing.require_file_name_header);
        assert_eq!(config.output.html_dir, PathBuf::from("site/prompts"));
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("story.toml");
        fs::write(&path, "[html]\nsite_name = \"Acorns\"\n[output]\noverwrite = true\n")
            .expect("write");

        let config = Loader::new().with_file(&path).build().expect("config");
        assert_eq!(config.html.site_name, "Acorns");
        assert_eq!(config.html.story_json_dir, "prompts/CYOA");
        assert!(config.output.overwrite);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/story.toml")
            .build()
            .expect("config");
        assert_eq!(config.html.site_name, "Pufflings");
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new()
            .with_file("/definitely/not/here/story.toml")
            .build()
            .is_err());
    }
}
