//! Shared configuration loader for the batchdoc toolchain.
//!
//! `defaults/batchdoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BatchdocConfig`].

use batchdoc_core::assembler::ExportOptions;
use batchdoc_core::render::ConverterOptions;
use batchdoc_core::style::StyleRegistry;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/batchdoc.default.toml");

/// Top-level configuration consumed by batchdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchdocConfig {
    pub styles: StyleRegistry,
    pub export: ExportConfig,
    pub markdown: MarkdownConfig,
    pub output: OutputConfig,
}

/// Batch layout knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub success_status: String,
    pub annex_title: String,
    pub prompt_style: String,
    pub response_style: String,
}

/// Mirrors the knobs exposed by the Markdown converter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub code_font: String,
    pub include_table_header: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the default output format
    pub format: String,
}

impl From<&MarkdownConfig> for ConverterOptions {
    fn from(config: &MarkdownConfig) -> Self {
        ConverterOptions {
            code_font: config.code_font.clone(),
            include_table_header: config.include_table_header,
        }
    }
}

impl From<&BatchdocConfig> for ExportOptions {
    fn from(config: &BatchdocConfig) -> Self {
        ExportOptions {
            success_status: config.export.success_status.clone(),
            annex_title: config.export.annex_title.clone(),
            prompt_style: config.export.prompt_style.clone(),
            response_style: config.export.response_style.clone(),
            converter: ConverterOptions::from(&config.markdown),
        }
    }
}

impl BatchdocConfig {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from(self)
    }

    /// Reject values the document model cannot represent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.styles.names() {
            let Some(style) = self.styles.get(name) else {
                continue;
            };
            if let Some(size) = style.font_size {
                if !(size.is_finite() && size > 0.0) {
                    return Err(ConfigError::Message(format!(
                        "styles.{name}.font_size must be a positive number of points, got {size}"
                    )));
                }
            }
            if style.font_name.as_deref() == Some("") {
                return Err(ConfigError::Message(format!(
                    "styles.{name}.font_name must not be empty"
                )));
            }
        }
        if self.markdown.code_font.is_empty() {
            return Err(ConfigError::Message(
                "markdown.code_font must not be empty".to_string(),
            ));
        }
        Ok(())
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

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<BatchdocConfig, ConfigError> {
        let config: BatchdocConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BatchdocConfig, ConfigError> {
    Loader::new().build()
}
