//! Pipeline configuration.
//!
//! Every path the pipeline touches is derived from a [`PipelineConfig`] value
//! passed into each stage. Defaults reproduce the project layout
//! `source/ → raw/ → transform/ → process/` under the project root; a TOML
//! file may override any subset of fields:
//!
//! ```toml
//! root = "/data/listings"
//! placeholder = ""
//!
//! [folders]
//! source = "incoming"
//!
//! [files]
//! web = "websites.csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bizrec_ingest::SourceFormat;
use bizrec_model::Source;

pub const RUN_REPORT_FILENAME: &str = "run_report.json";

/// Stage folders, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folders {
    pub source: PathBuf,
    pub raw: PathBuf,
    pub transform: PathBuf,
    pub process: PathBuf,
}

impl Default for Folders {
    fn default() -> Self {
        Self {
            source: PathBuf::from("source"),
            raw: PathBuf::from("raw"),
            transform: PathBuf::from("transform"),
            process: PathBuf::from("process"),
        }
    }
}

/// File names, identical across the source, raw and transform folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    pub web: String,
    pub social: String,
    pub directory: String,
    /// Resolved table written to the process folder.
    pub output: String,
}

impl Default for Files {
    fn default() -> Self {
        Self {
            web: "website_dataset.csv".to_string(),
            social: "facebook_dataset.csv".to_string(),
            directory: "google_dataset.csv".to_string(),
            output: "fb_google_web_dataset.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Project root; relative folders are resolved against it.
    pub root: PathBuf,
    pub folders: Folders,
    pub files: Files,
    /// Replacement for characters the sanitizer rejects.
    pub placeholder: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            folders: Folders::default(),
            files: Files::default(),
            placeholder: String::new(),
        }
    }
}

impl PipelineConfig {
    /// Loads a TOML configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Resolves the configuration from the optional `--config` and `--root`
    /// flags; `--root` wins over a root set in the file.
    pub fn resolve(config: Option<&Path>, root: Option<&Path>) -> Result<Self> {
        let mut resolved = match config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(root) = root {
            resolved.root = root.to_path_buf();
        }
        Ok(resolved)
    }

    /// Returns a copy rooted at `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn file_name(&self, source: Source) -> &str {
        match source {
            Source::Web => &self.files.web,
            Source::Social => &self.files.social,
            Source::Directory => &self.files.directory,
        }
    }

    fn folder(&self, folder: &Path) -> PathBuf {
        self.root.join(folder)
    }

    pub fn source_path(&self, source: Source) -> PathBuf {
        self.folder(&self.folders.source).join(self.file_name(source))
    }

    pub fn raw_path(&self, source: Source) -> PathBuf {
        self.folder(&self.folders.raw).join(self.file_name(source))
    }

    pub fn transform_path(&self, source: Source) -> PathBuf {
        self.folder(&self.folders.transform)
            .join(self.file_name(source))
    }

    pub fn output_path(&self) -> PathBuf {
        self.folder(&self.folders.process).join(&self.files.output)
    }

    pub fn report_path(&self) -> PathBuf {
        self.folder(&self.folders.process).join(RUN_REPORT_FILENAME)
    }
}

/// Delimited format of each source export.
pub fn source_format(source: Source) -> SourceFormat {
    match source {
        Source::Web => SourceFormat::semicolon(),
        Source::Social | Source::Directory => SourceFormat::backslash_escaped(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = PipelineConfig::default().with_root("/data");
        assert_eq!(
            config.source_path(Source::Web),
            PathBuf::from("/data/source/website_dataset.csv")
        );
        assert_eq!(
            config.transform_path(Source::Social),
            PathBuf::from("/data/transform/facebook_dataset.csv")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("/data/process/fb_google_web_dataset.csv")
        );
        assert_eq!(
            config.report_path(),
            PathBuf::from("/data/process/run_report.json")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PipelineConfig = toml::from_str(
            r#"
            root = "/srv"

            [folders]
            source = "incoming"

            [files]
            web = "sites.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.root, PathBuf::from("/srv"));
        assert_eq!(config.folders.source, PathBuf::from("incoming"));
        assert_eq!(config.folders.raw, PathBuf::from("raw"));
        assert_eq!(config.files.web, "sites.csv");
        assert_eq!(config.files.social, "facebook_dataset.csv");
        assert_eq!(config.placeholder, "");
    }

    #[test]
    fn test_root_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bizrec.toml");
        fs::write(&path, "root = \"/from-file\"\n").unwrap();

        let config = PipelineConfig::resolve(Some(&path), Some(Path::new("/from-flag"))).unwrap();
        assert_eq!(config.root, PathBuf::from("/from-flag"));

        let config = PipelineConfig::resolve(Some(&path), None).unwrap();
        assert_eq!(config.root, PathBuf::from("/from-file"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = PipelineConfig::resolve(Some(Path::new("/nonexistent/bizrec.toml")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_formats() {
        assert_eq!(source_format(Source::Web).delimiter, b';');
        assert_eq!(source_format(Source::Directory).escape, Some(b'\\'));
    }
}
