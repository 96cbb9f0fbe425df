use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three independent listing datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Generic web crawl, keyed by root domain.
    Web,
    /// Social-network business directory (multi-valued categories).
    Social,
    /// Map/search-engine business directory.
    Directory,
}

impl Source {
    /// All sources in pipeline order.
    pub const ALL: [Source; 3] = [Source::Web, Source::Social, Source::Directory];

    /// Prefix carried by every canonical field of this source.
    pub fn prefix(self) -> &'static str {
        match self {
            Source::Web => "web_",
            Source::Social => "fb_",
            Source::Directory => "gg_",
        }
    }

    /// Short lower-case name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Web => "web",
            Source::Social => "social",
            Source::Directory => "directory",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Source::Web => "Web crawl",
            Source::Social => "Social directory",
            Source::Directory => "Map directory",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "website" => Ok(Source::Web),
            "social" | "fb" | "facebook" => Ok(Source::Social),
            "directory" | "gg" | "google" => Ok(Source::Directory),
            other => Err(format!("unknown source: {other}")),
        }
    }
}
