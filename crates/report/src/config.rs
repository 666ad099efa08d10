//! Report configuration

use std::path::PathBuf;

use anyhow::bail;

/// How the batch summary is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per subscriber
    #[default]
    Text,
    /// The whole batch summary as pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported SUBCALC_OUTPUT value '{}' (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// JSON file of subscriber records; built-in samples when unset
    pub input: Option<PathBuf>,
    pub output: OutputFormat,
}

impl ReportConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = lookup("SUBCALC_INPUT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let output = match lookup("SUBCALC_OUTPUT") {
            Some(v) => OutputFormat::parse(&v)?,
            None => OutputFormat::default(),
        };

        Ok(Self { input, output })
    }
}
