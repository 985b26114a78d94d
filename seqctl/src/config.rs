use containers::GrowthPolicy;
use miette::{Context, IntoDiagnostic};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeqctlConfig {
    #[serde(default)]
    pub growth: GrowthPolicy,
}

impl SeqctlConfig {
    pub fn from_path(path: impl AsRef<Path>) -> miette::Result<Self> {
        let path = path.as_ref();

        let config = fs_err::read_to_string(path)
            .into_diagnostic()
            .context("failed to read configuration")?;

        let config = Self::parse(&config)?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    pub fn parse(config: &str) -> miette::Result<Self> {
        let config: SeqctlConfig = toml::de::from_str(config)
            .into_diagnostic()
            .context("failed to parse configuration")?;

        config
            .growth
            .validated()
            .context("invalid growth configuration")?;

        Ok(config)
    }
}
