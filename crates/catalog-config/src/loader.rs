use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path or pagination limits are unusable
    /// or the trace sampling rate is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health()?;
        self.validate_catalog()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        Ok(())
    }

    fn validate_catalog(&self) -> anyhow::Result<()> {
        let catalog = &self.catalog;

        if catalog.default_page_size <= 0 {
            anyhow::bail!("catalog.default_page_size must be greater than 0");
        }

        if let Some(max) = catalog.max_page_size
            && max < catalog.default_page_size
        {
            anyhow::bail!(
                "catalog.max_page_size ({max}) must not be smaller than catalog.default_page_size ({})",
                catalog.default_page_size
            );
        }

        Ok(())
    }

    fn validate_telemetry(&self) -> anyhow::Result<()> {
        let rate = self.telemetry.tracing.sampling_rate;

        if !(0.0..=1.0).contains(&rate) {
            anyhow::bail!("telemetry.tracing.sampling_rate must be between 0.0 and 1.0, got {rate}");
        }

        Ok(())
    }
}
