use lgx_config::LogixConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LogixConfig> {
    let mut config = LogixConfig::load_with_dotenv()?;
    if let Some(url) = flags.api_url.as_deref() {
        config.api.base_url = url.to_string();
        config.api.validate()?;
    }
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}
