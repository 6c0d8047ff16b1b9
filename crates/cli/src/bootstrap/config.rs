use dohhole_domain::{CliOverrides, Config};

pub fn load_config(overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(overrides)?;
    config.validate()?;
    Ok(config)
}
