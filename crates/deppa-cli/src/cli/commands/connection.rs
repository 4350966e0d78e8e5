//! Resolve connection settings from `--config` plus flag/env overrides.

use anyhow::{Context, Result};
use deppa_client::{ClientConfig, DeppaClient};
use tracing::debug;

use super::super::args::ConnectionArgs;

pub fn resolve_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_yaml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ClientConfig::new(
            args.url.clone().context("missing --url (or DEPPA_URL)")?,
            args.usuario
                .clone()
                .context("missing --usuario (or DEPPA_USUARIO)")?,
            args.password
                .clone()
                .context("missing --password (or DEPPA_PASSWORD)")?,
            args.codigo_unidad
                .context("missing --codigo-unidad (or DEPPA_CODIGO_UNIDAD)")?,
        ),
    };

    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if let Some(usuario) = &args.usuario {
        config.username = usuario.clone();
    }
    if let Some(password) = &args.password {
        config.password = password.clone();
    }
    if let Some(code) = args.codigo_unidad {
        config.institution_code = code;
    }
    if let Some(secs) = args.timeout {
        config.transport.timeout_secs = secs;
    }
    if args.log_parameters {
        config.transport.log_parameters = true;
    }

    config.validate()?;
    Ok(config)
}

pub fn build_client(args: &ConnectionArgs) -> Result<DeppaClient> {
    let config = resolve_config(args)?;
    debug!(?config, "resolved client config");
    Ok(DeppaClient::new(config)?)
}
