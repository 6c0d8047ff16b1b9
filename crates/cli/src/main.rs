use clap::Parser;
use dohhole_domain::CliOverrides;
use dohhole_jobs::{CacheMaintenanceJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dohhole")]
#[command(version)]
#[command(about = "Ad-blocking DNS proxy that forwards to a DNS-over-HTTPS upstream")]
struct Cli {
    /// Listen address
    #[arg(short = 'b', long, env = "ADDR")]
    bind: Option<String>,

    /// Listen port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Verbose logging (also enabled when DEBUG is set)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        debug: cli.debug || std::env::var_os("DEBUG").is_some(),
    };

    let config = bootstrap::load_config(cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dohhole v{}", env!("CARGO_PKG_VERSION"));
    info!(
        upstream = %config.upstream.doh_hostname,
        bootstrap = %config.upstream.bootstrap_dns,
        "Using DoH upstream"
    );

    let dns_services = di::DnsServices::new(&config)?;

    if !dns_services.denylist.ensure_loaded().await {
        error!(url = %config.blocking.hosts_url, "Could not load denylist");
        anyhow::bail!("initial denylist load failed");
    }

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_cache_maintenance(
            CacheMaintenanceJob::new(dns_services.cache_maintenance.clone())
                .with_interval(config.cache.reap_interval()),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let dns_addr = config.server.listen_addr();
    info!(address = %dns_addr, "Starting DNS server");

    let result = tokio::select! {
        result = server::start_dns_server(
            dns_addr,
            dns_services.handler,
            config.server.udp_buffer_size,
        ) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
            Ok(())
        }
    };

    shutdown.cancel();

    if let Err(e) = &result {
        error!(error = %e, "DNS server error");
    }

    info!("Server shutdown complete");
    result
}
