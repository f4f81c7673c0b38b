//! RDAP bootstrap resolver CLI.
//!
//! Resolves AS numbers and IP networks to their authoritative RDAP service
//! URLs using the published bootstrap registries. Registries come from a
//! local file (`--file`), the disk cache, or an HTTP fetch, in that order.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use ipnetwork::IpNetwork;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rdap_bootstrap::bootstrap::{BootstrapClient, RegistryCache, RegistryKind};
use rdap_bootstrap::config::{load_config, BootstrapConfig};
use rdap_bootstrap::registry::{load_registry, ServiceRegistry};

#[derive(Parser)]
#[command(name = "rdap-bootstrap")]
#[command(about = "Resolve AS numbers and IP networks to RDAP service URLs", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Match against a local registry document instead of fetching.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Override the bootstrap base URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an AS number
    As { number: u32 },
    /// Resolve an IP network in CIDR form
    Ip { network: IpNetwork },
    /// Fetch a bootstrap registry (asn, ipv4, ipv6) and print its metadata
    Fetch { kind: RegistryKind },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => BootstrapConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.registry.base_url = base_url.clone();
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "rdap_bootstrap={}",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli, config).await {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: BootstrapConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::As { number } => {
            let registry = obtain_registry(RegistryKind::Asn, &cli.file, &config).await?;
            print_urls(registry.match_as(number)?);
        }
        Commands::Ip { network } => {
            let kind = if network.is_ipv4() {
                RegistryKind::Ipv4
            } else {
                RegistryKind::Ipv6
            };
            let registry = obtain_registry(kind, &cli.file, &config).await?;
            print_urls(registry.match_ip_network(network)?);
        }
        Commands::Fetch { kind } => {
            let client = client_from(&config)?;
            let registry = client.fetch(kind).await?;
            if config.cache.enabled {
                let cache = RegistryCache::new(Some(PathBuf::from(&config.cache.dir)));
                cache.insert(kind, registry.clone());
                cache.save_to_disk()?;
            }
            println!("kind:        {kind}");
            println!("version:     {}", registry.version);
            println!("publication: {}", registry.publication);
            println!("description: {}", registry.description);
            println!("entries:     {}", registry.services.len());
        }
    }
    Ok(())
}

/// Load the registry to match against: local file, fresh cache entry, or
/// HTTP fetch, in that order.
async fn obtain_registry(
    kind: RegistryKind,
    file: &Option<PathBuf>,
    config: &BootstrapConfig,
) -> Result<Arc<ServiceRegistry>, Box<dyn std::error::Error>> {
    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "Loading registry from file");
        return Ok(Arc::new(load_registry(path)?));
    }

    let cache = if config.cache.enabled {
        Some(RegistryCache::load_from_disk(Path::new(&config.cache.dir))?)
    } else {
        None
    };

    if let Some(cache) = &cache {
        let ttl = Duration::from_secs(config.cache.ttl_secs);
        if let Some(registry) = cache.get_fresh(kind, ttl) {
            tracing::debug!(kind = %kind, "Using cached registry");
            return Ok(registry);
        }
    }

    let registry = client_from(config)?.fetch(kind).await?;
    if let Some(cache) = &cache {
        let registry = cache.insert(kind, registry);
        if let Err(e) = cache.save_to_disk() {
            tracing::warn!(error = %e, "Failed to persist registry cache");
        }
        return Ok(registry);
    }
    Ok(Arc::new(registry))
}

fn client_from(config: &BootstrapConfig) -> Result<BootstrapClient, Box<dyn std::error::Error>> {
    let timeout = Duration::from_secs(config.registry.timeout_secs);
    Ok(BootstrapClient::new(&config.registry.base_url, timeout)?)
}

/// One URL per line; nothing matched prints nothing (not an error).
fn print_urls(urls: &[String]) {
    for url in urls {
        println!("{url}");
    }
}
