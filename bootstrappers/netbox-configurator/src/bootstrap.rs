//! One configurator run, from config files to the completion banner.
//!
//! Fatal steps run in a fixed order: configuration files, API token,
//! readiness. The cluster connection is a future so it is only started once
//! the files have been read.

use crate::config::{read_config_files, BootstrapConfig};
use crate::configurator::NetBoxConfigurator;
use crate::credentials::get_api_token;
use crate::error::BootstrapError;
use crate::readiness::{wait_for_netbox, Readiness};
use crate::report::ConfigurationReport;
use cluster_client::{ClusterClientTrait, ClusterError};
use netbox_client::{NetBoxClientTrait, NetBoxError};
use std::future::Future;
use tracing::{debug, info, warn};

/// Run the configurator
///
/// `connect_netbox` builds the NetBox client from the base URL and API token.
pub async fn bootstrap<Cl, C, F>(
    config: &BootstrapConfig,
    cluster: Cl,
    connect_netbox: F,
) -> Result<ConfigurationReport, BootstrapError>
where
    Cl: Future<Output = Result<Box<dyn ClusterClientTrait>, ClusterError>>,
    C: NetBoxClientTrait,
    F: FnOnce(&str, &str) -> Result<C, NetBoxError>,
{
    let files = read_config_files(&config.netbox_url_file, &config.eda_api_address_file)?;

    let cluster = cluster.await.map_err(BootstrapError::CredentialRetrieval)?;
    let token = get_api_token(cluster.as_ref(), &config.token_secret).await?;

    info!("NetBox URL: {}", files.netbox_url);
    info!("EDA API: {}", files.eda_api_address);

    let client = connect_netbox(&files.netbox_url, &token)?;

    match wait_for_netbox(&client, &config.readiness).await {
        Readiness::Ready { attempts } => debug!("NetBox answered after {} attempt(s)", attempts),
        Readiness::NotReady { attempts } => return Err(BootstrapError::ReadinessTimeout { attempts }),
    }

    let report = NetBoxConfigurator::new(&client).configure(&files.eda_api_address).await;
    report.log_summary();
    if report.failures().next().is_some() {
        warn!("Some resources could not be configured; re-run once the cause is fixed");
    }

    info!("NetBox configuration completed!");
    info!("You can now access NetBox at: {}", files.netbox_url);
    info!("Username: admin");
    info!("Password: netbox");

    Ok(report)
}
