//! Stratus probe entry point.
//!
//! Resolves backend capabilities from the environment and prints a JSON
//! report to stdout: the capability flags, the full transition matrix and
//! the launch requirements. Logs go to stderr.
//!
//! See `CapabilityConfig::try_from_env` for the variables read.

use serde::Serialize;
use std::sync::Arc;
use stratus_core::{
    CachedCapabilityProvider, CapabilityConfig, ComputeProfile, ImageClass, Requirement,
    ServerCapabilities,
};
use stratus_vm::TransitionMatrix;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Serialize)]
struct LaunchRequirements {
    data_center: Requirement,
    machine_image: Requirement,
    password: Requirement,
    root_volume: Requirement,
    shell_key: Requirement,
    static_ip: Requirement,
    subnet: Requirement,
    vlan: Requirement,
}

#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    matrix: TransitionMatrix,
    launch: LaunchRequirements,
    profile: &'a ComputeProfile,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("stratus_probe=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CapabilityConfig::try_from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let static_backend = Arc::new(config);
    let caps = ServerCapabilities::new(Arc::new(CachedCapabilityProvider::new(config)))
        .with_network(static_backend.clone())
        .with_identity(static_backend);

    let oracle = caps.oracle().await?;
    let launch = LaunchRequirements {
        data_center: caps.data_center_launch_requirement(),
        machine_image: caps.image_requirement(ImageClass::Machine),
        password: caps.password_requirement(),
        root_volume: caps.root_volume_requirement(),
        shell_key: caps.shell_key_requirement().await?,
        static_ip: caps.static_ip_requirement(),
        subnet: caps.subnet_requirement(),
        vlan: caps.vlan_requirement().await?,
    };

    let report = ProbeReport {
        matrix: TransitionMatrix::evaluate(oracle.flags()),
        launch,
        profile: caps.profile(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    tracing::info!("Probe complete");
    Ok(())
}
