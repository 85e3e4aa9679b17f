use std::process::ExitCode;

use backend_proxy_aws_cloudfront::{
    addr::console_url,
    api::AwsCliDistributionApi,
    config::CloudFrontProxyConfig,
    connector::{BehaviorChange, DistributionConfigurator, OriginChange, ReconcileOutcome},
};
use backend_proxy_aws_core::config::AwsServiceConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(outcome: &ReconcileOutcome) {
    let origin = match outcome.origin {
        OriginChange::Added => "added",
        OriginChange::AlreadyPresent => "already present",
    };
    let behavior = match outcome.behavior {
        BehaviorChange::Added => "added",
        BehaviorChange::PolicyRefreshed => "origin request policy refreshed",
    };

    println!("CloudFront distribution updated successfully!");
    println!("   Distribution ID: {}", outcome.distribution.id);
    println!("   Status: {}", outcome.distribution.status);
    println!("   Domain: {}", outcome.distribution.domain_name);
    println!("   Backend origin: {origin}");
    println!("   /api/* behavior: {behavior}");
    println!();
    println!("CloudFront deployment is in progress.");
    println!("   This typically takes 5-15 minutes to complete.");
    println!("   Check status at: {}", console_url(&outcome.distribution.id));
}

async fn run() -> anyhow::Result<()> {
    let prefix = std::env::current_dir()?;
    let config = CloudFrontProxyConfig::try_load(&prefix).await?;

    if config.account_id.is_some() {
        let account_id = config.verify_sts().await?;
        tracing::info!("Credentials verified for account {}", account_id);
    }

    let configurator = DistributionConfigurator::new(AwsCliDistributionApi::from_config(&config));
    tracing::info!(
        "Configuring distribution {} with backend origin",
        configurator.distribution_id()
    );

    let outcome = configurator.reconcile().await?;
    report(&outcome);
    Ok(())
}

#[tokio::main]
pub async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
