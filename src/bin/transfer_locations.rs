use clap::Parser;
use ss_provision::utils::{logger, validation::Validate};
use ss_provision::{Provisioner, StorageServiceClient, TransferCliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TransferCliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting transfer-locations");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = StorageServiceClient::new(config.api_context());
    let provisioner = Provisioner::new_with_pipeline(client, config.pipeline_uuid.clone());

    match provisioner.run(&config.resource_specs()).await {
        Ok(report) => {
            if report.has_failures() {
                tracing::warn!("Provisioning finished with create failures");
                if config.strict {
                    std::process::exit(2);
                }
            } else {
                tracing::info!("✅ Provisioning completed ({} created)", report.created());
            }
        }
        Err(e) => {
            tracing::error!("❌ Provisioning failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
