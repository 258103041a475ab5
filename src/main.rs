use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zksync_era_provider::api::zksync_era::ZkSyncEraClient;
use zksync_era_provider::{Provider, ProviderOptions, RequestPayload, ZkSyncEraProvider};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("zksync_era_provider=debug".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap()))
        .with_target(true)
        .init();

    let address = match std::env::args().nth(1) {
        Some(a) => a,
        None => {
            eprintln!("usage: zksync-era-verify <address>");
            return ExitCode::from(2);
        }
    };

    let mut provider = ZkSyncEraProvider::new(ProviderOptions::default());
    if let Ok(endpoint) = std::env::var("ZKSYNC_ERA_API_ENDPOINT") {
        info!("Using zkSync Era explorer at {}", endpoint);
        provider = provider.with_source(ZkSyncEraClient::with_base_url(endpoint));
    }

    let payload = RequestPayload::new(provider.provider_type(), address);
    let result = match provider.verify(&payload).await {
        Ok(r) => r,
        Err(e) => {
            error!("Verification failed: {}", e);
            return ExitCode::from(2);
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize result: {}", e);
            return ExitCode::from(2);
        }
    }

    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
