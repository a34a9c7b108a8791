use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use ec2_dns_sync_domain::config::AwsConfig;
use tokio::sync::OnceCell;
use tracing::info;

/// Resolves the shared AWS configuration once, on first use.
///
/// Retries are disabled: a failed call is reported to the caller, which
/// decides what to skip.
pub struct AwsSdkLoader {
    config: AwsConfig,
    sdk: OnceCell<SdkConfig>,
}

impl AwsSdkLoader {
    pub fn new(config: AwsConfig) -> Self {
        Self {
            config,
            sdk: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &AwsConfig {
        &self.config
    }

    pub async fn sdk_config(&self) -> &SdkConfig {
        self.sdk
            .get_or_init(|| async {
                let mut loader = aws_config::defaults(BehaviorVersion::latest())
                    .retry_config(RetryConfig::disabled());
                if let Some(region) = &self.config.region {
                    loader = loader.region(Region::new(region.clone()));
                }
                let sdk = loader.load().await;
                info!(
                    region = ?sdk.region().map(|r| r.as_ref().to_string()),
                    "AWS configuration loaded"
                );
                sdk
            })
            .await
    }
}
