use serde::{Deserialize, Serialize};

/// Settings for the EC2 and Route 53 clients.
///
/// Credentials always come from the standard AWS provider chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AwsConfig {
    /// Region override; the provider chain decides when unset.
    #[serde(default)]
    pub region: Option<String>,

    /// Alternative EC2 endpoint, e.g. a local emulator.
    #[serde(default)]
    pub ec2_endpoint: Option<String>,

    /// Alternative Route 53 endpoint.
    #[serde(default)]
    pub route53_endpoint: Option<String>,

    /// Log every Route 53 response at debug level.
    #[serde(default = "default_log_responses")]
    pub log_responses: bool,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            ec2_endpoint: None,
            route53_endpoint: None,
            log_responses: default_log_responses(),
        }
    }
}

fn default_log_responses() -> bool {
    true
}
