use anyhow::Context;
use ec2_dns_sync_domain::LifecycleEvent;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Reads the notification from `path`, or from stdin when `path` is absent
/// or `-`.
pub async fn read_event(path: Option<&str>) -> anyhow::Result<LifecycleEvent> {
    let json = match path {
        Some(path) if path != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read event file {}", path))?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read event from stdin")?;
            buf
        }
    };
    debug!(bytes = json.len(), "Event document read");

    LifecycleEvent::from_json(&json).map_err(|e| anyhow::anyhow!(e))
}
