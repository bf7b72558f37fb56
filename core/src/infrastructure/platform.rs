use std::path::Path;

use tracing::debug;

const MACHINE_ID_PATHS: [&str; 2] = ["/etc/machine-id", "/var/lib/dbus/machine-id"];

/// The operating system's stable machine identifier, when one is exposed.
pub async fn platform_device_id() -> Option<String> {
    for path in MACHINE_ID_PATHS {
        if let Some(id) = read_machine_id(Path::new(path)).await {
            return Some(id);
        }
    }

    debug!("no platform machine id available");
    None
}

async fn read_machine_id(path: &Path) -> Option<String> {
    let raw = tokio::fs::read_to_string(path).await.ok()?;
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_machine_id_trims_and_rejects_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machine-id");

        tokio::fs::write(&path, "abc123\n").await.unwrap();
        assert_eq!(read_machine_id(&path).await.as_deref(), Some("abc123"));

        tokio::fs::write(&path, "  \n").await.unwrap();
        assert_eq!(read_machine_id(&path).await, None);

        assert_eq!(read_machine_id(&dir.path().join("missing")).await, None);
    }
}
