//! Images handed over by the platform gallery picker or camera.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FanIdError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraPermission {
    #[default]
    Undetermined,
    Granted,
    Denied,
}

impl CameraPermission {
    pub fn is_granted(self) -> bool {
        matches!(self, CameraPermission::Granted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoSource {
    Gallery(String),
    Camera(String),
}

impl PhotoSource {
    pub fn uri(&self) -> &str {
        match self {
            PhotoSource::Gallery(uri) | PhotoSource::Camera(uri) => uri,
        }
    }

    /// Camera captures need the permission; gallery picks never do.
    pub fn check_permission(&self, permission: CameraPermission) -> Result<()> {
        match self {
            PhotoSource::Camera(_) if !permission.is_granted() => {
                Err(FanIdError::CameraPermissionRequired)
            }
            _ => Ok(()),
        }
    }

    pub fn local_path(&self) -> PathBuf {
        local_path(self.uri())
    }
}

/// Pickers return `file://` URIs on iOS and bare paths elsewhere.
pub fn local_path(uri: &str) -> PathBuf {
    let stripped = uri.strip_prefix("file://").unwrap_or(uri);
    Path::new(stripped).to_path_buf()
}

pub async fn read_image(source: &PhotoSource) -> Result<Vec<u8>> {
    let path = source.local_path();
    let bytes = tokio::fs::read(&path).await?;
    if bytes.is_empty() {
        return Err(FanIdError::Upload(format!(
            "image at {} is empty",
            path.display()
        )));
    }
    Ok(bytes)
}
