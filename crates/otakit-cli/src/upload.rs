//! `otakit upload` command implementation

use anyhow::{bail, Result};
use otakit_core::{Credentials, FlashMode, UploadConfig};
use std::path::Path;

pub fn run(
    firmware: &Path,
    url: &str,
    flash_mode: FlashMode,
    username: Option<String>,
    password: Option<String>,
    timeout: u64,
) -> Result<()> {
    // Checked before any network activity.
    if !firmware.is_file() {
        bail!("Firmware file {} does not exist", firmware.display());
    }

    // clap guarantees username and password come together.
    let credentials = match (username, password) {
        (Some(username), Some(password)) => Some(Credentials { username, password }),
        _ => None,
    };

    let config = UploadConfig {
        flash_mode,
        timeout_secs: timeout,
        credentials,
    };

    println!("Uploading {} to {}...", firmware.display(), url);
    let body = otakit_core::upload(firmware, url, &config)?;
    println!("Upload complete! {}", body);

    Ok(())
}
