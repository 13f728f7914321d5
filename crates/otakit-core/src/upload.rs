//! Firmware upload to an HTTP OTA endpoint
//!
//! The device exposes a web OTA endpoint that flashes whatever a POST
//! request carries, picking the target partition from the `X-Flash-Mode`
//! header. One request, one image; the response body is the device's own
//! status text.

use crate::error::UploadError;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Request header naming the partition the device should flash.
pub const FLASH_MODE_HEADER: &str = "X-Flash-Mode";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Target partition for the uploaded image, sent as the `X-Flash-Mode`
/// header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMode {
    /// Application partition (the default).
    Firmware,
    /// SPIFFS filesystem partition.
    Spiffs,
}

impl FlashMode {
    /// Wire value for the `X-Flash-Mode` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashMode::Firmware => "firmware",
            FlashMode::Spiffs => "spiffs",
        }
    }
}

impl fmt::Display for FlashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlashMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firmware" => Ok(FlashMode::Firmware),
            "spiffs" => Ok(FlashMode::Spiffs),
            other => Err(format!(
                "Unknown flash mode '{}' (expected 'firmware' or 'spiffs')",
                other
            )),
        }
    }
}

/// HTTP Basic credentials for endpoints that require authentication.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Configuration for uploads
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Partition selector sent in the `X-Flash-Mode` header.
    pub flash_mode: FlashMode,
    /// Timeout in seconds for the whole request.
    pub timeout_secs: u64,
    /// Optional HTTP Basic credentials.
    pub credentials: Option<Credentials>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            flash_mode: FlashMode::Firmware,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credentials: None,
        }
    }
}

/// Upload an image to the device's OTA endpoint.
///
/// Issues a single POST to `url` with the file's raw bytes as the body,
/// streamed from the open handle with an exact `Content-Length` (the
/// device's httpd reads `content_len`, so a chunked request would hand it
/// zero). Returns the response body text on a 2xx status; any other status
/// becomes [`UploadError::HttpStatus`] carrying the status code and body.
///
/// The URL is not validated up front; a bad scheme or unreachable host
/// surfaces as a request error.
pub fn upload(firmware: &Path, url: &str, config: &UploadConfig) -> Result<String, UploadError> {
    let file = File::open(firmware)?;
    let length = file.metadata()?.len();

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let mut request = client
        .post(url)
        .header(FLASH_MODE_HEADER, config.flash_mode.as_str())
        .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
        .body(reqwest::blocking::Body::sized(file, length));

    if let Some(credentials) = &config.credentials {
        request = request.basic_auth(&credentials.username, Some(&credentials.password));
    }

    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(UploadError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
