//! Otakit CLI - Command-line tools for HTTP OTA firmware workflows

mod embed;
mod upload;

use clap::{Parser, Subcommand};
use otakit_core::FlashMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "otakit")]
#[command(author, version, about = "Host-side tools for HTTP OTA firmware updates")]
#[command(
    long_about = "Otakit embeds binary blobs as C headers for compiling into device firmware, \
                  and uploads firmware images to a device's web OTA endpoint."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a binary file as an include-guarded C header
    Embed {
        /// Input binary file
        input: PathBuf,

        /// Output header file (its name determines the array and guard names)
        output: PathBuf,
    },

    /// Upload a firmware image to a device's OTA endpoint
    Upload {
        /// URL of the device's OTA endpoint
        #[arg(short, long)]
        url: String,

        /// Partition to flash: firmware or spiffs
        #[arg(long, default_value = "firmware")]
        flash_mode: FlashMode,

        /// Username for HTTP Basic authentication
        #[arg(long, requires = "password")]
        username: Option<String>,

        /// Password for HTTP Basic authentication
        #[arg(long, requires = "username")]
        password: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = otakit_core::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Path to the firmware image to upload
        firmware: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Embed { input, output } => embed::run(&input, &output),

        Commands::Upload {
            url,
            flash_mode,
            username,
            password,
            timeout,
            firmware,
        } => upload::run(&firmware, &url, flash_mode, username, password, timeout),
    }
}
