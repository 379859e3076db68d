//! Basic FTP client example
//!
//! Run with: cargo run --example basic

use ftp_rs::ConnectionConfig;
use ftp_rs::FtpClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Configure the FTP server
    // Replace with your actual server credentials
    let config = ConnectionConfig {
        host: std::env::var("FTP_HOST").unwrap_or_else(|_| "ftp.example.com".to_string()),
        port: std::env::var("FTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(21),
        user: std::env::var("FTP_USER").unwrap_or_else(|_| "anonymous".to_string()),
        password: std::env::var("FTP_PASS").unwrap_or_else(|_| "anonymous".to_string()),
        timeout_ms: 10_000,
        keepalive_ms: 10_000,
    };

    println!("Connecting to {}:{}...", config.host, config.port);

    let mut client = FtpClient::connect(config).await?;
    println!("Connected!");

    client.login().await?;
    println!("Logged in! Features: {:?}", client.get_features());

    let cwd = client.get_current_directory().await?;
    println!("Current directory: {cwd}");

    let files = client.get_files(None).await?;
    println!("\n{} files:", files.len());
    for file in files.iter().take(10) {
        println!("  {} ({} bytes)", file.name, file.size.unwrap_or(0));
    }
    if files.len() > 10 {
        println!("  ... and {} more", files.len() - 10);
    }

    let dirs = client.get_directories(None).await?;
    println!("\n{} subdirectories:", dirs.len());
    for dir in &dirs {
        println!("  {}/", dir.name);
    }

    client.disconnect().await?;
    println!("\nConnection closed.");

    Ok(())
}
