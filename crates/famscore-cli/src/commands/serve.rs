//! Server command implementation

use anyhow::Result;

pub async fn cmd_serve(host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting famscore web server...");
    println!("   Listening: http://{}:{}", host, port);

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins_str = std::env::var("FAMSCORE_ALLOWED_ORIGINS").unwrap_or_default();
    let allowed_origins = famscore_server::parse_allowed_origins(&allowed_origins_str);

    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (FAMSCORE_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = famscore_server::ServerConfig { allowed_origins };
    famscore_server::serve_with_config(host, port, config).await?;

    Ok(())
}
