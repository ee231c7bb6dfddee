use anyhow::Result;

/// Print the effective configuration without secrets.
pub fn check_config(config: &crate::config::Config) -> Result<()> {
    println!("server:  {}:{}", config.server.host, config.server.port);
    println!(
        "smtp:    {}:{} (secure: {}, user: {})",
        config.smtp.host, config.smtp.port, config.smtp.secure, config.smtp.username
    );
    println!(
        "contact: {} -> {}",
        config.contact.path,
        config.contact.recipient(&config.smtp)
    );
    println!("logging: {} ({})", config.logging.level, config.logging.format);

    tracing::info!("Configuration is valid");

    Ok(())
}
