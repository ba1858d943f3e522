//! Composition root.
//!
//! Builds the concrete adapters, initializes telemetry from configuration,
//! composes the scopes in their mandated order, and assembles the shell.

use crate::composition::AppScopes;
use crate::shell::AppShell;
use anyhow::Result;
use claimflow_core::config::ShellConfig;
use claimflow_infrastructure::{
    ConfigService, InMemoryClaimRepository, InMemoryConversationRepository, telemetry,
};
use std::sync::Arc;

/// Everything the embedding needs after startup.
pub struct AppBootstrap {
    pub shell: AppShell,
    pub config: ShellConfig,
}

/// Bootstraps the application.
///
/// # Errors
///
/// Fails when the platform config directory cannot be resolved.
pub fn bootstrap() -> Result<AppBootstrap> {
    let config_service = ConfigService::new()?;
    let config = config_service.get_config();

    telemetry::init(&config.log_level);
    tracing::info!("[Bootstrap] Starting claimflow shell");

    let claim_repository = Arc::new(InMemoryClaimRepository::new());
    let conversation_repository = Arc::new(InMemoryConversationRepository::new());

    let scopes = AppScopes::compose(claim_repository, conversation_repository, &config);
    let shell = AppShell::new(scopes);

    tracing::info!("[Bootstrap] Shell ready");
    Ok(AppBootstrap { shell, config })
}
