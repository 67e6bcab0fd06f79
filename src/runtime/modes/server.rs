//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::services::{redirect_routes, url_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime;
use crate::runtime::lifetime::startup::StartupContext;

/// 注册共享状态和路由
///
/// 创建接口必须先于兜底的 redirect 路由注册。
pub fn configure_routes(cfg: &mut web::ServiceConfig, ctx: &StartupContext) {
    cfg.app_data(web::Data::new(ctx.store.clone()))
        .app_data(web::Data::new(ctx.validator.clone()))
        .app_data(web::Data::new(ctx.link_settings.clone()))
        .service(url_routes())
        .service(redirect_routes());
}

/// Run the HTTP server
///
/// This function:
/// 1. Opens and initializes the URL store (aborts on failure)
/// 2. Configures and starts the HTTP server
/// 3. Listens for Ctrl+C
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: StaticConfig) -> Result<()> {
    let ctx = lifetime::startup::prepare_server_startup(&config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .configure(|cfg| configure_routes(cfg, &ctx))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: server stopped");
        }
    }

    Ok(())
}
