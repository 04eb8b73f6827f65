//! Folio MCP Server
//!
//! Exposes the portfolio's open source activity to MCP clients over stdio.
//! Every tool call is answered from a live `GET` against the Folio API at
//! `FOLIO_API_URL`; nothing is cached here.
//! - `contributions`: latest pull requests with their status
//! - `orgs`: organization affiliations

mod client;
mod server;

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use server::FolioServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let server = FolioServer::from_env().context("failed to build Folio API client")?;
    tracing::info!("folio MCP server ready on stdio");

    let service = server
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .context("MCP handshake failed")?;
    let reason = service.waiting().await?;
    tracing::info!(?reason, "folio MCP server stopped");

    Ok(())
}
