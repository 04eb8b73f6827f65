//! Folio MCP Server implementation
//!
//! Exposes the portfolio's contribution feed and organization list as tools.

use crate::client::{Contribution, FeedSnapshot, FolioClient, Org};
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Folio MCP Server
#[derive(Clone)]
pub struct FolioServer {
    client: FolioClient,
    tool_router: ToolRouter<Self>,
}

impl FolioServer {
    pub fn from_env() -> Result<Self> {
        let client = FolioClient::from_env()?;
        Ok(Self {
            client,
            tool_router: Self::tool_router(),
        })
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContributionsParams {
    /// How many pull requests to list (1-10, default 6)
    #[serde(default)]
    pub limit: Option<u32>,
}

const FEED_UNAVAILABLE: &str =
    "The contribution feed is unavailable right now. Check the GitHub profile directly.";

/// Plain-text rendering of a feed snapshot
fn render_contributions(snapshot: &FeedSnapshot) -> String {
    match snapshot {
        FeedSnapshot::Loading => "The contribution feed is still loading.".to_string(),
        FeedSnapshot::Failed => FEED_UNAVAILABLE.to_string(),
        FeedSnapshot::Loaded { items } if items.is_empty() => {
            "No pull requests found.".to_string()
        }
        FeedSnapshot::Loaded { items } => {
            let mut buf = String::from("Latest pull requests:\n\n");
            for item in items {
                buf.push_str(&render_contribution(item));
            }
            buf
        }
    }
}

fn render_contribution(item: &Contribution) -> String {
    let status = match item.status.as_str() {
        "merged" => "[MERGED]",
        "closed" => "[CLOSED]",
        _ => "[OPEN]",
    };
    format!(
        "{} {} {}: {}\n    {} (updated {})\n",
        status, item.repository, item.sequence_number, item.title, item.url, item.last_updated
    )
}

fn render_orgs(orgs: &[Org]) -> String {
    let mut buf = String::from("Organizations:\n\n");
    for org in orgs {
        buf.push_str(&format!("- {} ({}) {}\n", org.name, org.role, org.url));
    }
    buf
}

#[tool_router]
impl FolioServer {
    #[tool(
        description = "List the portfolio owner's most recently updated GitHub pull requests with their status (open, merged, closed)."
    )]
    async fn contributions(
        &self,
        params: Parameters<ContributionsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.get_contributions(params.0.limit).await {
            Ok(snapshot) => Ok(CallToolResult::success(vec![Content::text(
                render_contributions(&snapshot),
            )])),
            Err(e) => {
                tracing::warn!(error = %e, "contributions request failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    #[tool(description = "List the open source organizations the portfolio owner works with.")]
    async fn orgs(&self) -> Result<CallToolResult, McpError> {
        match self.client.get_orgs().await {
            Ok(orgs) => Ok(CallToolResult::success(vec![Content::text(render_orgs(
                &orgs,
            ))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        }
    }
}

#[tool_handler]
impl ServerHandler for FolioServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "folio".into(),
                title: Some("Folio MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Folio - portfolio open source activity

TOOLS:
- 'contributions' - Latest pull requests, newest first, with status
- 'orgs' - Organizations the owner maintains or contributes to

The feed is best-effort: if GitHub is unreachable the tool says so instead of
returning a partial list."#
                    .into(),
            ),
        }
    }
}
