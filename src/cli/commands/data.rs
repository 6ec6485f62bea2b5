use anyhow::{anyhow, bail};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::cli::{utils, OutputFormat};
use crate::resources::RESOURCE_PATHS;

#[derive(Args, Clone)]
pub struct Connection {
    #[arg(long, env = "CAMPUS_API_URL", default_value = "http://localhost:8080", help = "Server base URL")]
    pub server: String,

    #[arg(long, env = "CAMPUS_API_TOKEN", help = "Bearer token (see `campus token`)")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum DataCommands {
    #[command(about = "List every record of a resource")]
    List {
        #[arg(help = "Resource path, e.g. helprequests")]
        resource: String,
        #[command(flatten)]
        conn: Connection,
    },

    #[command(about = "Show one record")]
    Get {
        #[arg(help = "Resource path, e.g. ucsborganization")]
        resource: String,
        #[arg(help = "Record id")]
        id: String,
        #[command(flatten)]
        conn: Connection,
    },

    #[command(about = "Delete one record")]
    Delete {
        #[arg(help = "Resource path")]
        resource: String,
        #[arg(help = "Record id")]
        id: String,
        #[command(flatten)]
        conn: Connection,
    },
}

pub async fn handle(cmd: DataCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    match cmd {
        DataCommands::List { resource, conn } => {
            let url = resource_url(&conn.server, &resource, "/all", None)?;
            let records = send(authorized(client.get(url), &conn)).await?;
            utils::output_records(output_format, &records)
        }
        DataCommands::Get { resource, id, conn } => {
            let url = resource_url(&conn.server, &resource, "", Some(&id))?;
            let record = send(authorized(client.get(url), &conn)).await?;
            utils::output_records(output_format, &record)
        }
        DataCommands::Delete { resource, id, conn } => {
            let url = resource_url(&conn.server, &resource, "", Some(&id))?;
            let body = send(authorized(client.delete(url), &conn)).await?;
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Deleted")
                .to_string();
            utils::output_success(output_format, &message, None)
        }
    }
}

fn authorized(request: reqwest::RequestBuilder, conn: &Connection) -> reqwest::RequestBuilder {
    match &conn.token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn send(request: reqwest::RequestBuilder) -> anyhow::Result<Value> {
    let response = request.send().await?;
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"));
        bail!("{} ({})", message, status.as_u16());
    }
    Ok(body)
}

/// `<server>/api/<resource><suffix>[?id=<id>]`
fn resource_url(server: &str, resource: &str, suffix: &str, id: Option<&str>) -> anyhow::Result<url::Url> {
    if !RESOURCE_PATHS.contains(&resource) {
        return Err(anyhow!(
            "unknown resource '{}'; expected one of: {}",
            resource,
            RESOURCE_PATHS.join(", ")
        ));
    }

    let base = url::Url::parse(server)?;
    let mut url = base.join(&format!("/api/{}{}", resource, suffix))?;
    if let Some(id) = id {
        url.query_pairs_mut().append_pair("id", id);
    }
    Ok(url)
}
