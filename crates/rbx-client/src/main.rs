//! Group lookup CLI
//!
//! Run with:
//! ```bash
//! cargo run -p rbx-client --bin rbx-groups -- <group-id> [<user-id>]
//! ```
//!
//! Prints the resolved group, its allies and enemies, and (when a user id is
//! given) that user's role in the group as JSON on stdout.

use anyhow::{bail, Context};
use rbx_client::GroupClient;
use rbx_common::{try_init_tracing_with_config, ClientConfig, ConfigError, TracingConfig};
use rbx_core::{GroupId, User, UserId};
use serde_json::json;
use tracing::{error, info};

const USAGE: &str = "usage: rbx-groups <group-id> [<user-id>]";

#[tokio::main]
async fn main() {
    let config = ClientConfig::from_env();

    // Tracing comes up before anything can log
    if let Err(e) = try_init_tracing_with_config(&tracing_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(anyhow::Error::new(e).context("Failed to load configuration")),
    };

    if let Err(e) = result {
        error!(error = %e, "Lookup failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Tracing preset for the loaded config; an unusable config gets the defaults
fn tracing_config(config: &Result<ClientConfig, ConfigError>) -> TracingConfig {
    config
        .as_ref()
        .map_or_else(|_| TracingConfig::default(), |c| TracingConfig::for_environment(c.app.env))
}

async fn run(config: ClientConfig) -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(raw_group) = args.next() else {
        bail!(USAGE);
    };
    let group_id = GroupId::parse(&raw_group).context("Invalid group id")?;
    let user_id = args
        .next()
        .map(|raw| UserId::parse(&raw))
        .transpose()
        .context("Invalid user id")?;

    info!(env = ?config.app.env, group_id = %group_id, "Configuration loaded");

    let client = GroupClient::from_config(&config)?;
    let group = client.group(group_id).await?;
    let (allies, enemies) = futures::try_join!(client.allies(&group), client.enemies(&group))?;

    let mut output = json!({
        "group": group,
        "allies": allies,
        "enemies": enemies,
    });

    if let Some(user_id) = user_id {
        let user = User::new(user_id);
        let role = client.role_of(&user, &group).await?;
        output["member"] = json!({
            "user_id": user_id,
            "role": role,
        });
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
