use std::{future::Future, path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use blockfrost_module_node::{
    schema::{credential_description, node_description},
    BlockfrostNodeModule,
};
use blockfrost_node_common::{
    configuration::{CONFIG_KEY_PROJECT_ID, DEFAULT_NETWORK, DEFAULT_SUBSCRIBE_TOPIC},
    messages::{ExecuteOutcome, Message},
    OperationRequest,
};
use caryatid_process::Process;
use caryatid_sdk::{module, Context, Module};
use clap::{Parser, Subcommand};
use config::{Config, Environment, File};
use serde_json::Value;
use tokio::{select, sync::mpsc};
use tracing::info;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter, Layer as _,
    Registry,
};

const NODE_MODULE: &str = "module.blockfrost-node";

fn default_config_path() -> PathBuf {
    PathBuf::from(option_env!("BLOCKFROST_NODE_DEFAULT_CONFIG").unwrap_or("blockfrost-node.toml"))
}

#[derive(clap::Parser, Clone)]
struct Args {
    /// Path to configuration.
    #[arg(long, default_value = default_config_path().into_os_string())]
    config: PathBuf,
    /// Blockfrost project ID, overrides the configuration file.
    #[arg(long)]
    project_id: Option<String>,
    /// mainnet, preprod or preview, overrides the configuration file.
    #[arg(long)]
    network: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Print the node description as JSON.
    Describe {
        /// Print the credential description instead.
        #[arg(long)]
        credential: bool,
    },
    /// Run one operation and print its output as JSON.
    Execute {
        #[arg(long)]
        category: String,
        #[arg(long)]
        operation: String,
        /// Input field as name=value; values are read as JSON when they parse.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, Value)>,
    },
}

fn parse_field(text: &str) -> Result<(String, Value), String> {
    let (name, raw) = text
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{text}'"))?;
    if name.is_empty() {
        return Err(format!("missing field name in '{text}'"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}

/// File, then BLOCKFROST_* environment, then command line
fn load_config(args: &Args) -> Result<Config> {
    let env = Config::builder().add_source(Environment::with_prefix("BLOCKFROST")).build()?;
    let project_id = args.project_id.clone().or(env.get_string("project_id").ok());
    let network = args.network.clone().or(env.get_string("network").ok());

    Ok(Config::builder()
        .add_source(File::from(args.config.as_path()))
        .set_override_option(format!("{NODE_MODULE}.{CONFIG_KEY_PROJECT_ID}"), project_id)?
        .set_override_option(format!("{NODE_MODULE}.{}", DEFAULT_NETWORK.0), network)?
        .build()?)
}

#[derive(Clone)]
struct CliState {
    request: OperationRequest,
    topic: String,
    done: mpsc::Sender<Result<()>>,
}
impl CliState {
    pub fn run<F, Fut>(self, ctx: Arc<Context<Message>>, fut: F)
    where
        F: FnOnce(OperationRequest, String, Arc<Context<Message>>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let request = self.request.clone();
        let topic = self.topic.clone();
        let c = ctx.clone();
        ctx.run(async move {
            let result = fut(request, topic, c).await;
            let _ = self.done.send(result).await;
        });
    }
}

tokio::task_local!(static CLI: CliState);
async fn run_process(
    process: Process<Message>,
    request: OperationRequest,
    topic: String,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(1);
    let state = CliState {
        request,
        topic,
        done: tx,
    };
    select! {
        res = CLI.scope(state, process.run()) => {
            res?;
            bail!("process terminated")
        }
        res = rx.recv() => {
            match res {
                Some(result) => {
                    info!("process completed");
                    result
                }
                None => bail!("process terminated")
            }
        }
    }
}

#[tokio::main]
pub async fn main() -> Result<()> {
    let args = Args::try_parse()?;

    // Standard logging using RUST_LOG for log levels default to INFO for events only
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_default_env().add_directive(filter::LevelFilter::INFO.into()))
        .with_filter(filter::filter_fn(|meta| meta.is_event()));
    Registry::default().with(fmt_layer).init();

    let (category, operation, fields) = match &args.command {
        Command::Describe { credential } => {
            let description = if *credential {
                serde_json::to_string_pretty(&credential_description())?
            } else {
                serde_json::to_string_pretty(&node_description())?
            };
            println!("{description}");
            return Ok(());
        }
        Command::Execute {
            category,
            operation,
            fields,
        } => (category.clone(), operation.clone(), fields.clone()),
    };

    let request = fields
        .into_iter()
        .fold(OperationRequest::new(category, operation), |request, (name, value)| {
            request.with_field(&name, value)
        });

    let config = Arc::new(load_config(&args)?);
    let topic = config
        .get_string(&format!("{NODE_MODULE}.{}", DEFAULT_SUBSCRIBE_TOPIC.0))
        .unwrap_or(DEFAULT_SUBSCRIBE_TOPIC.1.to_string());
    let mut process = Process::<Message>::create(config).await;

    BlockfrostNodeModule::register(&mut process);
    CliDriver::register(&mut process);

    run_process(process, request, topic).await
}

#[module(
    message_type(Message),
    name = "cli-driver",
    description = "Module to interface with the CLI tool"
)]
struct CliDriver;
impl CliDriver {
    pub async fn init(&self, context: Arc<Context<Message>>, _config: Arc<Config>) -> Result<()> {
        let state = CLI.get();
        state.run(context, move |request, topic, context| async move {
            let response = context.request(&topic, Arc::new(Message::from(request))).await?;
            match response.as_ref() {
                Message::Executed(ExecuteOutcome::Output(output)) => {
                    println!("{}", serde_json::to_string_pretty(output)?);
                    Ok(())
                }
                Message::Executed(ExecuteOutcome::Error(e)) => bail!("{e}"),
                other => bail!("unexpected response {other:?}"),
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_reads_json_then_text() {
        assert_eq!(
            parse_field("epochNumber=300").unwrap(),
            ("epochNumber".to_string(), json!(300))
        );
        assert_eq!(
            parse_field("poolId=pool1abc").unwrap(),
            ("poolId".to_string(), json!("pool1abc"))
        );
        assert_eq!(
            parse_field("additionalUtxos=[]").unwrap(),
            ("additionalUtxos".to_string(), json!([]))
        );
        assert_eq!(parse_field("label=a=b").unwrap(), ("label".to_string(), json!("a=b")));
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert!(parse_field("nothing").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn test_execute_arguments() {
        let args = Args::try_parse_from([
            "blockfrost-node",
            "--network",
            "preprod",
            "execute",
            "--category",
            "blocks",
            "--operation",
            "getBlock",
            "--field",
            "hashOrNumber=123",
        ])
        .unwrap();
        assert_eq!(args.network.as_deref(), Some("preprod"));
        let Command::Execute { category, fields, .. } = args.command else {
            panic!("expected execute");
        };
        assert_eq!(category, "blocks");
        assert_eq!(fields, vec![("hashOrNumber".to_string(), json!(123))]);
    }
}
