//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::application::usecases::connect_bridge::BridgeOverrides;
use crate::domain::processor::{ProcessorRequest, parse_parameter};

#[derive(Debug, Parser)]
#[command(name = "oblink")]
#[command(about = "Resolve and authenticate against an OpenBridge event bridge")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Bridge id to resolve (overrides ob.bridge_uuid)
    #[arg(long, global = true)]
    bridge: Option<String>,

    /// Force the integration on or off (overrides ob.enabled)
    #[arg(long, global = true)]
    enabled: Option<bool>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the bridge and print it as JSON
    Bridge,
    /// Print the current auth token (a placeholder value if unavailable)
    Token,
    /// Resolve bridge and token concurrently and print a summary
    Status,
    /// Show effective merged config and secret sources
    Config,
    /// Manage processors on the bridge
    #[command(subcommand)]
    Processor(ProcessorCommands),
}

#[derive(Debug, Subcommand)]
enum ProcessorCommands {
    /// Create a processor
    Add {
        #[arg(long)]
        name: String,
        /// Action type, e.g. Webhook
        #[arg(long = "action-type")]
        action_type: String,
        /// Action parameter as key=value (repeatable)
        #[arg(long = "param")]
        params: Vec<String>,
    },
    /// Delete a processor by id
    Delete { id: String },
}

pub enum CliAction {
    InspectConfig,
    Bridge,
    Token,
    Status,
    AddProcessor(ProcessorRequest),
    DeleteProcessor(String),
}

pub struct CliInvocation {
    pub overrides: BridgeOverrides,
    pub action: CliAction,
}

impl Cli {
    pub fn parse_action() -> Result<CliInvocation, String> {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> Result<CliInvocation, String> {
        let overrides = BridgeOverrides {
            enabled: self.enabled,
            bridge_id: self.bridge,
        };

        let action = match self.command {
            Commands::Bridge => CliAction::Bridge,
            Commands::Token => CliAction::Token,
            Commands::Status => CliAction::Status,
            Commands::Config => CliAction::InspectConfig,
            Commands::Processor(ProcessorCommands::Add {
                name,
                action_type,
                params,
            }) => {
                let mut request = ProcessorRequest::new(name, action_type);
                for raw in &params {
                    let (key, value) = parse_parameter(raw).map_err(|e| e.to_string())?;
                    request = request.with_parameter(key, value);
                }
                CliAction::AddProcessor(request)
            }
            Commands::Processor(ProcessorCommands::Delete { id }) => CliAction::DeleteProcessor(id),
        };

        Ok(CliInvocation { overrides, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliInvocation, String> {
        Cli::try_parse_from(args)
            .map_err(|e| e.to_string())?
            .into_invocation()
    }

    #[test]
    fn global_overrides_apply_to_any_command() {
        let inv = parse(&["oblink", "bridge", "--bridge", "b-9", "--enabled", "true"]).unwrap();
        assert!(matches!(inv.action, CliAction::Bridge));
        assert_eq!(inv.overrides.bridge_id.as_deref(), Some("b-9"));
        assert_eq!(inv.overrides.enabled, Some(true));
    }

    #[test]
    fn processor_add_collects_params() {
        let inv = parse(&[
            "oblink",
            "processor",
            "add",
            "--name",
            "notify",
            "--action-type",
            "Webhook",
            "--param",
            "endpoint=http://hook",
        ])
        .unwrap();

        let CliAction::AddProcessor(request) = inv.action else {
            panic!("expected processor add");
        };
        assert_eq!(request.action.kind, "Webhook");
        assert_eq!(
            request.action.parameters.get("endpoint").map(String::as_str),
            Some("http://hook")
        );
    }

    #[test]
    fn malformed_param_is_rejected() {
        let err = parse(&[
            "oblink",
            "processor",
            "add",
            "--name",
            "n",
            "--action-type",
            "Webhook",
            "--param",
            "oops",
        ])
        .err()
        .unwrap();
        assert!(err.contains("key=value"));
    }
}
