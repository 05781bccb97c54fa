//! `oblink` 바이너리 진입점.

use anyhow::Result;
use serde_json::json;

use oblink::BridgeHelper;
use oblink::interface::cli::{AppComposition, Cli, CliAction, CliInvocation};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = match Cli::parse_action() {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();
    if let Err(err) = run(&composition, invocation).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(composition: &AppComposition, invocation: CliInvocation) -> Result<()> {
    // 설정 점검은 어댑터 조립 없이도 가능해야 한다.
    let connect = || {
        composition
            .connect_bridge_usecase()
            .execute(&invocation.overrides)
    };

    match invocation.action {
        CliAction::InspectConfig => {
            println!("{}", composition.inspect_config_usecase().execute()?);
        }
        CliAction::Bridge => {
            let bridge = connect()?.bridge().await?;
            println!("{}", serde_json::to_string_pretty(&bridge)?);
        }
        CliAction::Token => {
            println!("{}", connect()?.auth_token().await);
        }
        CliAction::Status => print_status(&connect()?).await?,
        CliAction::AddProcessor(request) => match connect()?.add_processor(&request).await? {
            Some(processor) => println!("{}", serde_json::to_string_pretty(&processor)?),
            None => eprintln!("OpenBridge is disabled; nothing created"),
        },
        CliAction::DeleteProcessor(id) => {
            let helper = connect()?;
            helper.remove_processor(&id).await?;
            if helper.is_enabled() {
                println!("deleted processor {id}");
            }
        }
    }
    Ok(())
}

async fn print_status(helper: &BridgeHelper) -> Result<()> {
    let (bridge, token) = futures::join!(helper.bridge(), helper.auth_token());
    let mut summary = json!({
        "enabled": helper.is_enabled(),
        "token_available": !token.is_sentinel(),
    });
    match bridge {
        Ok(bridge) => summary["bridge"] = serde_json::to_value(bridge)?,
        Err(err) => summary["bridge_error"] = json!(err.to_string()),
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
