use anyhow::Result;
use clap::Parser;

use docs_publish::commands::{self, Action};
use docs_publish::config::{self, Config};
use docs_publish::deploy::DeployRequest;
use docs_publish::tools::{Invocation, ProcessRunner};
use docs_publish::ui;

#[derive(clap::Parser)]
#[command(
    name = "docs-publish",
    about = "Serve, build and deploy versioned project documentation"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the external command instead of running it")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,

    #[arg(
        value_name = "COMMAND",
        help = "serve | build | build-pdf | deploy-version (default: serve)"
    )]
    command: Option<String>,

    #[arg(
        value_name = "ARGS",
        help = "For deploy-version: [version] [message], defaulting to \"latest\" and a templated message"
    )]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("docs-publish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // No command token defaults to serving the documentation locally
    let token = args.command.unwrap_or_else(|| "serve".to_string());
    let action = match Action::from_token(&token) {
        Some(action) => action,
        None => {
            ui::display_error(&format!("Unknown command: {}", token));
            ui::display_available_commands(&Action::NAMES);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        let invocation = plan_invocation(action, &config, &args.args);
        ui::display_status(&format!("Would run: {}", invocation));
        return Ok(());
    }

    let runner = ProcessRunner::new();
    let code = match action {
        Action::Serve => commands::serve(&runner, &config)?,
        Action::Build => commands::build(&runner, &config)?,
        Action::BuildPdf => commands::build_pdf(&runner, &config)?,
        Action::DeployVersion => {
            let request = DeployRequest::from_args(&args.args);
            commands::deploy_version(&runner, &config, &request)?
        }
    };

    // The external tool's exit status is propagated, not interpreted
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

/// Build the invocation an action would run, without running it.
fn plan_invocation(action: Action, config: &Config, rest: &[String]) -> Invocation {
    match action {
        Action::Serve => commands::serve_invocation(config),
        Action::Build => commands::build_invocation(config),
        Action::BuildPdf => commands::build_pdf_invocation(config),
        Action::DeployVersion => {
            let request = DeployRequest::from_args(rest);
            commands::deploy_invocation(config, &request)
        }
    }
}
