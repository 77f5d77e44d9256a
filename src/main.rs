use clap::Parser;
use locator_healing::cli::commands::{cmd_audit, cmd_heal, cmd_resolve};
use locator_healing::cli::config::{load_config, resolve_agent_url, Cli, Commands};
use locator_healing::trace::logger::TraceLog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let agent_url = resolve_agent_url(cli.agent_url.as_deref(), &config);

    // Trace file: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.trace.file.as_deref()) {
        Some(path) => TraceLog::to_file(path),
        None => TraceLog::disabled(),
    };

    match cli.command {
        Commands::Audit { scenario, output } => {
            let healthy = cmd_audit(&scenario, output.as_deref(), &tracer, cli.verbose)?;
            if !healthy {
                std::process::exit(1);
            }
        }
        Commands::Heal { scenario, output } => {
            cmd_heal(&scenario, output.as_deref(), &tracer, cli.verbose)?;
        }
        Commands::Resolve { scenario, dump } => {
            let all_resolved = cmd_resolve(
                &scenario,
                dump.as_deref(),
                &agent_url,
                &tracer,
                cli.verbose,
            )?;
            if !all_resolved {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
