use clap::Parser;
use slotting::cli::commands::{cmd_check, cmd_classify, cmd_slots};
use slotting::cli::config::{Cli, Commands, load_config, log_level, resolve_format};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG overrides the -v level
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Classify {
            document,
            format,
            output,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_classify(&document, &format, output.as_deref(), &config)?;
        }
        Commands::Check { document } => cmd_check(&document)?,
        Commands::Slots { document } => cmd_slots(&document)?,
    }

    Ok(())
}
