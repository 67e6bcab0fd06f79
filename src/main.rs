use clap::Parser;

use crclink::cli::{Cli, Commands, ConfigAction};
use crclink::config::StaticConfig;
use crclink::errors::CrclinkError;
use crclink::runtime::modes::run_server;
use crclink::system::init_logging;

fn exit_with(err: CrclinkError) -> ! {
    eprintln!("{}", err.format_colored());
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Some(Commands::Config {
        action: ConfigAction::Generate { output },
    }) = cli.command
    {
        match output {
            Some(path) => {
                if let Err(e) = StaticConfig::default().save_to_file(&path) {
                    exit_with(e);
                }
                println!("Sample configuration written to {}", path);
            }
            None => print!("{}", StaticConfig::generate_sample_config()),
        }
        return Ok(());
    }

    let config = StaticConfig::load(cli.config.as_deref()).unwrap_or_else(|e| exit_with(e));

    // guard 需存活到进程结束
    let _log_guard = init_logging(&config.logging).unwrap_or_else(|e| exit_with(e));

    run_server(config).await
}
