use clap::Parser;

mod commands;
mod core;

use commands::Commands;
use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "apx")]
#[command(about = "Send REST API requests and browse OpenAPI / Swagger specifications.")]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[arg(long = "no-color", help = "Disable colored output", global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);

    if args.no_color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Request(request_command) => match request_command.command {
            commands::request::RequestSubcommand::Send(send_args) => {
                commands::request::execute_send(&send_args).await
            }
            commands::request::RequestSubcommand::Show(show_args) => {
                commands::request::execute_show(&show_args)
            }
        },
        Commands::Spec(spec_command) => match spec_command.command {
            commands::spec::SpecSubcommand::Analyze(analyze_args) => {
                commands::spec::execute_analyze(&analyze_args).await
            }
        },
    }
}
