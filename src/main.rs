use anyhow::Result;
use clap::{Parser, Subcommand};

use kiln_cli::commands::{BuildCommand, InitCommand};
use kiln_cli::utils::output::{set_verbosity, OutputLevel};

#[derive(Parser)]
#[command(name = "kiln")]
#[command(about = "Kiln CLI - containerized native builds with host-owned artifacts")]
#[command(version = env!("KILN_CLI_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Global container tool override (docker/podman)
    #[arg(long)]
    container_tool: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new kiln project
    Init {
        /// Directory to initialize (defaults to current directory)
        directory: Option<String>,
        /// Container image to seed the config with
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Run the native build inside a container
    Build {
        /// Path to kiln.toml configuration file
        #[arg(short = 'C', long, default_value = "kiln.toml")]
        config: String,
        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Additional arguments to pass to the container runtime
        #[arg(long = "container-arg")]
        container_args: Option<Vec<String>>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { directory, image } => {
            let init_cmd = InitCommand::new(image, directory);
            init_cmd.execute()?;
            Ok(())
        }
        Commands::Build {
            config,
            verbose,
            container_args,
        } => {
            if verbose {
                set_verbosity(OutputLevel::Verbose);
            }
            let build_cmd =
                BuildCommand::new(config, verbose, cli.container_tool, container_args);
            build_cmd.execute().await?;
            Ok(())
        }
    }
}
