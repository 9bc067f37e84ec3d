//! Build command implementation that runs the native build inside a container.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::utils::{
    config::Config,
    container::{
        BuildContainer, ContainerArgBuilder, ContainerRuntimeKind, RunConfig,
        DEFAULT_BUILD_VOLUME_PATH,
    },
    environment::HostEnvironment,
    output::{print_info, print_success, OutputLevel},
    tool::resolve_container_tool,
};

/// Implementation of the 'build' command.
pub struct BuildCommand {
    /// Path to configuration file
    pub config_path: String,
    /// Enable verbose output
    pub verbose: bool,
    /// Container tool override from the CLI
    pub container_tool: Option<String>,
    /// Additional arguments to pass to the container runtime
    pub container_args: Option<Vec<String>>,
}

impl BuildCommand {
    /// Create a new BuildCommand instance
    pub fn new(
        config_path: String,
        verbose: bool,
        container_tool: Option<String>,
        container_args: Option<Vec<String>>,
    ) -> Self {
        Self {
            config_path,
            verbose,
            container_tool,
            container_args,
        }
    }

    /// Execute the build command
    pub async fn execute(&self) -> Result<()> {
        let config = Config::load(&self.config_path)
            .with_context(|| format!("Failed to load config from {}", self.config_path))?;

        let image = config
            .get_image()
            .ok_or_else(|| anyhow::anyhow!("No container image specified in config under 'build.image'"))?
            .clone();

        let command = config
            .get_build_command()
            .ok_or_else(|| anyhow::anyhow!("No build command specified in config under 'build.command'"))?
            .clone();

        let tool = resolve_container_tool(
            self.container_tool.as_deref(),
            config.get_container_tool().map(String::as_str),
        );
        let runtime = ContainerRuntimeKind::detect(&tool);
        let env = HostEnvironment::capture();

        print_info(
            &format!("Using container tool '{tool}' ({runtime:?})"),
            OutputLevel::Verbose,
        );

        let output_path = self.prepare_output_dir(&config)?;
        let base_args = self.base_container_args(&config);
        let args = ContainerArgBuilder::new(runtime, env, base_args);

        let container_volume_path = config
            .get_volume_path()
            .cloned()
            .unwrap_or_else(|| DEFAULT_BUILD_VOLUME_PATH.to_string());

        print_info(
            &format!("Building '{image}' -> {output_path}"),
            OutputLevel::Normal,
        );

        let container = BuildContainer::new(tool).verbose(self.verbose);
        let run = RunConfig {
            image,
            command: vec!["sh".to_string(), "-c".to_string(), command],
            output_path,
            container_volume_path,
            verbose: self.verbose,
        };

        let success = container.run_build(&args, &run).await?;
        if !success {
            return Err(anyhow::anyhow!("Container build failed."));
        }

        print_success("Build completed.", OutputLevel::Normal);
        Ok(())
    }

    /// Create the host output directory and resolve it to an absolute path
    /// suitable for mounting.
    fn prepare_output_dir(&self, config: &Config) -> Result<String> {
        let output_dir = config
            .get_output_dir()
            .map(String::as_str)
            .unwrap_or("build");

        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory '{output_dir}'"))?;

        let absolute = Path::new(output_dir)
            .canonicalize()
            .with_context(|| format!("Failed to resolve output directory '{output_dir}'"))?;

        Ok(absolute.to_string_lossy().to_string())
    }

    /// Collaborator-contributed prefix tokens: container lifecycle flags
    /// plus any extra arguments from the config file and the CLI.
    fn base_container_args(&self, config: &Config) -> Vec<String> {
        let mut args = vec![
            "--rm".to_string(),
            "--name".to_string(),
            format!("kiln-{}", Uuid::new_v4()),
        ];
        if let Some(extra) = config.get_container_args() {
            args.extend(extra.iter().cloned());
        }
        if let Some(extra) = &self.container_args {
            args.extend(extra.iter().cloned());
        }
        args
    }
}
