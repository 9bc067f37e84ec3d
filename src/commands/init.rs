use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Command to initialize a new kiln project with a configuration file.
///
/// Creates a `kiln.toml` in the given directory with a commented starter
/// configuration for containerized builds.
pub struct InitCommand {
    /// Container image to seed the config with
    image: Option<String>,
    /// Directory to initialize (defaults to current directory)
    directory: Option<String>,
}

impl InitCommand {
    /// Creates a new InitCommand instance.
    pub fn new(image: Option<String>, directory: Option<String>) -> Self {
        Self { image, directory }
    }

    /// Default build image for a freshly initialized project.
    pub fn default_image() -> &'static str {
        "docker.io/library/debian:stable-slim"
    }

    /// Executes the init command, creating the kiln.toml configuration file.
    ///
    /// # Errors
    /// This function will return an error if:
    /// * The target directory cannot be created
    /// * The kiln.toml file already exists
    /// * The configuration file cannot be written
    pub fn execute(&self) -> Result<()> {
        let image = self.image.as_deref().unwrap_or_else(|| Self::default_image());
        let directory = self.directory.as_deref().unwrap_or(".");

        if !Path::new(directory).exists() {
            fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create directory '{directory}'"))?;
        }

        let toml_path = Path::new(directory).join("kiln.toml");

        if toml_path.exists() {
            anyhow::bail!(
                "Configuration file '{}' already exists.",
                toml_path.display()
            );
        }

        let config_content = format!(
            r#"##
## Build
##

[build]
image = "{image}"
command = "make"
# Host directory mounted as the build volume
output_dir = "build"

##
## Container runtime
##

[container]
# Container tool binary; also settable via KILN_CONTAINER_TOOL or
# --container-tool
#tool = "docker"

# Extra arguments passed to `<tool> run`
#args = ["--network=host"]

# In-container mount point of the build volume
#volume_path = "/project"
"#
        );

        fs::write(&toml_path, config_content).with_context(|| {
            format!(
                "Failed to write configuration file '{}'",
                toml_path.display()
            )
        })?;

        println!(
            "✓ Created config at {}.",
            toml_path
                .canonicalize()
                .unwrap_or_else(|_| toml_path.to_path_buf())
                .display()
        );

        Ok(())
    }
}
