//! Configuration utilities for Kiln CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file '{0}' not found")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Build configuration section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Container image the build runs in
    pub image: Option<String>,
    /// Shell command executed inside the container
    pub command: Option<String>,
    /// Host directory mounted as the build volume
    pub output_dir: Option<String>,
}

/// Container runtime configuration section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContainerConfig {
    /// Container tool binary (docker/podman)
    pub tool: Option<String>,
    /// Extra arguments passed to `<tool> run`
    pub args: Option<Vec<String>>,
    /// In-container mount point of the build volume
    pub volume_path: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub build: Option<BuildConfig>,
    pub container: Option<ContainerConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Get the build image from configuration
    pub fn get_image(&self) -> Option<&String> {
        self.build.as_ref()?.image.as_ref()
    }

    /// Get the build command from configuration
    pub fn get_build_command(&self) -> Option<&String> {
        self.build.as_ref()?.command.as_ref()
    }

    /// Get the host output directory from configuration
    pub fn get_output_dir(&self) -> Option<&String> {
        self.build.as_ref()?.output_dir.as_ref()
    }

    /// Get the container tool from configuration
    pub fn get_container_tool(&self) -> Option<&String> {
        self.container.as_ref()?.tool.as_ref()
    }

    /// Get extra container run arguments from configuration
    pub fn get_container_args(&self) -> Option<&Vec<String>> {
        self.container.as_ref()?.args.as_ref()
    }

    /// Get the in-container build volume path from configuration
    pub fn get_volume_path(&self) -> Option<&String> {
        self.container.as_ref()?.volume_path.as_ref()
    }
}
