use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Parser;
use tracing::{info, warn};

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, Parser)]
#[command(name = "linkup-backend", about = "LinkUp Backend")]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory holding the built single-page app (index.html, static/)
    #[arg(long, env = "FRONTEND_BUILD_DIR", default_value = "../frontend/build")]
    pub frontend_build_dir: PathBuf,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
    pub cors_origins: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub frontend_build_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let cors_origins = parse_origins(&cli.cors_origins);

        if cors_origins.iter().any(|origin| origin == "*") {
            bail!("CORS_ORIGINS must list explicit origins when credentials are enabled");
        }

        Ok(Self {
            host: cli.host,
            port: cli.port,
            frontend_build_dir: cli.frontend_build_dir,
            cors_origins,
        })
    }

    pub fn for_tests(frontend_build_dir: &Path) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            frontend_build_dir: frontend_build_dir.to_path_buf(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }

    pub fn static_dir(&self) -> PathBuf {
        self.frontend_build_dir.join("static")
    }

    pub fn index_path(&self) -> PathBuf {
        self.frontend_build_dir.join("index.html")
    }

    /// Logs what the build directory holds. A missing directory is not fatal.
    pub fn log_frontend_build(&self) {
        let dir = &self.frontend_build_dir;
        info!(path = %dir.display(), "serving single-page app build");
        match std::fs::read_dir(dir) {
            Ok(entries) => {
                let files = entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect::<Vec<_>>();
                info!(?files, "files in build directory");
            }
            Err(err) => warn!(path = %dir.display(), error = %err, "build directory not found"),
        }
    }
}
