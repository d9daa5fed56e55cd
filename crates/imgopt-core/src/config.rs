use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// WebP quality on libwebp's 0-100 scale.
pub const WEBP_QUALITY: f32 = 85.0;

/// libwebp compression effort (0 = fastest, 6 = slowest/smallest).
pub const WEBP_METHOD: i32 = 6;

/// Per-run configuration, optionally overridden by `~/.config/imgopt/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Target width when none is given on the command line.
    pub default_width: u32,
    /// Output directory relative to the project root.
    pub output_subdir: PathBuf,
    /// Whole-request timeout for the image download, in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent with the download request.
    pub user_agent: String,
    /// `Accept` sent with the download request.
    pub accept: String,
    /// `Accept-Language` sent with the download request.
    pub accept_language: String,
    /// Fixed encoder quality; not read from the config file.
    #[serde(skip, default = "default_quality")]
    pub quality: f32,
    /// Fixed encoder effort; not read from the config file.
    #[serde(skip, default = "default_method")]
    pub method: i32,
}

fn default_quality() -> f32 {
    WEBP_QUALITY
}

fn default_method() -> i32 {
    WEBP_METHOD
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            default_width: 1200,
            output_subdir: PathBuf::from("public").join("images"),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            accept: "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            quality: WEBP_QUALITY,
            method: WEBP_METHOD,
        }
    }
}

impl OptimizeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute output directory for a given project root.
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output_subdir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgopt")?;
    Ok(xdg_dirs.get_config_home().join("imgopt").join("config.toml"))
}

/// Load configuration from `path`, or defaults if the file does not exist.
/// Never creates the file.
pub fn load_from(path: &Path) -> Result<OptimizeConfig> {
    if !path.exists() {
        return Ok(OptimizeConfig::default());
    }
    let data = fs::read_to_string(path)?;
    let cfg: OptimizeConfig = toml::from_str(&data)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Load configuration from the XDG config dir, falling back to defaults.
pub fn load() -> Result<OptimizeConfig> {
    load_from(&config_path()?)
}
