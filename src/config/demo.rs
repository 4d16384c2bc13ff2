use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One step of the demo tool's operation chain.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpSpec {
    /// Add `delta` to one channel plane.
    Shift { channel: usize, delta: f32 },
    /// Multiply one channel plane by `factor`.
    Scale { channel: usize, factor: f32 },
    /// Clamp every sample into [0, 1].
    Clamp,
    /// Collapse RGB into a single luma plane.
    Grayscale,
    RgbToHsv,
    HsvToRgb,
    RgbToHcl,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub image_out: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub ops: Vec<OpSpec>,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let config_path = args.next().ok_or_else(|| usage(program))?;
    if config_path == "--help" || config_path == "-h" {
        return Err(usage(program));
    }
    load_config(Path::new(&config_path))
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <config.json>")
}
