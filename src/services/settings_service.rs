use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::settings::{AnchorOverlapPolicy, EngineSettings};

const ENV_ANCHOR_TAG: &str = "CHRONOFORGE_ANCHOR_TAG";
const ENV_DEFAULT_ANCHOR_LABEL: &str = "CHRONOFORGE_DEFAULT_ANCHOR_LABEL";
const ENV_ANCHOR_OVERLAP_POLICY: &str = "CHRONOFORGE_ANCHOR_OVERLAP_POLICY";

pub struct SettingsService;

impl SettingsService {
    /// Defaults, then the optional YAML file, then `CHRONOFORGE_*` environment overrides.
    pub fn load(path: Option<&Path>) -> AppResult<EngineSettings> {
        let settings = match path {
            Some(path) => Self::load_file(path)?,
            None => EngineSettings::default(),
        };
        let settings = apply_overrides(settings, |key| std::env::var(key).ok())?;
        ensure_valid(&settings)?;
        Ok(settings)
    }

    pub fn load_file(path: &Path) -> AppResult<EngineSettings> {
        let raw = std::fs::read_to_string(path)?;
        let settings = Self::parse(&raw)?;
        info!(target: "app::settings", path = %path.display(), "engine settings loaded");
        Ok(settings)
    }

    pub fn parse(raw: &str) -> AppResult<EngineSettings> {
        if raw.trim().is_empty() {
            return Ok(EngineSettings::default());
        }
        let settings: EngineSettings = serde_yaml::from_str(raw)?;
        ensure_valid(&settings)?;
        Ok(settings)
    }
}

pub fn apply_overrides<F>(mut settings: EngineSettings, lookup: F) -> AppResult<EngineSettings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(tag) = lookup(ENV_ANCHOR_TAG) {
        debug!(target: "app::settings", %tag, "anchor tag overridden from environment");
        settings.anchor_tag = tag;
    }

    if let Some(label) = lookup(ENV_DEFAULT_ANCHOR_LABEL) {
        settings.default_anchor_label = label;
    }

    if let Some(policy) = lookup(ENV_ANCHOR_OVERLAP_POLICY) {
        settings.anchor_overlap_policy = parse_policy(&policy)?;
    }

    Ok(settings)
}

fn parse_policy(raw: &str) -> AppResult<AnchorOverlapPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pass_through" | "pass-through" | "passthrough" => Ok(AnchorOverlapPolicy::PassThrough),
        "reject" | "strict" => Ok(AnchorOverlapPolicy::Reject),
        other => Err(AppError::config(format!(
            "unknown anchor overlap policy `{other}` (expected pass_through or reject)"
        ))),
    }
}

fn ensure_valid(settings: &EngineSettings) -> AppResult<()> {
    if settings.anchor_tag.trim().is_empty() {
        return Err(AppError::config("anchor_tag must not be empty"));
    }
    if settings.default_anchor_label.trim().is_empty() {
        return Err(AppError::config("default_anchor_label must not be empty"));
    }
    Ok(())
}
