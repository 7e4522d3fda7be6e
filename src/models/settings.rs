use serde::{Deserialize, Serialize};

pub const DEFAULT_ANCHOR_TAG: &str = "[CLASS]";
pub const DEFAULT_ANCHOR_LABEL: &str = "Class";

/// What the conflict resolver does when two anchors still overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnchorOverlapPolicy {
    /// Append the later anchor uncorrected and log a warning.
    #[default]
    PassThrough,
    /// Fail the request with `AppError::AnchorOverlap`.
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct EngineSettings {
    /// Label prefix marking authoritative anchors in the output.
    pub anchor_tag: String,
    /// Label used for commitments that arrive without a subject.
    pub default_anchor_label: String,
    pub anchor_overlap_policy: AnchorOverlapPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            anchor_tag: DEFAULT_ANCHOR_TAG.to_string(),
            default_anchor_label: DEFAULT_ANCHOR_LABEL.to_string(),
            anchor_overlap_policy: AnchorOverlapPolicy::default(),
        }
    }
}
