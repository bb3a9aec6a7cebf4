use std::fmt;
use std::str::FromStr;

/// Operations guarded by a daily quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Batch,
    AiAnalysis,
}

impl Feature {
    pub const ALL: [Feature; 2] = [Feature::Batch, Feature::AiAnalysis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::AiAnalysis => "ai-analysis",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "batch" => Ok(Self::Batch),
            "ai-analysis" | "ai_analysis" | "aianalysis" => Ok(Self::AiAnalysis),
            other => Err(UnknownFeature(other.to_string())),
        }
    }
}
