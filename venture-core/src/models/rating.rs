use serde::{Deserialize, Serialize};

/// Verdict tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    Doubtful,
    Acceptable,
    Good,
    Excellent,
}

impl Rating {
    pub const EXCELLENT_MIN: u8 = 80;
    pub const GOOD_MIN: u8 = 60;
    pub const ACCEPTABLE_MIN: u8 = 40;

    /// Classifies a score. The first threshold the score reaches wins.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::EXCELLENT_MIN {
            Self::Excellent
        } else if score >= Self::GOOD_MIN {
            Self::Good
        } else if score >= Self::ACCEPTABLE_MIN {
            Self::Acceptable
        } else {
            Self::Doubtful
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::Doubtful => "doubtful",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Acceptable => "ACCEPTABLE",
            Self::Doubtful => "DOUBTFUL",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Excellent => "⭐",
            Self::Good => "✅",
            Self::Acceptable => "🟡",
            Self::Doubtful => "❌",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
