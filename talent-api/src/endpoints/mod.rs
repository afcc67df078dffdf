pub mod talents;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalentId(String);

impl TalentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TalentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary skill of a profile. The set is closed; unknown values fail to parse.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[default]
    Frontend,
    Backend,
    Fullstack,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::Frontend, Skill::Backend, Skill::Fullstack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Fullstack",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Frontend => Self::Backend,
            Self::Backend => Self::Fullstack,
            Self::Fullstack => Self::Frontend,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Frontend => Self::Fullstack,
            Self::Backend => Self::Frontend,
            Self::Fullstack => Self::Backend,
        }
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = SkillParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| SkillParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillParseError(String);

impl Display for SkillParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid skill '{}': expected Frontend, Backend, or Fullstack",
            self.0
        )
    }
}

impl std::error::Error for SkillParseError {}

/// Years of experience. Always finite and non-negative so that ordering is total.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct YearsExperience(f64);

impl YearsExperience {
    pub fn new(value: f64) -> Result<Self, YearsExperienceError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(YearsExperienceError(value))
        }
    }

    pub fn inner(&self) -> f64 {
        self.0
    }

    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for YearsExperience {
    type Error = YearsExperienceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u32> for YearsExperience {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl Display for YearsExperience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `4.0` reads as "4", `2.5` stays "2.5"
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for YearsExperience {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearsExperienceError(f64);

impl Display for YearsExperienceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid years of experience {}: expected a finite, non-negative number",
            self.0
        )
    }
}

impl std::error::Error for YearsExperienceError {}
