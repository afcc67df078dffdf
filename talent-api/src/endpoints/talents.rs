use super::{Skill, TalentId, YearsExperience};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: TalentId,
    pub name: String,
    /// Not always present on the wire; loaders fill it from `name`.
    #[serde(default)]
    pub display_name: String,
    pub location: String,
    pub timezone: String,
    pub primary_skill: Skill,
    #[serde(default)]
    pub skills: Vec<String>,
    pub years_experience: YearsExperience,
    pub availability_hrs_per_week: u32,
    pub rate_usd_per_hour: f64,
    pub rating: f64,
    pub verified: bool,
    pub last_active: DateTime<Utc>,
    /// May contain markup. Never render this verbatim.
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Profile {
    /// Copy `name` into `display_name`. Safe to call more than once.
    pub fn with_display_name(mut self) -> Self {
        self.display_name.clone_from(&self.name);
        self
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListTalents;

impl ListTalents {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListTalents {
    type Data = ();
    type Response = TalentsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/talents".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }
}

// Responses

/// The endpoint returns a bare JSON array of profiles.
pub type TalentsResponse = Vec<Profile>;
