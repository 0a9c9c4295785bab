use serde::Serialize;

use crate::services::nas::{
    messages::GetTechnologyPreferenceOutput,
    types::{PreferenceDuration, RadioTechnologyPreference, enum_name},
};

/// Active technology preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivePreference {
    /// Preferred technologies.
    pub preference: String,
    /// How long the preference lasts.
    pub duration: String,
}

/// Decoded technology preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechnologyPreferenceReport {
    /// Active preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActivePreference>,
    /// Persistent preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent: Option<String>,
}

impl TechnologyPreferenceReport {
    /// Decodes the present fields of a successful response.
    pub fn decode(output: &GetTechnologyPreferenceOutput) -> Self {
        Self {
            active: output.active.map(|active| ActivePreference {
                preference: RadioTechnologyPreference::from_raw(active.technology_preference)
                    .describe(),
                duration: enum_name::<PreferenceDuration>(active.duration, "preference duration"),
            }),
            persistent: output
                .persistent
                .map(|raw| RadioTechnologyPreference::from_raw(raw).describe()),
        }
    }
}
