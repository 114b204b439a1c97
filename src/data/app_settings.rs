use crate::data::persistence::{get_data_dir, Persistable};
use crate::data::{LabelLayout, ScheduleType};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Schedule type token the editor opens with.
    #[serde(default = "default_schedule_type")]
    pub default_schedule_type: String,
    #[serde(default)]
    pub label_layout: LabelLayout,
}

fn default_schedule_type() -> String {
    ScheduleType::Standard.token().to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            default_schedule_type: default_schedule_type(),
            label_layout: LabelLayout::Single,
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }

    /// The configured schedule type, or Standard when the token is unknown.
    pub fn schedule_type(&self) -> ScheduleType {
        match self.default_schedule_type.parse() {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!("{err} in config.yaml; using standard");
                ScheduleType::Standard
            }
        }
    }
}
