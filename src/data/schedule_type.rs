use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Generation parameters for one schedule type, in minutes from midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotParams {
    pub start: u32,
    pub end: u32,
    pub interval: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleType {
    #[default]
    Standard,
    Extended,
    NonInstructional,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized schedule type '{0}'")]
pub struct UnrecognizedScheduleType(pub String);

impl ScheduleType {
    pub const ALL: [ScheduleType; 3] = [
        ScheduleType::Standard,
        ScheduleType::Extended,
        ScheduleType::NonInstructional,
    ];

    pub fn params(self) -> SlotParams {
        match self {
            ScheduleType::Standard => SlotParams {
                start: 8 * 60 + 30,
                end: 16 * 60 + 30,
                interval: 60,
            },
            ScheduleType::Extended => SlotParams {
                start: 10 * 60,
                end: 19 * 60,
                interval: 60,
            },
            ScheduleType::NonInstructional => SlotParams {
                start: 9 * 60,
                end: 15 * 60,
                interval: 90,
            },
        }
    }

    /// The token used on the command line, in config.yaml and in exports.
    pub fn token(self) -> &'static str {
        match self {
            ScheduleType::Standard => "standard",
            ScheduleType::Extended => "extended",
            ScheduleType::NonInstructional => "non-instructional",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ScheduleType::Standard => "Standard",
            ScheduleType::Extended => "Extended",
            ScheduleType::NonInstructional => "Non-Instructional",
        }
    }

    /// Cycles through the variants in declaration order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ScheduleType::Standard => ScheduleType::Extended,
            ScheduleType::Extended => ScheduleType::NonInstructional,
            ScheduleType::NonInstructional => ScheduleType::Standard,
        }
    }
}

impl FromStr for ScheduleType {
    type Err = UnrecognizedScheduleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScheduleType::ALL
            .into_iter()
            .find(|t| t.token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnrecognizedScheduleType(s.to_string()))
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
