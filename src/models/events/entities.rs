use serde::{Deserialize, Serialize};

// Event category
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventCategory {
    Literary,
    Sports,
    Arts,
    #[serde(rename = "Science/Maths")]
    ScienceMaths,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Literary,
        EventCategory::Sports,
        EventCategory::Arts,
        EventCategory::ScienceMaths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Literary => "Literary",
            EventCategory::Sports => "Sports",
            EventCategory::Arts => "Arts",
            EventCategory::ScienceMaths => "Science/Maths",
        }
    }
}

impl<'de> Deserialize<'de> for EventCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EventCategory>()
            .map_err(|_| serde::de::Error::custom("Invalid event category"))
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Literary" => Ok(EventCategory::Literary),
            "Sports" => Ok(EventCategory::Sports),
            "Arts" => Ok(EventCategory::Arts),
            "Science/Maths" => Ok(EventCategory::ScienceMaths),
            _ => Err(format!("Invalid event category: {s}")),
        }
    }
}

// Achievement level, ordered from highest to lowest award
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AchievementLevel {
    #[serde(rename = "National Winner")]
    NationalWinner,
    #[serde(rename = "National Participation")]
    NationalParticipation,
    #[serde(rename = "State Winner")]
    StateWinner,
    #[serde(rename = "State Participation")]
    StateParticipation,
    #[serde(rename = "District Winners")]
    DistrictWinners,
    #[serde(rename = "District Participation")]
    DistrictParticipation,
    #[serde(rename = "Interschool Ekm District Winners")]
    InterschoolEkmDistrictWinners,
    #[serde(rename = "Interschool Ekm District Participation")]
    InterschoolEkmDistrictParticipation,
    #[serde(rename = "Mayookham Winners")]
    MayookhamWinners,
}

impl AchievementLevel {
    pub const ALL: [AchievementLevel; 9] = [
        AchievementLevel::NationalWinner,
        AchievementLevel::NationalParticipation,
        AchievementLevel::StateWinner,
        AchievementLevel::StateParticipation,
        AchievementLevel::DistrictWinners,
        AchievementLevel::DistrictParticipation,
        AchievementLevel::InterschoolEkmDistrictWinners,
        AchievementLevel::InterschoolEkmDistrictParticipation,
        AchievementLevel::MayookhamWinners,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementLevel::NationalWinner => "National Winner",
            AchievementLevel::NationalParticipation => "National Participation",
            AchievementLevel::StateWinner => "State Winner",
            AchievementLevel::StateParticipation => "State Participation",
            AchievementLevel::DistrictWinners => "District Winners",
            AchievementLevel::DistrictParticipation => "District Participation",
            AchievementLevel::InterschoolEkmDistrictWinners => "Interschool Ekm District Winners",
            AchievementLevel::InterschoolEkmDistrictParticipation => {
                "Interschool Ekm District Participation"
            }
            AchievementLevel::MayookhamWinners => "Mayookham Winners",
        }
    }
}

impl<'de> Deserialize<'de> for AchievementLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AchievementLevel>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid achievement level: '{s}'")))
    }
}

impl std::fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AchievementLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AchievementLevel::ALL
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid achievement level: {s}"))
    }
}

// Event participation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEvent {
    pub id: i64,
    pub student_id: i64,
    pub event_category: EventCategory,
    pub achievement_level: AchievementLevel,
    pub is_group: bool,
    pub points: i32,
    pub remark: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in EventCategory::ALL {
            assert_eq!(
                category.as_str().parse::<EventCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_level_round_trip() {
        for level in AchievementLevel::ALL {
            assert_eq!(level.as_str().parse::<AchievementLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&EventCategory::ScienceMaths).unwrap();
        assert_eq!(json, "\"Science/Maths\"");
        let level: AchievementLevel = serde_json::from_str("\"Mayookham Winners\"").unwrap();
        assert_eq!(level, AchievementLevel::MayookhamWinners);
    }

    #[test]
    fn test_unknown_strings_rejected() {
        assert!(serde_json::from_str::<EventCategory>("\"Chess\"").is_err());
        assert!(serde_json::from_str::<AchievementLevel>("\"Galaxy Winner\"").is_err());
    }
}
