use serde::{Deserialize, Serialize};

// The two tracked character values
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ValueType {
    #[serde(rename = "Leadership and Responsibility")]
    LeadershipAndResponsibility,
    #[serde(rename = "Bhavan's Values")]
    BhavansValues,
}

impl ValueType {
    pub const LEADERSHIP: &'static str = "Leadership and Responsibility";
    pub const BHAVANS: &'static str = "Bhavan's Values";

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::LeadershipAndResponsibility => ValueType::LEADERSHIP,
            ValueType::BhavansValues => ValueType::BHAVANS,
        }
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ValueType>().map_err(|_| {
            serde::de::Error::custom(
                "Invalid value type. Must be \"Leadership and Responsibility\" or \"Bhavan's Values\"",
            )
        })
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ValueType::LEADERSHIP => Ok(ValueType::LeadershipAndResponsibility),
            ValueType::BHAVANS => Ok(ValueType::BhavansValues),
            _ => Err(format!("Invalid value type: {s}")),
        }
    }
}

// Stored score for one (student, value type) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueRecord {
    pub id: i64,
    pub student_id: i64,
    pub value_type: ValueType,
    pub score: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
