use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Named synthesis speakers offered by the synthesis provider.
#[derive(Debug, Clone, PartialEq)]
pub enum Voice {
    Anushka,
    Priya,
    Simran,
    Ishita,
    Kavya,
    Aditya,
    Anand,
    Rohan,
    Custom(String),
}

impl Serialize for Voice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Voice::Anushka => serializer.serialize_str("anushka"),
            Voice::Priya => serializer.serialize_str("priya"),
            Voice::Simran => serializer.serialize_str("simran"),
            Voice::Ishita => serializer.serialize_str("ishita"),
            Voice::Kavya => serializer.serialize_str("kavya"),
            Voice::Aditya => serializer.serialize_str("aditya"),
            Voice::Anand => serializer.serialize_str("anand"),
            Voice::Rohan => serializer.serialize_str("rohan"),
            Voice::Custom(s) => serializer.serialize_str(s),
        }
    }
}

impl FromStr for Voice {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "anushka" => Voice::Anushka,
            "priya" => Voice::Priya,
            "simran" => Voice::Simran,
            "ishita" => Voice::Ishita,
            "kavya" => Voice::Kavya,
            "aditya" => Voice::Aditya,
            "anand" => Voice::Anand,
            "rohan" => Voice::Rohan,
            _ => Voice::Custom(s.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for Voice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Voice::from_str(&s).unwrap())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionModel {
    SaarasV3,
    Custom(String),
}

impl Serialize for TranscriptionModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TranscriptionModel::SaarasV3 => serializer.serialize_str("saaras:v3"),
            TranscriptionModel::Custom(s) => serializer.serialize_str(s),
        }
    }
}

impl FromStr for TranscriptionModel {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "saaras:v3" => TranscriptionModel::SaarasV3,
            _ => TranscriptionModel::Custom(s.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for TranscriptionModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TranscriptionModel::from_str(&s).unwrap())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisModel {
    BulbulV2,
    Custom(String),
}

impl Serialize for SynthesisModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SynthesisModel::BulbulV2 => serializer.serialize_str("bulbul:v2"),
            SynthesisModel::Custom(s) => serializer.serialize_str(s),
        }
    }
}

impl FromStr for SynthesisModel {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bulbul:v2" => SynthesisModel::BulbulV2,
            _ => SynthesisModel::Custom(s.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for SynthesisModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SynthesisModel::from_str(&s).unwrap())
    }
}
