use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unknown names are kept as `Custom` and echoed back as sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Custom(String),
}

impl Platform {
    pub fn known() -> [Platform; 4] {
        [
            Platform::Instagram,
            Platform::Facebook,
            Platform::Twitter,
            Platform::Linkedin,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Custom(name) => name,
        }
    }

    /// Parse a client-supplied name. Missing or blank input yields the default.
    pub fn parse(value: Option<&str>) -> Self {
        let name = match value.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return Platform::default(),
        };

        match name.to_lowercase().as_str() {
            "instagram" => Platform::Instagram,
            "facebook" => Platform::Facebook,
            "twitter" => Platform::Twitter,
            "linkedin" => Platform::Linkedin,
            _ => Platform::Custom(name.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Inspirational,
    Professional,
    Casual,
    Humorous,
    Educational,
    Custom(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Inspirational => "inspirational",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Educational => "educational",
            Tone::Custom(name) => name,
        }
    }

    pub fn parse(value: Option<&str>) -> Self {
        let name = match value.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return Tone::default(),
        };

        match name.to_lowercase().as_str() {
            "inspirational" => Tone::Inspirational,
            "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "humorous" => Tone::Humorous,
            "educational" => Tone::Educational,
            _ => Tone::Custom(name.to_string()),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Option::<String>::deserialize(deserializer)?;
                Ok(<$ty>::parse(value.as_deref()))
            }
        }
    };
}

string_serde!(Platform);
string_serde!(Tone);
