//! Body types.

use std::fmt;
use std::str::FromStr;

use crate::error::TextureError;

/// The closed set of planet body types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyType {
    Desert,
    Ocean,
    Furnace,
    Jovian,
    Vital,
    Toxic,
    Ice,
    Rocky,
    Jungle,
}

impl BodyType {
    pub const ALL: [BodyType; 9] = [
        BodyType::Desert,
        BodyType::Ocean,
        BodyType::Furnace,
        BodyType::Jovian,
        BodyType::Vital,
        BodyType::Toxic,
        BodyType::Ice,
        BodyType::Rocky,
        BodyType::Jungle,
    ];

    /// Capitalized display name, e.g. `"Desert"`.
    pub const fn name(self) -> &'static str {
        match self {
            BodyType::Desert => "Desert",
            BodyType::Ocean => "Ocean",
            BodyType::Furnace => "Furnace",
            BodyType::Jovian => "Jovian",
            BodyType::Vital => "Vital",
            BodyType::Toxic => "Toxic",
            BodyType::Ice => "Ice",
            BodyType::Rocky => "Rocky",
            BodyType::Jungle => "Jungle",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyType {
    type Err = TextureError;

    /// Case-insensitive parse of a body type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyType::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TextureError::UnknownBodyType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("desert".parse::<BodyType>(), Ok(BodyType::Desert));
        assert_eq!("JOVIAN".parse::<BodyType>(), Ok(BodyType::Jovian));
        assert_eq!(" Ice ".parse::<BodyType>(), Ok(BodyType::Ice));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "gas".parse::<BodyType>(),
            Err(TextureError::UnknownBodyType("gas".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for body in BodyType::ALL {
            assert_eq!(body.to_string().parse::<BodyType>(), Ok(body));
        }
    }
}
