//! The closed set of card classes the scribe keeps records for.

use std::fmt;

/// A card class (legend). Only these seven exist in the collection; anything
/// else is rejected before the library is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Ariane,
    Linza,
    Morvran,
    Neutral,
    Ozan,
    Raptor,
    Vanescula,
}

impl Class {
    pub const ALL: [Self; 7] = [
        Self::Ariane,
        Self::Linza,
        Self::Morvran,
        Self::Neutral,
        Self::Ozan,
        Self::Raptor,
        Self::Vanescula,
    ];

    /// Parse user input, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "ariane" => Some(Self::Ariane),
            "linza" => Some(Self::Linza),
            "morvran" => Some(Self::Morvran),
            "neutral" => Some(Self::Neutral),
            "ozan" => Some(Self::Ozan),
            "raptor" => Some(Self::Raptor),
            "vanescula" => Some(Self::Vanescula),
            _ => None,
        }
    }

    /// Directory name under the library root (title case on disk).
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Ariane => "Ariane",
            Self::Linza => "Linza",
            Self::Morvran => "Morvran",
            Self::Neutral => "Neutral",
            Self::Ozan => "Ozan",
            Self::Raptor => "Raptor",
            Self::Vanescula => "Vanescula",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Class::parse("Ariane"), Some(Class::Ariane));
        assert_eq!(Class::parse("ariane"), Some(Class::Ariane));
        assert_eq!(Class::parse("VANESCULA"), Some(Class::Vanescula));
        assert_eq!(Class::parse("rApToR"), Some(Class::Raptor));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Class::parse("dragonkin"), None);
        assert_eq!(Class::parse(""), None);
        assert_eq!(Class::parse("ariane "), None);
    }

    #[test]
    fn test_every_class_round_trips_through_its_dir_name() {
        for class in Class::ALL {
            assert_eq!(Class::parse(class.dir_name()), Some(class));
        }
    }

    #[test]
    fn test_display_matches_dir_name() {
        assert_eq!(Class::Morvran.to_string(), "Morvran");
    }
}
