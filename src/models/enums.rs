use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Degree {
    MD => "MD",
    PhD => "PhD",
    MSW => "MSW",
});

impl Degree {
    pub const ALL: [Degree; 3] = [Degree::MD, Degree::PhD, Degree::MSW];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn degree_round_trips_through_str() {
        for degree in Degree::ALL {
            assert_eq!(Degree::from_str(degree.as_str()).unwrap(), degree);
        }
    }

    #[test]
    fn unknown_degree_is_invalid_enum() {
        let err = Degree::from_str("DDS").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEnum { .. }));
    }

    #[test]
    fn degree_serializes_as_plain_string() {
        let json = serde_json::to_string(&Degree::PhD).unwrap();
        assert_eq!(json, "\"PhD\"");
    }
}
