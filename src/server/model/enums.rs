//! Closed value sets stored as strings and exchanged verbatim on the wire.
//!
//! Each enum converts to its canonical string with `as_str()` and parses back with
//! `FromStr`, whose error message is suitable for a 400 response.

use chrono::Weekday;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(
                        "Invalid {} '{}', expected one of: {}",
                        $label,
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Authenticated principal kind; also the token's role claim.
    Role ("role") {
        Admin => "admin",
        Coach => "coach",
        Player => "player",
    }
}

string_enum! {
    FocusArea ("focus area") {
        Batting => "Batting",
        Bowling => "Bowling",
        Fielding => "Fielding",
        Fitness => "Fitness",
        Combined => "Combined",
    }
}

string_enum! {
    PlayerRole ("player role") {
        Batsman => "Batsman",
        Bowler => "Bowler",
        AllRounder => "All-Rounder",
        Wicketkeeper => "Wicketkeeper",
    }
}

string_enum! {
    AcademyLevel ("academy level") {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

string_enum! {
    PlayerStatus ("player status") {
        Active => "Active",
        Inactive => "Inactive",
        Suspended => "Suspended",
        Graduated => "Graduated",
    }
}

string_enum! {
    CoachSpecialty ("coach specialty") {
        Batting => "Batting",
        Bowling => "Bowling",
        Fielding => "Fielding",
        Fitness => "Fitness",
    }
}

string_enum! {
    CoachStatus ("coach status") {
        Active => "Active",
        Inactive => "Inactive",
        Suspended => "Suspended",
    }
}

string_enum! {
    SessionStatus ("session status") {
        Active => "Active",
        Inactive => "Inactive",
    }
}

string_enum! {
    DayOfWeek ("day of week") {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

string_enum! {
    NotificationKind ("notification type") {
        FeedbackSubmitted => "feedback-submitted",
        ResponseSubmitted => "response-submitted",
        Evaluation => "evaluation",
        PlayerResponse => "player-response",
    }
}

impl DayOfWeek {
    pub fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

/// Parses a value read back from the database.
///
/// Stored values are written from these enums, so a failure means the row was edited
/// outside the application.
pub fn parse_stored<T>(column: &str, value: &str) -> Result<T, sea_orm::DbErr>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| sea_orm::DbErr::Custom(format!("Corrupt value in column {}: {}", column, e)))
}
