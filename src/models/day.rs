/// Weekend day of the scheduling week. The ordinal anchors the minute
/// timeline: Friday 00:00 is minute 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::Friday, Day::Saturday, Day::Sunday];

    pub fn ordinal(&self) -> i64 {
        match self {
            Day::Friday => 0,
            Day::Saturday => 1,
            Day::Sunday => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Day::Friday => "П'ятниця",
            Day::Saturday => "Субота",
            Day::Sunday => "Неділя",
        }
    }

    /// Operator menu code → day (1 = Friday, 2 = Saturday, 3 = Sunday)
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Day::Friday),
            2 => Some(Day::Saturday),
            3 => Some(Day::Sunday),
            _ => None,
        }
    }
}
