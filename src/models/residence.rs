use super::day::Day;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residence {
    Dormitory,
    CityCommuter,
}

impl Residence {
    /// Standing leave windows granted to every cadet of this residence.
    pub fn default_leaves(&self) -> &'static [(Day, &'static str)] {
        match self {
            Residence::Dormitory => &[
                (Day::Saturday, "18:00-21:00"),
                (Day::Sunday, "09:00-21:00"),
            ],
            Residence::CityCommuter => &[
                (Day::Friday, "19:30-07:30"),
                (Day::Saturday, "18:00-08:30"),
                (Day::Sunday, "09:00-07:30"),
            ],
        }
    }

    pub fn is_commuter(&self) -> bool {
        matches!(self, Residence::CityCommuter)
    }
}
