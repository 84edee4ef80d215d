use super::residence::Residence;
use crate::core::leave_set::LeaveSet;

#[derive(Debug, Clone)]
pub struct Cadet {
    pub name: String,
    pub residence: Residence,
    pub leaves: LeaveSet,
}

impl Cadet {
    /// New cadet carrying the default leaves of their residence.
    pub fn new(name: &str, residence: Residence) -> Self {
        Self {
            name: name.to_string(),
            residence,
            leaves: LeaveSet::defaults(residence),
        }
    }

    /// Name as shown in menus, with the commuter marker appended.
    pub fn display_name(&self, commuter_marker: &str) -> String {
        if self.residence.is_commuter() {
            format!("{} {}", self.name, commuter_marker)
        } else {
            self.name.clone()
        }
    }
}
