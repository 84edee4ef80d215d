//! Numbered console menus.

use crate::core::roster::Roster;
use crate::models::cadet::Cadet;

/// What the operator can do once a cadet is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Duty,
    Incident,
    Confinement,
    AddRequest,
    RevokeSunday,
    ShowSchedule,
    Back,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Duty,
        MenuAction::Incident,
        MenuAction::Confinement,
        MenuAction::AddRequest,
        MenuAction::RevokeSunday,
        MenuAction::ShowSchedule,
        MenuAction::Back,
    ];

    pub fn code(&self) -> i64 {
        match self {
            MenuAction::Duty => 1,
            MenuAction::Incident => 2,
            MenuAction::Confinement => 3,
            MenuAction::AddRequest => 4,
            MenuAction::RevokeSunday => 5,
            MenuAction::ShowSchedule => 6,
            MenuAction::Back => 0,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Duty => "Наряд",
            MenuAction::Incident => "ЧП",
            MenuAction::Confinement => "БР",
            MenuAction::AddRequest => "Додати рапорт",
            MenuAction::RevokeSunday => "Забрати звільнення на неділю",
            MenuAction::ShowSchedule => "Показати розклад",
            MenuAction::Back => "Повернутися до вибору курсанта",
        }
    }
}

pub fn print_roster(roster: &Roster, commuter_marker: &str) {
    println!("\nСписок курсантів:");
    for (i, cadet) in roster.cadets().iter().enumerate() {
        println!("{}. {}", i + 1, cadet.display_name(commuter_marker));
    }
    println!("0. Вихід");
}

pub fn print_actions(cadet: &Cadet, commuter_marker: &str) {
    println!("\nВибрано: {}", cadet.display_name(commuter_marker));
    println!("Доступні дії:");
    // Back (0) is listed last
    for action in MenuAction::ALL {
        println!("{} - {}", action.code(), action.label());
    }
}
