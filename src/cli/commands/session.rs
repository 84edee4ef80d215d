use crate::config::Config;
use crate::core::actions::{Action, ActionLogic};
use crate::core::calculator::interval;
use crate::core::roster::Roster;
use crate::core::schedule::Schedule;
use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use crate::ui::menu::{self, MenuAction};
use crate::ui::prompt::Prompt;
use crate::ui::{messages, schedule};
use std::io::{self, BufRead};
use tracing::{info, warn};

/// Handle the interactive session (default command)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let roster = match Roster::load(&cfg.roster_file, &cfg.commuter_marker) {
        Ok(r) => r,
        Err(e) if e.is_roster_missing() => {
            messages::error(&e);
            messages::info(format!(
                "Файл групи порожній або відсутній. Додайте курсантів у {}.",
                cfg.roster_file
            ));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());
    Session::new(roster, cfg).run(&mut prompt)
}

/// One operator working on one roster. The session owns the roster and
/// lends a single cadet at a time to an action.
pub struct Session<'a> {
    roster: Roster,
    cfg: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(roster: Roster, cfg: &'a Config) -> Self {
        Self { roster, cfg }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the menus until the operator exits (or input ends), then print
    /// the final schedule.
    pub fn run<R: BufRead>(&mut self, prompt: &mut Prompt<R>) -> AppResult<()> {
        match self.roster_loop(prompt) {
            Ok(()) => {}
            Err(AppError::InputClosed) => info!("operator input closed"),
            Err(e) => return Err(e),
        }

        println!("\nФінальний графік:\n");
        self.print_schedule()
    }

    fn roster_loop<R: BufRead>(&mut self, prompt: &mut Prompt<R>) -> AppResult<()> {
        loop {
            menu::print_roster(&self.roster, &self.cfg.commuter_marker);

            let choice = match prompt.read_number("Оберіть курсанта: ") {
                Ok(n) => n,
                Err(AppError::InvalidMenuChoice(_)) => {
                    messages::error("Невірний вибір.");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if choice == 0 {
                return Ok(());
            }
            if choice < 1 || choice as usize > self.roster.len() {
                messages::error("Невірний вибір.");
                continue;
            }

            self.cadet_loop(prompt, (choice - 1) as usize)?;
        }
    }

    fn cadet_loop<R: BufRead>(
        &mut self,
        prompt: &mut Prompt<R>,
        index: usize,
    ) -> AppResult<()> {
        loop {
            let Some(cadet) = self.roster.cadets().get(index) else {
                return Ok(());
            };
            menu::print_actions(cadet, &self.cfg.commuter_marker);

            let selected = match prompt.read_number("Ваш вибір: ") {
                Ok(code) => MenuAction::from_code(code),
                Err(AppError::InvalidMenuChoice(_)) => None,
                Err(e) => return Err(e),
            };

            let action = match selected {
                None => {
                    messages::error("Невідома команда.");
                    continue;
                }
                Some(MenuAction::Back) => return Ok(()),
                Some(MenuAction::ShowSchedule) => {
                    self.print_schedule()?;
                    continue;
                }
                Some(MenuAction::Duty) => Action::Duty {
                    day: select_day(prompt)?,
                },
                Some(MenuAction::Incident) => Action::Incident {
                    day: select_day(prompt)?,
                },
                Some(MenuAction::Confinement) => {
                    let day = select_day(prompt)?;
                    Action::confinement(day, read_days(prompt)?)
                }
                Some(MenuAction::AddRequest) => {
                    let day = select_day(prompt)?;
                    let range = read_range(prompt, day)?;
                    Action::AddRequest { day, range }
                }
                Some(MenuAction::RevokeSunday) => Action::RevokeSunday,
            };

            self.apply(index, &action)?;
        }
    }

    fn apply(&mut self, index: usize, action: &Action) -> AppResult<()> {
        let Some(cadet) = self.roster.get_mut(index) else {
            return Ok(());
        };

        match ActionLogic::apply(cadet, action) {
            Ok(_) => messages::success(confirmation(action)),
            Err(e @ AppError::InvalidTime(_)) => messages::error(e),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn print_schedule(&self) -> AppResult<()> {
        let plan = Schedule::build(&self.roster, &self.cfg.request_marker)?;
        print!("{}", schedule::render(&plan, &self.cfg.group_name));
        Ok(())
    }
}

pub fn parse_day(text: &str) -> AppResult<Day> {
    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(Day::from_choice)
        .ok_or_else(|| AppError::InvalidDaySelection(text.to_string()))
}

/// Unknown input falls back to Friday with a warning.
fn select_day<R: BufRead>(prompt: &mut Prompt<R>) -> AppResult<Day> {
    let text = prompt.read_line("Оберіть день (1 - П'ятниця, 2 - Субота, 3 - Неділя): ")?;
    match parse_day(&text) {
        Ok(day) => Ok(day),
        Err(AppError::InvalidDaySelection(raw)) => {
            warn!(input = %raw, "day selection defaulted to Friday");
            messages::warning("Невірний вибір, встановлено П'ятницю.");
            Ok(Day::Friday)
        }
        Err(e) => Err(e),
    }
}

fn read_days<R: BufRead>(prompt: &mut Prompt<R>) -> AppResult<i64> {
    loop {
        match prompt.read_number("Кількість діб БР (мінімум 1): ") {
            Ok(days) => return Ok(days.max(1)),
            Err(AppError::InvalidMenuChoice(raw)) => {
                messages::error(format!("Невірна кількість діб: {}", raw));
            }
            Err(e) => return Err(e),
        }
    }
}

/// Re-prompts until the range places on the timeline; the accepted token is
/// returned verbatim.
fn read_range<R: BufRead>(prompt: &mut Prompt<R>, day: Day) -> AppResult<String> {
    loop {
        let line = prompt.read_line("Введіть інтервал у форматі HH:MM-HH:MM: ")?;
        let token = line.split_whitespace().next().unwrap_or_default();

        match interval::to_absolute(day, token) {
            Ok(_) => return Ok(token.to_string()),
            Err(e @ AppError::InvalidTime(_)) => messages::error(e),
            Err(e) => return Err(e),
        }
    }
}

/// Operator confirmation for an applied action.
pub fn confirmation(action: &Action) -> String {
    match action {
        Action::Duty { .. } => "Наряд додано. Звільнення скориговано.".to_string(),
        Action::Incident { .. } => "ЧП додано. Звільнення скориговано.".to_string(),
        Action::Confinement { days, .. } => {
            let days = (*days).max(1);
            format!("БР додано на {} діб. Звільнення скориговано.", days)
        }
        Action::AddRequest { .. } => "Звільнення за рапортом додано.".to_string(),
        Action::RevokeSunday => "Звільнення на неділю скасовано.".to_string(),
    }
}
