use leaveplanner::core::actions::{Action, ActionLogic};
use leaveplanner::core::calculator::interval::AbsoluteInterval;
use leaveplanner::errors::AppError;
use leaveplanner::models::cadet::Cadet;
use leaveplanner::models::day::Day;
use leaveplanner::models::residence::Residence;

const DAY: i64 = 1440;

fn days_of(cadet: &Cadet) -> Vec<Day> {
    cadet.leaves.iter().map(|l| l.day).collect()
}

#[test]
fn test_duty_exclusion_runs_to_next_day_18h() {
    let window = Action::Duty { day: Day::Saturday }.exclusion().unwrap();
    assert_eq!(
        window,
        Some(AbsoluteInterval::new(DAY + 14 * 60, 2 * DAY + 18 * 60))
    );
}

#[test]
fn test_saturday_duty_on_dormitory_cadet() {
    let mut cadet = Cadet::new("Іваненко", Residence::Dormitory);
    let outcome = ActionLogic::apply(&mut cadet, &Action::Duty { day: Day::Saturday }).unwrap();

    // Sunday 09:00-21:00 also starts before Sunday 18:00
    assert_eq!(outcome.removed, 2);
    assert!(cadet.leaves.is_empty());
}

#[test]
fn test_friday_duty_ends_where_saturday_leave_starts() {
    let mut cadet = Cadet::new("Іваненко", Residence::Dormitory);
    let outcome = ActionLogic::apply(&mut cadet, &Action::Duty { day: Day::Friday }).unwrap();

    // duty ends Saturday 18:00, the leave starts Saturday 18:00
    assert_eq!(outcome.removed, 0);
    assert_eq!(days_of(&cadet), vec![Day::Saturday, Day::Sunday]);
}

#[test]
fn test_incident_is_a_full_day_from_18h() {
    let window = Action::Incident { day: Day::Friday }.exclusion().unwrap();
    assert_eq!(window, Some(AbsoluteInterval::new(1080, DAY + 1080)));

    let mut cadet = Cadet::new("Петренко", Residence::CityCommuter);
    let outcome = ActionLogic::apply(&mut cadet, &Action::Incident { day: Day::Friday }).unwrap();

    // Saturday 18:00 leave starts exactly where the incident ends
    assert_eq!(outcome.removed, 1);
    assert_eq!(days_of(&cadet), vec![Day::Saturday, Day::Sunday]);
}

#[test]
fn test_confinement_two_days_from_friday() {
    let action = Action::confinement(Day::Friday, 2);
    assert_eq!(
        action.exclusion().unwrap(),
        Some(AbsoluteInterval::new(1080, 2 * DAY + 1080))
    );

    let mut cadet = Cadet::new("Петренко", Residence::CityCommuter);
    let outcome = ActionLogic::apply(&mut cadet, &action).unwrap();

    // Sunday 09:00 is before Sunday 18:00, so all three defaults overlap
    assert_eq!(outcome.removed, 3);
    assert!(cadet.leaves.is_empty());
}

#[test]
fn test_confinement_minimum_one_day() {
    assert_eq!(
        Action::confinement(Day::Saturday, 0),
        Action::Confinement {
            day: Day::Saturday,
            days: 1
        }
    );
    assert_eq!(
        Action::confinement(Day::Saturday, -4).exclusion().unwrap(),
        Action::Incident { day: Day::Saturday }.exclusion().unwrap()
    );
}

#[test]
fn test_confinement_huge_count_does_not_overflow() {
    let window = Action::confinement(Day::Friday, i64::MAX)
        .exclusion()
        .unwrap()
        .unwrap();
    assert_eq!(window.end, i64::MAX);
}

#[test]
fn test_add_request_appends_verbatim() {
    let mut cadet = Cadet::new("Іваненко", Residence::Dormitory);
    let action = Action::AddRequest {
        day: Day::Friday,
        range: "9:00-12:00".to_string(),
    };

    let outcome = ActionLogic::apply(&mut cadet, &action).unwrap();
    assert_eq!(outcome.added, 1);

    let added = cadet.leaves.iter().last().unwrap();
    assert_eq!(added.day, Day::Friday);
    assert_eq!(added.range, "9:00-12:00");
    assert!(added.from_request);
}

#[test]
fn test_add_request_rejects_malformed_range_without_mutation() {
    let mut cadet = Cadet::new("Іваненко", Residence::Dormitory);
    let before = cadet.leaves.clone();

    let result = ActionLogic::apply(
        &mut cadet,
        &Action::AddRequest {
            day: Day::Friday,
            range: "вечір".to_string(),
        },
    );

    assert!(matches!(result, Err(AppError::InvalidTime(_))));
    assert_eq!(cadet.leaves, before);
}

#[test]
fn test_revoke_sunday_only_touches_sunday() {
    let mut cadet = Cadet::new("Петренко", Residence::CityCommuter);
    cadet.leaves.add_request(Day::Sunday, "12:00-13:00");

    let outcome = ActionLogic::apply(&mut cadet, &Action::RevokeSunday).unwrap();

    assert_eq!(outcome.removed, 2);
    assert_eq!(days_of(&cadet), vec![Day::Friday, Day::Saturday]);
}
