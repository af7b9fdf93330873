//! Weekly grid placement of the selected disciplines, with conflict flags.
use super::models::discipline_model::{DayOfWeek, Discipline, Schedule};

pub const WEEK_DAYS: [DayOfWeek; 5] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
];

/// Canonical blocks of a study day.
pub const TIME_BLOCKS: [&str; 3] = ["08:00-12:00", "13:30-17:30", "18:00-22:00"];

/// Whether a schedule entry occupies the (`day`, `block`) cell.
///
/// Times are compared as text: either one must contain the other.
// NOTE: not interval overlap. "08:00" alone lands in the morning block and
// "10:00-12:00" lands nowhere.
pub fn occupies(schedule: &Schedule, day: DayOfWeek, block: &str) -> bool {
    schedule.day == day && (block.contains(schedule.time.as_str()) || schedule.time.contains(block))
}

#[derive(Debug)]
pub struct GridCell<'a> {
    pub day: DayOfWeek,
    pub block: &'static str,
    pub disciplines: Vec<&'a Discipline>,
}

impl GridCell<'_> {
    pub fn is_conflicting(&self) -> bool {
        self.disciplines.len() > 1
    }
}

/// Cells are stored block by block, Monday to Friday inside each block.
#[derive(Debug)]
pub struct ScheduleGrid<'a> {
    cells: Vec<GridCell<'a>>,
}

impl<'a> ScheduleGrid<'a> {
    pub fn build(selected: &[&'a Discipline]) -> Self {
        let cells = TIME_BLOCKS
            .into_iter()
            .flat_map(|block| {
                WEEK_DAYS.into_iter().map(move |day| GridCell {
                    day,
                    block,
                    disciplines: selected
                        .iter()
                        .copied()
                        .filter(|d| d.schedules.iter().any(|s| occupies(s, day, block)))
                        .collect(),
                })
            })
            .collect();
        ScheduleGrid { cells }
    }

    pub fn cell(&self, day: DayOfWeek, block: &str) -> Option<&GridCell<'a>> {
        self.cells
            .iter()
            .find(|cell| cell.day == day && cell.block == block)
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell<'a>> {
        self.cells.iter()
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &GridCell<'a>> {
        self.cells.iter().filter(|cell| cell.is_conflicting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::discipline_model::Category;

    fn discipline(id: &str, schedules: &[(DayOfWeek, &str)]) -> Discipline {
        Discipline {
            id: id.to_owned(),
            code: id.to_uppercase(),
            name: format!("Disciplina {}", id),
            category: Category::Mandatory,
            semester: None,
            turma: None,
            schedules: schedules
                .iter()
                .map(|(day, time)| Schedule {
                    day: *day,
                    time: time.to_string(),
                })
                .collect(),
            period: "2026.1".to_owned(),
            bimester: None,
            description: None,
        }
    }

    #[test]
    fn same_slot_is_a_conflict() {
        let a = discipline("a", &[(DayOfWeek::Monday, "08:00-12:00")]);
        let b = discipline("b", &[(DayOfWeek::Monday, "08:00-12:00")]);
        let c = discipline("c", &[(DayOfWeek::Tuesday, "08:00-12:00")]);
        let grid = ScheduleGrid::build(&[&a, &b, &c]);

        let monday = grid.cell(DayOfWeek::Monday, "08:00-12:00").unwrap();
        let ids: Vec<_> = monday.disciplines.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(monday.is_conflicting());

        let tuesday = grid.cell(DayOfWeek::Tuesday, "08:00-12:00").unwrap();
        assert_eq!(tuesday.disciplines.len(), 1);
        assert!(!tuesday.is_conflicting());

        assert_eq!(grid.conflicts().count(), 1);
    }

    #[test]
    fn grid_has_every_day_and_block() {
        let grid = ScheduleGrid::build(&[]);
        assert_eq!(grid.cells().count(), 15);
        assert!(grid.cells().all(|cell| cell.disciplines.is_empty()));
        assert!(grid.cell(DayOfWeek::Friday, "18:00-22:00").is_some());
        assert!(grid.cell(DayOfWeek::Friday, "07:00-08:00").is_none());
    }

    #[test]
    fn matching_is_substring_containment() {
        let entry = |time: &str| Schedule {
            day: DayOfWeek::Wednesday,
            time: time.to_owned(),
        };
        assert!(occupies(&entry("13:30-17:30"), DayOfWeek::Wednesday, "13:30-17:30"));
        assert!(!occupies(&entry("13:30-17:30"), DayOfWeek::Thursday, "13:30-17:30"));
        assert!(occupies(&entry("08:00"), DayOfWeek::Wednesday, "08:00-12:00"));
        assert!(occupies(&entry("08:00-12:00 (lab)"), DayOfWeek::Wednesday, "08:00-12:00"));
        assert!(!occupies(&entry("10:00-12:00"), DayOfWeek::Wednesday, "08:00-12:00"));
    }

    #[test]
    fn short_time_can_land_in_several_blocks() {
        let d = discipline("x", &[(DayOfWeek::Friday, "0")]);
        let grid = ScheduleGrid::build(&[&d]);
        let placed = grid
            .cells()
            .filter(|cell| !cell.disciplines.is_empty())
            .count();
        assert_eq!(placed, 3);
    }

    #[test]
    fn discipline_without_schedule_is_never_placed() {
        let d = discipline("n", &[]);
        let grid = ScheduleGrid::build(&[&d]);
        assert!(grid.cells().all(|cell| cell.disciplines.is_empty()));
    }
}
