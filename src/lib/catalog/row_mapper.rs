//! Turns tokenized CSV rows into [`Discipline`] records.
use log::warn;

use super::{
    error::CatalogError,
    models::discipline_model::{Bimester, Category, DayOfWeek, Discipline, Schedule},
};

/// Cells per data row: semester, type, course, period, code, name, turma, schedule, syllabus.
pub const ROW_WIDTH: usize = 9;

const SYLLABUS_PREFIX: &str = "Ementa:";

/// Strict day lookup, see [`DayOfWeek::from_str`](std::str::FromStr).
pub fn parse_day(token: &str) -> Result<DayOfWeek, CatalogError> {
    token.parse()
}

/// Parses `"SEG 08:00-12:00 / QUA 13:30-17:30"` into schedule entries.
///
/// Parts without a space are dropped. Unknown day tokens fall back to Monday.
pub fn parse_schedules(schedule_str: &str) -> Vec<Schedule> {
    schedule_str
        .split('/')
        .filter_map(|part| {
            let (day_str, time) = part.trim().split_once(' ')?;
            let day = parse_day(day_str).unwrap_or_else(|err| {
                warn!("{}, falling back to {}", err, DayOfWeek::Monday);
                DayOfWeek::Monday
            });
            Some(Schedule {
                day,
                time: time.to_owned(),
            })
        })
        .collect()
}

/// Elective first, then which kind of elective.
pub fn infer_category(kind: &str, course: &str) -> Category {
    if kind.to_uppercase().contains("OPTATIVA") {
        if course.to_uppercase() == "ICA" {
            Category::GeneralIca
        } else {
            Category::ElectiveCinema
        }
    } else {
        Category::Mandatory
    }
}

pub fn infer_bimester(period: &str) -> Option<Bimester> {
    if period.contains("1º BIMESTRE") {
        Some(Bimester::First)
    } else if period.contains("2º BIMESTRE") {
        Some(Bimester::Second)
    } else {
        None
    }
}

fn non_empty(cell: &str) -> Option<String> {
    (!cell.is_empty()).then(|| cell.to_owned())
}

fn strip_syllabus_prefix(syllabus: &str) -> Option<String> {
    let text = match syllabus.strip_prefix(SYLLABUS_PREFIX) {
        Some(rest) => rest.trim_start(),
        None => syllabus,
    };
    non_empty(text)
}

/// Builds the discipline for the `index`-th data row (header excluded).
pub fn map_row_to_discipline(row: &[String], index: usize) -> Result<Discipline, CatalogError> {
    let [semester, kind, course, period, code, name, turma, schedule, syllabus] = row else {
        if row.len() < ROW_WIDTH {
            return Err(CatalogError::MalformedRow {
                index,
                cells: row.len(),
            });
        }
        return map_row_to_discipline(&row[..ROW_WIDTH], index);
    };

    Ok(Discipline {
        id: format!("csv-{}-{}", index, code),
        code: code.to_owned(),
        name: name.to_owned(),
        category: infer_category(kind, course),
        semester: non_empty(semester).map(|s| format!("{}º", s)),
        turma: non_empty(turma),
        schedules: parse_schedules(schedule),
        period: period.to_owned(),
        bimester: infer_bimester(period),
        description: strip_syllabus_prefix(syllabus),
    })
}
