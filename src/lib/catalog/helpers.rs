use std::{error::Error, path::Path};

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, info};

use crate::catalog::{
    csv_parser::parse_csv,
    error::CatalogError,
    models::{discipline_model::Discipline, Config},
    row_mapper::map_row_to_discipline,
    schedule_grid::{GridCell, ScheduleGrid, TIME_BLOCKS, WEEK_DAYS},
};

pub fn log_all_disciplines(disciplines: &[Discipline]) -> () {
    for discipline in disciplines.iter() {
        debug!(
            "Loaded {} ({}) as {} with schedules {:?}",
            discipline.code, discipline.name, discipline.category, discipline.schedules
        );
    }
}

pub fn get_config(config_json_path: &Path) -> Result<Config, Box<dyn Error>> {
    info!(
        "Reading config.json from {}",
        std::path::absolute(config_json_path)?.display()
    );
    let config: Config = Figment::new()
        .merge(Json::file(config_json_path))
        .merge(Env::prefixed("CATALOG_"))
        .extract()?;
    Ok(config)
}

/// Skips the header row and maps every data row, stopping at the first malformed one.
pub fn load_disciplines(csv_text: &str) -> Result<Vec<Discipline>, CatalogError> {
    let rows = parse_csv(csv_text);
    let disciplines = rows
        .iter()
        .skip(1)
        .enumerate()
        .map(|(index, row)| map_row_to_discipline(row, index))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "Mapped {} disciplines from {} CSV rows",
        disciplines.len(),
        rows.len()
    );
    log_all_disciplines(&disciplines);
    Ok(disciplines)
}

/* form card text for a single discipline */
pub fn format_discipline_card(discipline: &Discipline, selected: bool) -> String {
    let marker = if selected { "[x]" } else { "[ ]" };
    let semester = discipline
        .semester
        .as_ref()
        .map(|s| format!(" • {} SEM", s))
        .unwrap_or_default();

    let mut tags = discipline
        .schedules
        .iter()
        .map(|s| format!("{} • {}", s.day, s.time))
        .collect::<Vec<_>>();
    if let Some(bimester) = discipline.bimester {
        tags.push(format!("{} BIMESTRE", bimester));
    }

    let mut lines = vec![
        format!("{} {}{} ({})", marker, discipline.code, semester, discipline.period),
        format!("    {} [{}]", discipline.name, discipline.category),
    ];
    if !tags.is_empty() {
        lines.push(format!("    {}", tags.join(" | ")));
    }
    if let Some(description) = &discipline.description {
        lines.push(format!("    {}", description));
    }
    if let Some(turma) = &discipline.turma {
        lines.push(format!("    Turma {}", turma));
    }
    lines.push(format!("    id: {}", discipline.id));
    lines.join("\n")
}

pub fn render_cards(
    semester_label: &str,
    disciplines: &[&Discipline],
    is_selected: impl Fn(&str) -> bool,
) -> String {
    if disciplines.is_empty() {
        return "Nenhuma disciplina encontrada\nTente ajustar seus filtros ou busca.".to_owned();
    }
    let cards = disciplines
        .iter()
        .map(|d| format_discipline_card(d, is_selected(d.id.as_str())))
        .collect::<Vec<_>>();
    format!(
        "Cinema {}: {} disciplina(s)\n\n{}",
        semester_label,
        disciplines.len(),
        cards.join("\n\n")
    )
}

/* form text of one grid cell, one line per discipline */
fn format_grid_cell(cell: &GridCell) -> String {
    let conflict = if cell.is_conflicting() { " CONFLITO" } else { "" };
    if cell.disciplines.is_empty() {
        return format!("  {}: -", cell.day);
    }
    let entries = cell
        .disciplines
        .iter()
        .map(|d| {
            let mut entry = format!("    {} {}", d.code, d.name.to_uppercase());
            if let Some(turma) = &d.turma {
                entry.push_str(&format!(" T{}", turma));
            }
            if let Some(bimester) = d.bimester {
                entry.push_str(&format!(" {} BIM", bimester));
            }
            entry
        })
        .collect::<Vec<_>>();
    format!("  {}:{}\n{}", cell.day, conflict, entries.join("\n"))
}

pub fn render_grid(semester_label: &str, grid: &ScheduleGrid, selected_count: usize) -> String {
    if selected_count == 0 {
        return "Você ainda não selecionou nenhuma disciplina para ver na grade.".to_owned();
    }
    let mut blocks = Vec::new();
    for block in TIME_BLOCKS {
        let cells = WEEK_DAYS
            .into_iter()
            .filter_map(|day| grid.cell(day, block))
            .map(format_grid_cell)
            .collect::<Vec<_>>();
        blocks.push(format!("{}\n{}", block, cells.join("\n")));
    }
    format!(
        "Grade semanal {}\n\n{}\n\n{} disciplina(s) selecionada(s), {} conflito(s)",
        semester_label,
        blocks.join("\n\n"),
        selected_count,
        grid.conflicts().count()
    )
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
