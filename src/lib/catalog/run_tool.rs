use std::error::Error;

use log::info;

use super::{
    catalog_getter::CatalogGetter,
    filter::Filter,
    helpers::{load_disciplines, render_cards, render_grid},
    models::{Command, Config},
    selection_store::SelectionStore,
    state::AppState,
};

/// Loads the catalog, applies `command` and returns the text to show.
pub async fn run<CG: CatalogGetter, SS: SelectionStore>(
    catalog_getter: CG,
    selection_store: SS,
    command: &Command,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    let csv_text = catalog_getter.get_catalog(&config.catalog_source).await?;
    let disciplines = load_disciplines(&csv_text)?;
    let mut state = AppState::load(disciplines, selection_store)?;

    let output = match command {
        Command::List { search, category } => {
            let filter = Filter::new(search, *category);
            let shown = state.filtered(&filter);
            info!("Showing {} of {} disciplines", shown.len(), state.disciplines().len());
            render_cards(&config.semester_label, &shown, |id| state.is_selected(id))
        }
        Command::Toggle { ids } => {
            let states = state.toggle_all(ids.as_slice())?;
            let mut lines = ids
                .iter()
                .zip(states)
                .map(|(id, selected)| {
                    format!(
                        "{} {}",
                        if selected { "Selecionada:" } else { "Removida:" },
                        id
                    )
                })
                .collect::<Vec<_>>();
            lines.push(format!(
                "{} disciplina(s) selecionada(s)",
                state.selected_disciplines().len()
            ));
            lines.join("\n")
        }
        Command::Clear => {
            state.clear()?;
            "Seleção limpa".to_owned()
        }
        Command::Grid => {
            let selected_count = state.selected_disciplines().len();
            let grid = state.grid();
            info!("Found {} conflicting grid cells", grid.conflicts().count());
            render_grid(&config.semester_label, &grid, selected_count)
        }
    };

    Ok(output)
}
