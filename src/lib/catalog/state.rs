use log::{debug, info};

use super::{
    error::CatalogError,
    filter::Filter,
    models::{discipline_model::Discipline, Selection},
    schedule_grid::ScheduleGrid,
    selection_store::SelectionStore,
};

/// Loaded catalog plus the user's selection.
///
/// The selection is read from the store once, on construction, and written
/// back after every change.
pub struct AppState<S: SelectionStore> {
    disciplines: Vec<Discipline>,
    selection: Selection,
    store: S,
}

impl<S: SelectionStore> AppState<S> {
    pub fn load(disciplines: Vec<Discipline>, store: S) -> Result<Self, CatalogError> {
        let selection = store.load()?;
        info!(
            "State ready with {} disciplines and {} selected ids",
            disciplines.len(),
            selection.selected_ids.len()
        );
        Ok(AppState {
            disciplines,
            selection,
            store,
        })
    }

    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filtered(&self, filter: &Filter) -> Vec<&Discipline> {
        filter.apply(&self.disciplines)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.selected_ids.contains(id)
    }

    /// Flips the selection of `id` and returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> Result<bool, CatalogError> {
        let selected = self.toggle_all(&[id])?;
        Ok(selected[0])
    }

    /// Flips every id in order and saves once.
    ///
    /// An id can be selected only if it is in the catalog, but an already
    /// selected id can always be unselected, even when the catalog lost it.
    /// On error nothing changes and nothing is saved.
    pub fn toggle_all<T: AsRef<str>>(&mut self, ids: &[T]) -> Result<Vec<bool>, CatalogError> {
        let mut selection = self.selection.clone();
        let mut states = Vec::with_capacity(ids.len());
        for id in ids {
            let id: &str = id.as_ref();
            let selected = if selection.selected_ids.remove(id) {
                false
            } else if self.disciplines.iter().any(|d| d.id == id) {
                selection.selected_ids.insert(id.to_owned());
                true
            } else {
                return Err(CatalogError::UnknownDiscipline(id.to_owned()));
            };
            debug!("Discipline {} selected: {}", id, selected);
            states.push(selected);
        }
        self.store.save(&selection)?;
        self.selection = selection;
        Ok(states)
    }

    pub fn clear(&mut self) -> Result<(), CatalogError> {
        self.selection.selected_ids.clear();
        self.store.save(&self.selection)
    }

    /// Selected disciplines in catalog order. Ids missing from the catalog are skipped.
    pub fn selected_disciplines(&self) -> Vec<&Discipline> {
        self.disciplines
            .iter()
            .filter(|d| self.is_selected(&d.id))
            .collect()
    }

    pub fn grid(&self) -> ScheduleGrid<'_> {
        ScheduleGrid::build(&self.selected_disciplines())
    }
}
