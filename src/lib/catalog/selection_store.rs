use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use log::{debug, info};

use super::{error::CatalogError, models::Selection};

/// A trait, necessary for every entity that keeps the user's selection between launches.
pub trait SelectionStore {
    fn load(&self) -> Result<Selection, CatalogError>;
    fn save(&self, selection: &Selection) -> Result<(), CatalogError>;
}

/// Keeps the selection in a JSON file. A missing file reads as an empty selection.
pub struct JsonSelectionFile {
    pub path: PathBuf,
}

impl JsonSelectionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSelectionFile { path: path.into() }
    }
}

impl SelectionStore for JsonSelectionFile {
    fn load(&self) -> Result<Selection, CatalogError> {
        if !self.path.exists() {
            info!(
                "No selection file at {}, starting empty",
                self.path.display()
            );
            return Ok(Selection::default());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let selection: Selection = serde_json::from_reader(reader)?;
        info!(
            "Read {} selected disciplines from {}",
            selection.selected_ids.len(),
            self.path.display()
        );
        Ok(selection)
    }

    fn save(&self, selection: &Selection) -> Result<(), CatalogError> {
        debug!(
            "Writing {} selected disciplines to {}",
            selection.selected_ids.len(),
            self.path.display()
        );
        let writer = BufWriter::new(File::create(&self.path)?);
        Ok(serde_json::to_writer_pretty(writer, selection)?)
    }
}

/// Selection that lives only as long as the process, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySelection {
    pub selection: RefCell<Selection>,
    pub saves: Cell<usize>,
}

impl SelectionStore for MemorySelection {
    fn load(&self) -> Result<Selection, CatalogError> {
        Ok(self.selection.borrow().clone())
    }

    fn save(&self, selection: &Selection) -> Result<(), CatalogError> {
        *self.selection.borrow_mut() = selection.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: SelectionStore + ?Sized> SelectionStore for &S {
    fn load(&self) -> Result<Selection, CatalogError> {
        (**self).load()
    }

    fn save(&self, selection: &Selection) -> Result<(), CatalogError> {
        (**self).save(selection)
    }
}
