use super::models::discipline_model::{Category, Discipline};

/// Text search over names and codes plus an optional category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub category: Option<Category>,
}

impl Filter {
    pub fn new(search: &str, category: Option<Category>) -> Self {
        Filter {
            search: search.to_owned(),
            category,
        }
    }

    pub fn matches(&self, discipline: &Discipline) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = discipline.name.to_lowercase().contains(&search)
            || discipline.code.to_lowercase().contains(&search);
        let matches_category = self
            .category
            .map_or(true, |category| discipline.category == category);
        matches_search && matches_category
    }

    /// Keeps catalog order.
    pub fn apply<'a>(&self, disciplines: &'a [Discipline]) -> Vec<&'a Discipline> {
        disciplines.iter().filter(|d| self.matches(d)).collect()
    }
}
