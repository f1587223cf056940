use crate::app::config::AppConfig;
use crate::domain::catalog::{CatalogStore, DEFAULT_CATEGORY};
use crate::domain::error::CatalogError;
use crate::domain::models::{BotCommand, Category};
use std::sync::Arc;

/// Selection and search state over a [`CatalogStore`].
///
/// The selection is kept as an index into the catalog's declaration order,
/// so it can never point at a category that does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    catalog: Arc<CatalogStore>,
    selected: usize,
    query: String,
}

/// Whether the derived list has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Results,
    NoResults,
}

/// The (category, visible commands) pair on screen right now.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    pub category: &'a Category,
    pub commands: Vec<&'a BotCommand>,
}

impl DerivedView<'_> {
    #[must_use]
    pub fn listing(&self) -> Listing {
        if self.commands.is_empty() {
            Listing::NoResults
        } else {
            Listing::Results
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl ViewModel {
    pub fn new(catalog: Arc<CatalogStore>, default_id: &str) -> Result<Self, CatalogError> {
        let selected = catalog
            .position(default_id)
            .ok_or_else(|| CatalogError::NotFound(default_id.to_string()))?;
        Ok(Self {
            catalog,
            selected,
            query: String::new(),
        })
    }

    /// Opens on the configured category, or on the built-in default when the
    /// configured id is not in the catalog.
    pub fn from_config(catalog: Arc<CatalogStore>, config: &AppConfig) -> Self {
        let wanted = config.default_category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        let selected = match catalog.position(wanted) {
            Some(index) => index,
            None => {
                tracing::warn!(
                    category = wanted,
                    fallback = DEFAULT_CATEGORY,
                    "unknown default category"
                );
                catalog.position(DEFAULT_CATEGORY).unwrap_or(0)
            }
        };
        Self {
            catalog,
            selected,
            query: String::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_id(&self) -> &str {
        &self.selected_category().id
    }

    #[must_use]
    pub fn selected_category(&self) -> &Category {
        // `selected` only ever holds positions handed out by the catalog.
        &self.catalog.categories()[self.selected]
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `false` and leaves the selection alone when `id` is unknown.
    pub fn select_category(&mut self, id: &str) -> bool {
        match self.catalog.position(id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        let next = (self.selected + 1) % self.catalog.len();
        self.select_index(next);
    }

    pub fn select_prev(&mut self) {
        let prev = if self.selected == 0 {
            self.catalog.len() - 1
        } else {
            self.selected - 1
        };
        self.select_index(prev);
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.catalog.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Stored verbatim; an empty string disables filtering.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    #[must_use]
    pub fn derive(&self) -> DerivedView<'_> {
        let category = self.selected_category();
        let needle = self.query.to_lowercase();
        let commands = if needle.is_empty() {
            category.commands.iter().collect()
        } else {
            category
                .commands
                .iter()
                .filter(|cmd| cmd.matches(&needle))
                .collect()
        };
        DerivedView { category, commands }
    }
}

impl Default for ViewModel {
    /// The built-in catalog, opened on its default category.
    fn default() -> Self {
        let catalog = CatalogStore::builtin();
        let selected = catalog.position(DEFAULT_CATEGORY).unwrap_or(0);
        Self {
            catalog: Arc::new(catalog),
            selected,
            query: String::new(),
        }
    }
}
