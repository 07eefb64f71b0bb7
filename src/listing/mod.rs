//! Paginated admin listings.
//!
//! Every admin list page is an [`EntityListing`] configured by a [`ListingSchema`]
//! describing its title, columns and page size. Pages that create or edit entities pair
//! it with an [`editor::Editor`].

pub mod editor;
pub mod pagination;
pub mod schema;

use dioxus_logger::tracing;

use crate::error::api::ApiError;

pub use pagination::Paginator;
pub use schema::{Column, ListingSchema};

/// Items per page shown by the admin listings
pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingState<T> {
    #[default]
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

/// A rendered row: the entity key and one cell per column
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub key: i64,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct EntityListing<T> {
    schema: ListingSchema<T>,
    state: ListingState<T>,
    page: usize,
}

impl<T: Clone> EntityListing<T> {
    pub fn new(schema: ListingSchema<T>) -> Self {
        Self {
            schema,
            state: ListingState::Loading,
            page: 1,
        }
    }

    pub fn schema(&self) -> &ListingSchema<T> {
        &self.schema
    }

    pub fn state(&self) -> &ListingState<T> {
        &self.state
    }

    /// Record the outcome of fetching the entities, returning to the first page
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>) {
        self.state = match result {
            Ok(items) => {
                tracing::debug!(listing = self.schema.title, items = items.len(), "Loaded listing");

                ListingState::Loaded(items)
            }
            Err(e) => ListingState::Failed(e.to_string()),
        };
        self.page = 1;
    }

    pub fn items(&self) -> &[T] {
        match &self.state {
            ListingState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.page, self.schema.page_size, self.items().len())
    }

    pub fn page(&self) -> usize {
        self.paginator().page()
    }

    pub fn page_count(&self) -> usize {
        self.paginator().page_count()
    }

    /// Move to `page`, clamped to the available pages
    pub fn set_page(&mut self, page: usize) {
        self.page = self.paginator().with_page(page).page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.schema.columns.iter().map(|c| c.header).collect()
    }

    /// Rows of the current page rendered through the schema's columns
    pub fn rows(&self) -> Vec<ListingRow> {
        let range = self.paginator().range();

        self.items()[range]
            .iter()
            .map(|item| self.schema.render(item))
            .collect()
    }

    /// Loaded entity whose key is `key`
    pub fn find(&self, key: i64) -> Option<&T> {
        let key_of = self.schema.key;

        self.items().iter().find(|item| key_of(item) == key)
    }

    /// Drop an entity after it was deleted remotely, staying on a valid page
    pub fn remove(&mut self, key: i64) {
        if let ListingState::Loaded(items) = &mut self.state {
            let key_of = self.schema.key;
            items.retain(|item| key_of(item) != key);
        }

        self.set_page(self.page);
    }
}
