use iced::widget::{button, column, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use std::time::Duration;

mod filter;
mod format;
mod state;
mod ui;

use state::catalog::{self, Catalog, CatalogError};
use state::criteria::{Criteria, SortMode, ALL_CATEGORIES};
use state::data::Product;

/// Quiet period between the last search keystroke and the re-render
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Main application state
struct Shopfront {
    /// The full product collection, written once at load
    catalog: Catalog,
    /// Current search/filter/sort selections
    criteria: Criteria,
    /// Derived view: the products currently on screen
    visible: Vec<Product>,
    /// Debounce generation. A settle message carrying an older
    /// generation belongs to a superseded keystroke and is ignored.
    search_generation: u64,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The startup load task finished
    CatalogLoaded(Result<Vec<Product>, CatalogError>),
    /// User typed in the search field
    SearchChanged(String),
    /// The debounce quiet period for a given generation elapsed
    SearchSettled(u64),
    /// User picked a category ("All" or one exact value)
    CategorySelected(String),
    /// User picked a sort mode
    SortSelected(SortMode),
    /// User pressed the clear button
    ClearFilters,
}

impl Shopfront {
    /// Create a new instance and kick off the catalog load
    fn new() -> (Self, Task<Message>) {
        let app = Shopfront {
            catalog: Catalog::empty(),
            criteria: Criteria::new(),
            visible: Vec::new(),
            search_generation: 0,
            status: String::from("Loading catalog..."),
        };

        (
            app,
            Task::perform(
                Catalog::load(catalog::default_catalog_path()),
                Message::CatalogLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(products)) => {
                println!("📦 Loaded {} products", products.len());
                self.catalog.install(products);
                self.status = format!("Ready. {} products in catalog.", self.catalog.len());
                self.refresh();
                Task::none()
            }
            Message::CatalogLoaded(Err(error)) => {
                // Degrade to the empty state; no retry
                eprintln!("❌ Error loading products: {}", error);
                self.status = format!("Could not load catalog: {}", error);
                self.refresh();
                Task::none()
            }
            Message::SearchChanged(query) => {
                // Criteria update is immediate (the clear button keys
                // off it); the re-render waits for the quiet period.
                self.criteria.search = query;
                self.search_generation += 1;
                let generation = self.search_generation;

                Task::perform(
                    async move {
                        tokio::time::sleep(SEARCH_DEBOUNCE).await;
                        generation
                    },
                    Message::SearchSettled,
                )
            }
            Message::SearchSettled(generation) => {
                if generation == self.search_generation {
                    self.refresh();
                }
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.criteria.category = category;
                self.refresh();
                Task::none()
            }
            Message::SortSelected(sort) => {
                self.criteria.sort = sort;
                self.refresh();
                Task::none()
            }
            Message::ClearFilters => {
                self.criteria.reset();
                self.refresh();
                Task::none()
            }
        }
    }

    /// Re-derive the visible list from the catalog and the criteria
    fn refresh(&mut self) {
        self.visible = filter::derive(self.catalog.products(), &self.criteria);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        categories.extend(self.catalog.categories());

        let search = text_input("Search products...", &self.criteria.search)
            .on_input(Message::SearchChanged)
            .padding(8)
            .width(Length::Fill);

        let mut toolbar = row![search].spacing(10).align_y(Alignment::Center);

        // Clear affordance only while there is something to clear
        if self.criteria.has_search() {
            toolbar = toolbar.push(button("Clear").on_press(Message::ClearFilters).padding(8));
        }

        toolbar = toolbar
            .push(
                pick_list(
                    categories,
                    Some(self.criteria.category.clone()),
                    Message::CategorySelected,
                )
                .padding(8),
            )
            .push(
                pick_list(SortMode::ALL, Some(self.criteria.sort), Message::SortSelected)
                    .padding(8),
            );

        column![
            text("Shopfront").size(32),
            toolbar,
            text(format!("Showing {} products", self.visible.len())).size(14),
            ui::grid::view(&self.visible),
            text(&self.status).size(12),
        ]
        .spacing(12)
        .padding(16)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Shopfront", Shopfront::update, Shopfront::view)
        .theme(Shopfront::theme)
        .centered()
        .run_with(Shopfront::new)
}
