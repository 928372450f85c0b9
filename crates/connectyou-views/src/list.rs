//! Store list: summary cards for the filtered set.

use std::fmt::Write as _;

use connectyou_core::Store;

pub const EMPTY_MESSAGE: &str = "No stores found matching your criteria.";

/// Display model for one store in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreCard {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Capitalised category, e.g. `"Grocery"`.
    pub badge: String,
    pub distance: Option<String>,
    pub rating: f64,
    pub reviews: u32,
}

impl From<&Store> for StoreCard {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            address: store.address.clone(),
            badge: store.category.label(),
            distance: store.distance.clone(),
            rating: store.rating,
            reviews: store.reviews,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// A load is outstanding; a skeleton is shown.
    Loading,
    Failed { message: String },
    Empty,
    Ready(Vec<StoreCard>),
}

#[derive(Debug, Clone)]
pub struct ListView {
    state: ListState,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// Starts in [`ListState::Loading`] until the first set arrives.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
        }
    }

    pub fn loading(&mut self) {
        self.state = ListState::Loading;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ListState::Failed {
            message: message.into(),
        };
    }

    /// Shows `stores` in the given order.
    pub fn show(&mut self, stores: &[Store]) {
        self.state = if stores.is_empty() {
            ListState::Empty
        } else {
            ListState::Ready(stores.iter().map(StoreCard::from).collect())
        };
    }

    #[must_use]
    pub fn state(&self) -> &ListState {
        &self.state
    }

    #[must_use]
    pub fn cards(&self) -> &[StoreCard] {
        match &self.state {
            ListState::Ready(cards) => cards,
            _ => &[],
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        match &self.state {
            ListState::Loading => {
                let mut out = String::new();
                for _ in 0..3 {
                    let _ = writeln!(out, "  {}", "\u{2591}".repeat(12));
                    let _ = writeln!(out, "  {}\n", "\u{2591}".repeat(8));
                }
                out
            }
            ListState::Failed { message } => {
                format!("Could not load stores: {message}\nRun the search again to try again.\n")
            }
            ListState::Empty => format!("{EMPTY_MESSAGE}\n"),
            ListState::Ready(cards) => {
                let mut out = format!("Found {} stores\n\n", cards.len());
                for card in cards {
                    render_card(&mut out, card);
                }
                out
            }
        }
    }
}

fn render_card(out: &mut String, card: &StoreCard) {
    let _ = writeln!(out, "{}", card.name);
    let _ = writeln!(out, "  {}", card.address);
    let distance = card.distance.as_deref().unwrap_or("\u{2014}");
    let _ = writeln!(
        out,
        "  [{}]  {}  \u{2b50} {:.1} ({} reviews)",
        card.badge, distance, card.rating, card.reviews
    );
    out.push('\n');
}
