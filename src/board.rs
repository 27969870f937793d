//! Ordering of dashboard cards
//!
//! Drag-and-drop on the dashboard only ever permutes an ordered list of opaque
//! card identifiers; no business logic depends on the order, so that list is
//! all there is to model.

use serde::{Deserialize, Serialize};

/// An ordered list of opaque card identifiers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOrder {
    cards: Vec<String>,
}

impl CardOrder {
    pub fn new<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// The current order, first card on top
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Append a card that is not on the board yet. A no-op if it already is.
    pub fn add(&mut self, card: &str) {
        if self.cards.iter().any(|c| c == card) == false {
            self.cards.push(card.to_string());
        }
    }

    /// Drop a card from the board. A no-op if it is not there.
    pub fn remove(&mut self, card: &str) {
        self.cards.retain(|c| c != card);
    }

    /// Move a card to the given position, shifting the others.
    /// Positions past the end mean "last". Returns whether the card was found.
    pub fn move_to(&mut self, card: &str, position: usize) -> bool {
        let current = match self.cards.iter().position(|c| c == card) {
            Some(index) => index,
            None => return false,
        };
        let card = self.cards.remove(current);
        let position = position.min(self.cards.len());
        self.cards.insert(position, card);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> CardOrder {
        CardOrder::new(vec!["sales", "collections", "quotes", "calendar"])
    }

    #[test]
    fn move_shifts_the_others() {
        let mut order = board();
        assert!(order.move_to("calendar", 0));
        assert_eq!(order.cards(), ["calendar", "sales", "collections", "quotes"]);

        assert!(order.move_to("sales", 2));
        assert_eq!(order.cards(), ["calendar", "collections", "sales", "quotes"]);
    }

    #[test]
    fn positions_past_the_end_mean_last() {
        let mut order = board();
        assert!(order.move_to("sales", 99));
        assert_eq!(order.cards().last().unwrap(), "sales");
    }

    #[test]
    fn unknown_cards_and_duplicates_are_no_ops() {
        let mut order = board();
        assert_eq!(order.move_to("ghost", 0), false);

        order.add("sales");
        assert_eq!(order.cards().len(), 4);

        order.remove("quotes");
        order.remove("quotes");
        assert_eq!(order.cards().len(), 3);
    }
}
