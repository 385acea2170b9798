use crate::domain::card::{Card, CardId};
use crate::domain::list::{List, ListId};
use serde::{Deserialize, Serialize};

/// Full kanban board state: an ordered sequence of lists.
///
/// Every mutating operation takes `&self` and returns a new `Board`, so a
/// caller holding the previous value always keeps a consistent snapshot.
/// Operations are total: inputs outside their documented domain (unknown
/// ids, out-of-range indices, blank titles) leave the board unchanged
/// instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| &list.id == id)
    }

    /// Finds a card anywhere on the board. Card ids are unique board-wide,
    /// so at most one list can hold a match.
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.lists
            .iter()
            .flat_map(|list| list.cards.iter())
            .find(|card| &card.id == id)
    }

    fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| &list.id == id)
    }

    /// Moves the list at `source` so that it ends up at `destination`.
    ///
    /// Remove-then-insert semantics: `destination` is interpreted against
    /// the sequence after the removal. Equal or out-of-range indices leave
    /// the board unchanged.
    pub fn reorder_lists(&self, source: usize, destination: usize) -> Board {
        if source == destination
            || source >= self.lists.len()
            || destination >= self.lists.len()
        {
            return self.clone();
        }

        let mut next = self.clone();
        let moved = next.lists.remove(source);
        next.lists.insert(destination, moved);
        next
    }

    /// Moves one card, within a list or across two lists.
    ///
    /// `destination_index` is an insertion point in the destination list
    /// after the card has been removed from the source list. Dropping a
    /// card back onto its original slot, referencing an unknown list, or
    /// passing an out-of-range index leaves the board unchanged.
    pub fn reorder_cards(
        &self,
        source_list: &ListId,
        destination_list: &ListId,
        source_index: usize,
        destination_index: usize,
    ) -> Board {
        if source_list == destination_list && source_index == destination_index {
            return self.clone();
        }
        let Some(from) = self.list_index(source_list) else {
            return self.clone();
        };
        let Some(to) = self.list_index(destination_list) else {
            return self.clone();
        };
        if source_index >= self.lists[from].cards.len() {
            return self.clone();
        }
        // Insertion points run 0..=len of the destination, counted after
        // the removal has shifted the source list.
        let insert_limit = if from == to {
            self.lists[to].cards.len() - 1
        } else {
            self.lists[to].cards.len()
        };
        if destination_index > insert_limit {
            return self.clone();
        }

        let mut next = self.clone();
        let card = next.lists[from].cards.remove(source_index);
        next.lists[to].cards.insert(destination_index, card);
        next
    }

    /// Appends a new empty list. Blank titles are ignored.
    pub fn add_list(&self, title: &str) -> Board {
        let title = title.trim();
        if title.is_empty() {
            return self.clone();
        }

        let mut next = self.clone();
        next.lists.push(List::new(title));
        next
    }

    /// Removes a list and every card in it. Unknown ids are ignored.
    pub fn delete_list(&self, id: &ListId) -> Board {
        let mut next = self.clone();
        next.lists.retain(|list| &list.id != id);
        next
    }

    /// Renames a list. Blank titles and unknown ids are ignored.
    pub fn update_list_title(&self, id: &ListId, title: &str) -> Board {
        let title = title.trim();
        if title.is_empty() {
            return self.clone();
        }
        let Some(index) = self.list_index(id) else {
            return self.clone();
        };

        let mut next = self.clone();
        next.lists[index].title = title.to_string();
        next
    }

    /// Appends a placeholder card to the given list. Unknown ids are
    /// ignored.
    pub fn add_card(&self, list_id: &ListId) -> Board {
        self.push_card(list_id, Card::new())
    }

    /// Appends a card with the given title. Blank titles and unknown ids
    /// are ignored.
    pub fn add_card_titled(&self, list_id: &ListId, title: &str) -> Board {
        let title = title.trim();
        if title.is_empty() {
            return self.clone();
        }
        self.push_card(list_id, Card::with_title(title))
    }

    fn push_card(&self, list_id: &ListId, card: Card) -> Board {
        let Some(index) = self.list_index(list_id) else {
            return self.clone();
        };

        let mut next = self.clone();
        next.lists[index].cards.push(card);
        next
    }

    /// Replaces the card whose id matches `card.id`, in whichever list
    /// holds it. Unknown ids are ignored.
    pub fn update_card(&self, card: Card) -> Board {
        let mut next = self.clone();
        let slot = next
            .lists
            .iter_mut()
            .find_map(|list| list.cards.iter_mut().find(|c| c.id == card.id));
        if let Some(slot) = slot {
            *slot = card;
        }
        next
    }

    /// Removes a card from whichever list holds it. Unknown ids are
    /// ignored.
    pub fn delete_card(&self, id: &CardId) -> Board {
        let mut next = self.clone();
        for list in &mut next.lists {
            list.cards.retain(|card| &card.id != id);
        }
        next
    }
}
