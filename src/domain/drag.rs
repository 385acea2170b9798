use crate::domain::board::Board;
use crate::domain::list::ListId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What kind of element a completed drag moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DragItem {
    List,
    Card,
}

/// Payload describing a completed drag gesture.
///
/// Container ids name droppable containers: a list id for card drags, the
/// board-level container for list drags. `destination_container_id` is
/// `None` when the item was dropped outside any valid target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub item_type: DragItem,
    pub source_container_id: String,
    pub destination_container_id: Option<String>,
    pub source_index: usize,
    pub destination_index: usize,
}

impl DragEnd {
    /// Container id used for drags of whole lists
    pub const BOARD_CONTAINER: &'static str = "all-lists";

    /// True when applying this drag cannot change the board: there is no
    /// destination, or the item was dropped back onto its original slot.
    /// Callers use this to skip reconciliation and the persistence write
    /// that would follow it.
    pub fn is_noop(&self) -> bool {
        match self.destination_container_id.as_deref() {
            None => true,
            Some(destination) => {
                destination == self.source_container_id
                    && self.destination_index == self.source_index
            }
        }
    }
}

impl Board {
    /// Applies a completed drag gesture, dispatching on the item type.
    ///
    /// Gestures that cannot change the board, including card drags whose
    /// container ids do not name lists on this board, leave it unchanged.
    pub fn apply_drag(&self, drag: &DragEnd) -> Board {
        let Some(destination_container) = drag.destination_container_id.as_deref() else {
            return self.clone();
        };
        if destination_container == drag.source_container_id
            && drag.destination_index == drag.source_index
        {
            return self.clone();
        }

        match drag.item_type {
            DragItem::List => self.reorder_lists(drag.source_index, drag.destination_index),
            DragItem::Card => {
                let (Ok(source_list), Ok(destination_list)) = (
                    ListId::from_str(&drag.source_container_id),
                    ListId::from_str(destination_container),
                ) else {
                    return self.clone();
                };
                self.reorder_cards(
                    &source_list,
                    &destination_list,
                    drag.source_index,
                    drag.destination_index,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;
    use crate::domain::list::List;

    fn card_drag(source: &ListId, destination: Option<&ListId>, from: usize, to: usize) -> DragEnd {
        DragEnd {
            item_type: DragItem::Card,
            source_container_id: source.to_string(),
            destination_container_id: destination.map(ListId::to_string),
            source_index: from,
            destination_index: to,
        }
    }

    fn list_drag(from: usize, to: usize) -> DragEnd {
        DragEnd {
            item_type: DragItem::List,
            source_container_id: DragEnd::BOARD_CONTAINER.to_string(),
            destination_container_id: Some(DragEnd::BOARD_CONTAINER.to_string()),
            source_index: from,
            destination_index: to,
        }
    }

    fn sample_board() -> Board {
        let mut first = List::new("To Do");
        first.cards.push(Card::with_title("A"));
        first.cards.push(Card::with_title("B"));
        let second = List::new("Done");
        Board {
            lists: vec![first, second],
        }
    }

    #[test]
    fn test_dropped_outside_target_is_noop() {
        let board = sample_board();
        let list_id = board.lists[0].id;
        let drag = card_drag(&list_id, None, 0, 0);

        assert!(drag.is_noop());
        assert_eq!(board.apply_drag(&drag), board);
    }

    #[test]
    fn test_dropped_on_original_slot_is_noop() {
        let board = sample_board();
        let list_id = board.lists[0].id;
        let drag = card_drag(&list_id, Some(&list_id), 1, 1);

        assert!(drag.is_noop());
        assert_eq!(board.apply_drag(&drag), board);

        let drag = list_drag(0, 0);
        assert!(drag.is_noop());
    }

    #[test]
    fn test_list_drag_reorders_lists() {
        let board = sample_board();
        let next = board.apply_drag(&list_drag(1, 0));

        assert_eq!(next.lists[0].title, "Done");
        assert_eq!(next.lists[1].title, "To Do");
    }

    #[test]
    fn test_card_drag_within_list() {
        let board = sample_board();
        let list_id = board.lists[0].id;

        let next = board.apply_drag(&card_drag(&list_id, Some(&list_id), 0, 1));

        assert_eq!(next.lists[0].cards[0].title, "B");
        assert_eq!(next.lists[0].cards[1].title, "A");
    }

    #[test]
    fn test_card_drag_across_lists() {
        let board = sample_board();
        let source = board.lists[0].id;
        let destination = board.lists[1].id;

        let next = board.apply_drag(&card_drag(&source, Some(&destination), 0, 0));

        assert_eq!(next.lists[0].cards.len(), 1);
        assert_eq!(next.lists[1].cards.len(), 1);
        assert_eq!(next.lists[1].cards[0].title, "A");
        assert_eq!(next.card_count(), board.card_count());
    }

    #[test]
    fn test_card_drag_with_non_list_container_is_noop() {
        let board = sample_board();
        let drag = DragEnd {
            item_type: DragItem::Card,
            source_container_id: DragEnd::BOARD_CONTAINER.to_string(),
            destination_container_id: Some(board.lists[1].id.to_string()),
            source_index: 0,
            destination_index: 0,
        };

        assert_eq!(board.apply_drag(&drag), board);
    }

    #[test]
    fn test_drag_end_wire_shape() {
        let drag = list_drag(2, 0);
        let value = serde_json::to_value(&drag).unwrap();

        assert_eq!(value["itemType"], "LIST");
        assert_eq!(value["sourceContainerId"], "all-lists");
        assert_eq!(value["sourceIndex"], 2);
        assert_eq!(value["destinationIndex"], 0);

        let back: DragEnd = serde_json::from_value(value).unwrap();
        assert_eq!(back, drag);
    }
}
