use crate::domain::{Column, ProjectId};
use serde::{Deserialize, Serialize};

/// Which side of the hovered card the dragged project lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Before,
    After,
}

/// Vertical extent of a rendered card, in the pointer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Upper half of the card means before, lower half after
    pub fn placement_for(&self, pointer_y: f64) -> Placement {
        if pointer_y < self.midpoint() {
            Placement::Before
        } else {
            Placement::After
        }
    }
}

/// Card under the pointer during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredCard {
    pub id: ProjectId,
    pub bounds: CardBounds,
}

/// Insertion point the dragged project would drop into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTarget {
    pub column: Column,
    /// `None` appends to the end of the column
    pub card: Option<ProjectId>,
    pub placement: Placement,
}

impl DragTarget {
    pub fn end_of(column: Column) -> Self {
        Self {
            column,
            card: None,
            placement: Placement::After,
        }
    }

    pub fn at_card(column: Column, card: ProjectId, placement: Placement) -> Self {
        Self {
            column,
            card: Some(card),
            placement,
        }
    }
}
