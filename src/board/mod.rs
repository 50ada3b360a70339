//! Board reconciliation: drag gestures in, committed layouts out.

pub mod drag;
pub mod session;
pub mod state;

pub use drag::{CardBounds, DragTarget, HoveredCard, Placement};
pub use session::{BoardSession, DropOutcome};
pub use state::{Board, DropPlan};
