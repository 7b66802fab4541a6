//! Game rules for tic-tac-toe.
//!
//! Pure predicates over board state, separated from board storage so the
//! orchestrator and the tests share one source of truth.

mod draw;
mod win;

pub use draw::is_full;
pub use win::has_player_won;
