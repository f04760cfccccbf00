//! Big Two rules: combination classification and play legality.
//!
//! - `classify` turns a set of cards into a `Combination`
//! - `check_play` / `is_legal` decide whether a candidate beats the table
//!
//! Both the human path (`BigTwoGame::play`) and the AI search go through
//! `check_play`, so the AI is bound by exactly the same rules.

pub mod combination;
pub mod legality;

pub use combination::{classify, ComboKind, Combination, PlayCards};
pub use legality::{check_play, is_legal, TableState};
