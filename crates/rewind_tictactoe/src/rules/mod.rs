//! Pure rule checks over board snapshots.

pub mod draw;
pub mod win;

pub use win::check_winner;
