pub mod auction;
pub mod enrollment;
pub mod game;
pub mod game_state;
pub mod import;
pub mod logging;

pub use crate::domain::model::{ImportSummary, Row};
pub use crate::domain::ports::{Console, Importer, Storage};
pub use crate::utils::error::Result;
