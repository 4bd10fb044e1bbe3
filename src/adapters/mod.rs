// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod storage;

pub use console::{MemoryConsole, StdoutConsole};
pub use storage::LocalStorage;
