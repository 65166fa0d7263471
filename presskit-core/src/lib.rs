pub mod catalog;
pub mod commands;
pub mod engine;
pub mod error;
pub mod player;
pub mod resource;
pub mod selection;

pub use error::ErrorKind;
pub use player::{AudioPlayer, PlaybackState, SourcePolicy, format_time};
pub use selection::Selection;
