pub mod collaborations;
pub mod featured;
pub mod links;
pub mod log;
pub mod press;
pub mod shows;
pub mod tracks;
