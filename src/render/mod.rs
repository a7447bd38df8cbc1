//! MDX rendering: escaping, icon sanitization and the card grid

pub mod cards;
pub mod escape;
pub mod icon;

pub use cards::{Card, render_cards};
pub use icon::load_icon;
