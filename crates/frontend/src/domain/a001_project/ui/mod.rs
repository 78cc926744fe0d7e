pub mod card;
pub mod highlights;
pub mod list;
