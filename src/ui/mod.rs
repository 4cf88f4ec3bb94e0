pub mod card;
pub mod messages;
pub mod prompt;
