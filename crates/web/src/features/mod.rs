pub mod guests;
pub mod hosts;
pub mod locations;
pub mod panelists;
pub mod postal_abbreviations;
pub mod pronouns;
pub mod scorekeepers;
pub mod shows;
