pub mod guest;
pub mod host;
pub mod location;
pub mod panelist;
pub mod postal_abbreviation;
pub mod pronouns;
pub mod scorekeeper;
pub mod show;
