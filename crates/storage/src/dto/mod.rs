pub mod common;
pub mod guest;
pub mod host;
pub mod location;
pub mod panelist;
pub mod scorekeeper;
pub mod show;
