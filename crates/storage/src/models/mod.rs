mod appearance;
mod guest;
mod host;
mod location;
mod panelist;
mod postal_abbreviation;
mod pronouns;
mod scorekeeper;
mod show;

pub use appearance::{
    GuestAppearanceRow, HostAppearanceRow, LocationRecordingRow, PanelistAppearanceRow,
    ScorekeeperAppearanceRow,
};
pub use guest::Guest;
pub use host::Host;
pub use location::Location;
pub use panelist::Panelist;
pub use postal_abbreviation::PostalAbbreviation;
pub use pronouns::Pronouns;
pub use scorekeeper::Scorekeeper;
pub use show::Show;
