pub mod ai_destination;
pub mod destination;
pub mod preferences;
