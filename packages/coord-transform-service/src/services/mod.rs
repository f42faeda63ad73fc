pub mod client;
pub mod location;
