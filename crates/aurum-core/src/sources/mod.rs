pub mod fixture;
pub mod manual;
pub mod yahoo;

pub use fixture::FixtureSource;
pub use manual::ManualSource;
pub use yahoo::{YahooConfig, YahooSource};
