/// Holds the airports
pub mod airport;
/// Holds the countries
pub mod country;
/// Holds the airport filters
pub mod filter;
/// Holds the public exports for the prelude
pub mod prelude;
/// Holds wrappers around primitive types
pub mod wrappers;
