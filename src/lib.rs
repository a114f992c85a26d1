// Library exports for testing
pub mod input;
pub mod logging;
pub mod timefmt;
