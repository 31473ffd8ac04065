//! Pure policies applied on the hardened request paths.

pub mod password;
pub mod sanitizer;

pub use password::PolicyError;
pub use sanitizer::sanitize;
