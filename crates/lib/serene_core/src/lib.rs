//! # serene_core
//!
//! Core domain logic for Serene.

pub mod bot;
pub mod intent;
pub mod llm;
pub mod profile;
pub mod prompt;
pub mod session;
pub mod stress;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns a greeting string with the crate version.
pub fn greeting() -> String {
    format!("Hello from serene_core v{}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn greeting_contains_version() {
        let greeting = greeting();
        assert!(greeting.starts_with("Hello from serene_core v"));
        assert!(greeting.contains(env!("CARGO_PKG_VERSION")));
    }
}
