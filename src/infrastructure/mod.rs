// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod key_value;
pub mod persistence;
