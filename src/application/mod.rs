// Application layer - Ports, layout actions and the state container
pub mod key_value_store;
pub mod layout_actions;
pub mod layout_repository;
pub mod layout_store;
