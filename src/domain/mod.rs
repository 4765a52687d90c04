// Domain layer - Dashboard model, registry and pure layout rules
pub mod breakpoint;
pub mod dashboard;
pub mod defaults;
pub mod error;
pub mod layout;
pub mod position;
pub mod registry;
pub mod widget;
