pub mod call;
pub mod call_registry;
pub mod command;
pub mod config;
pub mod elevator_status;
pub mod error;
pub mod snapshot;
