pub mod cycle;
pub mod error;
pub mod fsm;
