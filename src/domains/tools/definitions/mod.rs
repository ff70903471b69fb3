//! Tool definitions module.
//!
//! Each tool is defined in its own file and exported here.

pub mod calculator;

pub use calculator::{CalculatorError, CalculatorParams, CalculatorTool, Operation};
