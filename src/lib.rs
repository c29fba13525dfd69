pub mod calculator;
pub mod config;
pub mod logging;

pub use calculator::{Button, Calculation, Calculator, EvalError, Evaluator};
