//! Keypad calculator engine.
//!
//! This module provides functionality to:
//! - Build a problem one button press at a time, rejecting presses that
//!   would make it unevaluable
//! - Evaluate the problem after every press, even while it is incomplete
//! - Split typed lines into button presses

mod button;
mod detection;
mod edit;
mod evaluation;
mod render;
mod session;
mod token;

pub use button::{Button, ButtonError};
pub use detection::{parse_keys, split_keys};
pub use edit::{EntryMode, Expression, apply};
pub use evaluation::{ArithmeticEvaluator, EvalError, Evaluator, format_solution, solve};
pub use render::{render, to_evaluable};
pub use session::{Calculation, Calculator};
pub use token::{Operator, Token};
