//! A calculator session: button presses in, problem and solution out.

use super::button::{Button, ButtonError};
use super::edit::{EntryMode, Expression, apply};
use super::evaluation::{ArithmeticEvaluator, Evaluator, solve};
use super::render::{render, to_evaluable};
use serde::Serialize;

/// What the display shows after a press.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// The problem as typed, e.g. `(1+2×`.
    pub problem: String,
    /// Value of the problem so far. Empty when there is nothing to evaluate.
    pub solution: String,
}

/// Calculator state for one display.
#[derive(Debug)]
pub struct Calculator<E = ArithmeticEvaluator> {
    expression: Expression,
    mode: EntryMode,
    calculation: Calculation,
    evaluator: E,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_evaluator(ArithmeticEvaluator)
    }
}

impl<E: Evaluator> Calculator<E> {
    /// Create a calculator that solves problems with `evaluator`.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            expression: Expression::new(),
            mode: EntryMode::Idle,
            calculation: Calculation::default(),
            evaluator,
        }
    }

    /// Apply one button press and re-evaluate.
    pub fn press(&mut self, button: Button) -> &Calculation {
        if button == Button::Clear {
            self.calculation = Calculation::default();
        }

        self.expression = apply(
            &self.expression,
            self.mode,
            button,
            &self.calculation.solution,
        );
        self.mode = EntryMode::after(button);

        tracing::debug!(%button, tokens = self.expression.tokens().len(), "button accepted");
        self.refresh();
        &self.calculation
    }

    /// Press the button with the given keypad label.
    ///
    /// Unknown labels leave the state untouched.
    pub fn press_label(&mut self, label: &str) -> Result<&Calculation, ButtonError> {
        let button = label.parse()?;
        Ok(self.press(button))
    }

    /// Clear the problem and the solution.
    pub fn reset(&mut self) {
        self.press(Button::Clear);
    }

    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// The string the evaluator receives for the current problem.
    pub fn evaluable(&self) -> String {
        to_evaluable(self.expression.tokens(), self.expression.balance())
    }

    fn refresh(&mut self) {
        self.calculation.problem = render(self.expression.tokens());

        let evaluable = self.evaluable();
        if evaluable.is_empty() {
            self.calculation.solution.clear();
            return;
        }

        match solve(&self.evaluator, &evaluable) {
            Ok(solution) => self.calculation.solution = solution,
            Err(err) => {
                tracing::debug!(%evaluable, "Failed to evaluate problem: {}", err);
            }
        }
    }
}
