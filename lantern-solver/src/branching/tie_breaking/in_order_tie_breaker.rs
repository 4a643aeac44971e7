use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there are two variables
/// `x1` with value 5 and `x2` with value 5, if the tie-breaker first receives `x2` and then `x1`
/// then it will return `x2` because it was the first variable with the minimum value (of 5 in
/// this example) which was provided.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable, could be [None] if no variable has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [None] if no variable has been considered yet
    selected_value: Option<Value>,
    /// Whether the tie-breaker should find the variable with the maximum or minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        if let Some(selected_value) = self.selected_value.as_mut() {
            // We already have a stored variable and value, check whether it needs to be replaced
            match self.direction {
                Direction::Maximum => {
                    if value > *selected_value {
                        self.selected_variable = Some(variable);
                        self.selected_value = Some(value);
                    }
                }
                Direction::Minimum => {
                    if value < *selected_value {
                        self.selected_variable = Some(variable);
                        self.selected_value = Some(value);
                    }
                }
            }
        } else {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
