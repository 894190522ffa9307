//! Calculator menu: numbered choices and their rendering.

use std::fmt;

use crate::ops::Operation;

/// A menu selection. Discriminants are the numbers shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add = 1,
    Subtract = 2,
    Multiply = 3,
    Divide = 4,
    Modulus = 5,
    Power = 6,
    Exit = 7,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Subtract,
        MenuChoice::Multiply,
        MenuChoice::Divide,
        MenuChoice::Modulus,
        MenuChoice::Power,
        MenuChoice::Exit,
    ];

    pub const FIRST: MenuChoice = MenuChoice::Add;
    pub const LAST: MenuChoice = MenuChoice::Exit;

    pub fn number(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add",
            MenuChoice::Subtract => "Subtract",
            MenuChoice::Multiply => "Multiply",
            MenuChoice::Divide => "Divide",
            MenuChoice::Modulus => "Modulus",
            MenuChoice::Power => "Power",
            MenuChoice::Exit => "Exit",
        }
    }

    /// The arithmetic behind this choice; `None` for `Exit`.
    pub fn operation(self) -> Option<Operation> {
        match self {
            MenuChoice::Add => Some(Operation::Add),
            MenuChoice::Subtract => Some(Operation::Subtract),
            MenuChoice::Multiply => Some(Operation::Multiply),
            MenuChoice::Divide => Some(Operation::Divide),
            MenuChoice::Modulus => Some(Operation::Modulus),
            MenuChoice::Power => Some(Operation::Power),
            MenuChoice::Exit => None,
        }
    }
}

/// A number that does not name any menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChoice(pub i64);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "menu choice {} is not between {} and {}",
            self.0,
            MenuChoice::FIRST.number(),
            MenuChoice::LAST.number()
        )
    }
}

impl std::error::Error for InvalidChoice {}

impl TryFrom<i64> for MenuChoice {
    type Error = InvalidChoice;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == n)
            .ok_or(InvalidChoice(n))
    }
}

const RULE: &str = "------------------------------";

/// The full menu block printed at startup and after malformed input.
pub fn render_menu() -> String {
    let mut lines = vec![
        String::new(),
        String::new(),
        RULE.to_string(),
        "Welcome to Simple Calculator".to_string(),
        RULE.to_string(),
        "Choose one of the following Options:".to_string(),
    ];
    for choice in MenuChoice::ALL {
        lines.push(format!("{}. {}", choice.number(), choice.label()));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_one_through_seven_map_to_choices() {
        for (n, expected) in (1i64..=7).zip(MenuChoice::ALL) {
            assert_eq!(MenuChoice::try_from(n), Ok(expected));
        }
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        for n in [0, 8, -1, i64::MAX] {
            assert_eq!(MenuChoice::try_from(n), Err(InvalidChoice(n)));
        }
    }

    #[test]
    fn only_exit_has_no_operation() {
        let without: Vec<MenuChoice> = MenuChoice::ALL
            .into_iter()
            .filter(|choice| choice.operation().is_none())
            .collect();
        assert_eq!(without, vec![MenuChoice::Exit]);
    }

    #[test]
    fn menu_lists_every_option_in_order() {
        let menu = render_menu();
        assert!(menu.contains("Welcome to Simple Calculator"));
        let positions: Vec<usize> = MenuChoice::ALL
            .iter()
            .map(|choice| {
                menu.find(&format!("{}. {}", choice.number(), choice.label()))
                    .expect("option listed")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn invalid_choice_message_names_the_range() {
        assert_eq!(
            InvalidChoice(9).to_string(),
            "menu choice 9 is not between 1 and 7"
        );
    }
}
