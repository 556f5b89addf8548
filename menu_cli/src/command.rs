use thiserror::Error;

use crate::app::Screen;

/// Form fields the user can type into on the Menu screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Course,
    Price,
}

/// One line of user input, parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Go(Screen),
    /// Switch to the Filter screen, optionally changing the selected course.
    Filter(Option<String>),
    Set(Field, String),
    Save,
    Delete(String),
    Export,
    Help,
    Quit,
    /// Blank line; just redraw.
    Nothing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help` for the list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
home                 show the menu summary and all dishes
menu                 open the add form
filter [COURSE]      list dishes of one course (All, Starter, Main, Dessert)
name TEXT            set the dish name
description TEXT     set the description
course TEXT          set the course (Starter, Main, Dessert)
price TEXT           set the price
save                 add the dish in the form
delete ID            remove a dish
export               print the navigation payload as JSON
help                 show this text
quit                 leave";

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "home" => Command::Go(Screen::Home),
            "menu" | "add" => Command::Go(Screen::Menu),
            "filter" => Command::Filter((!rest.is_empty()).then(|| rest.to_string())),
            // form fields may be set to an empty value to clear them
            "name" => Command::Set(Field::Name, rest.to_string()),
            "description" | "desc" => Command::Set(Field::Description, rest.to_string()),
            "course" => Command::Set(Field::Course, rest.to_string()),
            "price" => Command::Set(Field::Price, rest.to_string()),
            "save" => Command::Save,
            "delete" | "rm" => Command::Delete(argument("delete")?),
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn navigation_commands() {
        assert_eq!(Command::parse("home"), Ok(Command::Go(Screen::Home)));
        assert_eq!(Command::parse("  Menu "), Ok(Command::Go(Screen::Menu)));
        assert_eq!(Command::parse("filter"), Ok(Command::Filter(None)));
        assert_eq!(
            Command::parse("filter Dessert"),
            Ok(Command::Filter(Some("Dessert".to_string())))
        );
    }

    #[test]
    fn field_values_keep_inner_spaces() {
        assert_eq!(
            Command::parse("description Slow roasted  lamb"),
            Ok(Command::Set(Field::Description, "Slow roasted  lamb".to_string()))
        );
        assert_eq!(Command::parse("price"), Ok(Command::Set(Field::Price, String::new())));
    }

    #[test]
    fn delete_needs_an_id() {
        assert_eq!(Command::parse("delete 3"), Ok(Command::Delete("3".to_string())));
        assert_eq!(Command::parse("delete"), Err(CommandError::MissingArgument("delete")));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(Command::parse("   "), Ok(Command::Nothing));
        assert_eq!(Command::parse("order 3"), Err(CommandError::Unknown("order".to_string())));
    }
}
