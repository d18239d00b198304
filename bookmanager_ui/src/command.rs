use std::str::FromStr;

use crate::book_api::BookApi;
use crate::confirm::Confirm;
use crate::draft::{BookField, UnknownField};
use crate::form_manager::BookFormManager;

pub const ID_LOCKED: &str = "The id of a book cannot be changed while editing it";

pub const HELP: &str = "\
Commands:
  list                   reload the book list
  set <field> <value>    fill a form field (id, title, author, publisher, category, isbn, year, copies)
  submit                 add the book, or update it while editing
  edit <id>              edit a book from the list
  cancel                 stop editing and clear the form
  remove <id>            delete a book from the list
  view <id>              show a single book
  delete <id>            delete a book by id
  help                   show this help
  quit                   exit";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    List,
    Set(BookField, String),
    Submit,
    Edit(String),
    Cancel,
    Remove(String),
    View(String),
    Delete(String),
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum CommandError {
    #[error("Unknown command {0}, type `help` for the list of commands")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Field(#[from] UnknownField),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));

        Ok(match name.to_lowercase().as_str() {
            "list" => Command::List,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::Usage("set <field> <value>"));
                }
                Command::Set(field.parse()?, value.trim().to_string())
            }
            "submit" => Command::Submit,
            "edit" => Command::Edit(required_id(rest, "edit <id>")?),
            "cancel" => Command::Cancel,
            "remove" => Command::Remove(required_id(rest, "remove <id>")?),
            // a blank id is reported by the form itself
            "view" => Command::View(rest.to_string()),
            "delete" => Command::Delete(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        })
    }
}

fn required_id(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

/// Applies a command to the form, returns a hint for the user when the command was refused.
/// `help` and `quit` are left to the caller.
pub async fn execute<A: BookApi>(
    manager: &mut BookFormManager<A>,
    command: Command,
    confirmer: &mut dyn Confirm,
) -> Option<&'static str> {
    match command {
        Command::List => manager.list().await,
        Command::Set(field, value) => {
            if !manager.set_field(field, value) {
                return Some(ID_LOCKED);
            }
        }
        Command::Submit => manager.submit().await,
        Command::Edit(book_id) => manager.edit_by_id(&book_id),
        Command::Cancel => manager.cancel_edit(),
        Command::Remove(book_id) => manager.delete(&book_id, confirmer).await,
        Command::View(book_id) => {
            manager.set_search_id(book_id);
            manager.get_by_id().await
        }
        Command::Delete(book_id) => {
            manager.set_delete_id(book_id);
            manager.delete_by_id(confirmer).await
        }
        Command::Help | Command::Quit => {}
    }
    None
}

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::form_manager::{BOOK_ADDED, BOOK_DELETED};
    use crate::test_support::{book, ApiCall, RecordingBookApi};

    #[test]
    fn test_parses_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  SUBMIT ".parse::<Command>(), Ok(Command::Submit));
        assert_eq!(
            "set title The Left Hand of Darkness".parse::<Command>(),
            Ok(Command::Set(
                BookField::Title,
                "The Left Hand of Darkness".to_string()
            ))
        );
        assert_eq!(
            "set category".parse::<Command>(),
            Ok(Command::Set(BookField::Category, "".to_string()))
        );
        assert_eq!("edit 5".parse::<Command>(), Ok(Command::Edit("5".to_string())));
        assert_eq!("remove 5".parse::<Command>(), Ok(Command::Remove("5".to_string())));
        assert_eq!("view".parse::<Command>(), Ok(Command::View("".to_string())));
        assert_eq!("delete 5".parse::<Command>(), Ok(Command::Delete("5".to_string())));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(
            "edit".parse::<Command>(),
            Err(CommandError::Usage("edit <id>"))
        );
        assert_eq!(
            "set".parse::<Command>(),
            Err(CommandError::Usage("set <field> <value>"))
        );
        assert_eq!(
            "set pages 300".parse::<Command>(),
            Err(CommandError::Field(UnknownField("pages".to_string())))
        );
    }

    #[tokio::test]
    /// Drives a whole session through parsed commands
    /// 1. Fills the form and submits it
    /// 2. Edits the new book, id is locked
    /// 3. Views and deletes it by id
    async fn test_execute_session() {
        let mut manager = BookFormManager::mount(RecordingBookApi::default()).await;
        let mut yes = |_: &str| true;

        for line in [
            "set id 5",
            "set title Dune",
            "set author Herbert",
            "set publisher Chilton",
            "set category SciFi",
            "set isbn 123",
            "set year 1965",
            "set copies 3",
            "submit",
        ] {
            let command = line.parse::<Command>().unwrap();
            assert_eq!(execute(&mut manager, command, &mut yes).await, None);
        }
        assert_eq!(manager.message(), BOOK_ADDED);
        assert_eq!(manager.books(), &[book("5", "Dune")]);

        execute(&mut manager, Command::Edit("5".to_string()), &mut yes).await;
        let hint = execute(
            &mut manager,
            Command::Set(BookField::Id, "6".to_string()),
            &mut yes,
        )
        .await;
        assert_eq!(hint, Some(ID_LOCKED));
        execute(&mut manager, Command::Cancel, &mut yes).await;

        execute(&mut manager, Command::View("5".to_string()), &mut yes).await;
        assert_eq!(manager.view_book(), Some(&book("5", "Dune")));

        manager.api().clear_calls();
        execute(&mut manager, Command::Delete("5".to_string()), &mut yes).await;
        assert_eq!(manager.message(), BOOK_DELETED);
        assert_eq!(
            manager.api().calls(),
            vec![ApiCall::Delete("5".to_string()), ApiCall::List]
        );
    }
}
