//! Interactive commands typed at the subjects prompt.

use std::io::Write;

use subjects_lib::types::Subject;
use subjects_lib::{SubjectsConfig, UiEvent};

pub const HELP: &str = "\
Commands:
  next | n            next page
  prev | p            previous page
  size <N>            results per page (resets to page 1; other sizes pick the default)
  id [ID]             set or clear the id field
  name <TEXT>         set the name field
  save                create (empty id) or update (with id)
  cancel              clear the id field
  edit <ROW>          load a row of the current page into the form
  delete <ROW>        delete a row of the current page
  show                show the form
  help                this text
  quit | q            exit";

/// Command help followed by the page sizes offered by `config`.
pub fn help(config: &SubjectsConfig) -> String {
    let sizes: Vec<String> = config
        .page_size_options
        .iter()
        .map(|size| size.to_string())
        .collect();
    format!(
        "{}\n\nPage sizes: {} (default {})",
        HELP,
        sizes.join(", "),
        config.default_page_size
    )
}

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Size(String),
    Id(String),
    Name(String),
    Save,
    Cancel,
    Edit(usize),
    Delete(usize),
    Show,
    Help,
    Quit,
}

/// What the prompt loop should do with a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Event(UiEvent),
    SetId(String),
    SetName(String),
    ShowForm,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "next" | "n" => Ok(Command::Next),
        "prev" | "p" => Ok(Command::Prev),
        "size" => Ok(Command::Size(rest.to_string())),
        "id" => Ok(Command::Id(rest.to_string())),
        "name" => Ok(Command::Name(rest.to_string())),
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "edit" => parse_row(rest).map(Command::Edit),
        "delete" | "del" => parse_row(rest).map(Command::Delete),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "" => Err("empty command (type 'help')".to_string()),
        other => Err(format!("unknown command '{}' (type 'help')", other)),
    }
}

fn parse_row(input: &str) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(format!("expected a row number, got '{}'", input)),
    }
}

/// Maps a command onto the rows currently on screen.
pub fn resolve(
    command: Command,
    rows: &[Subject],
    config: &SubjectsConfig,
) -> Result<Action, String> {
    let row = |n: usize| {
        n.checked_sub(1)
            .and_then(|i| rows.get(i))
            .cloned()
            .ok_or_else(|| format!("no row {} on this page", n))
    };

    Ok(match command {
        Command::Next => Action::Event(UiEvent::NextPage),
        Command::Prev => Action::Event(UiEvent::PreviousPage),
        Command::Size(size) => Action::Event(UiEvent::PageSizeChanged(config.parse_page_size(&size))),
        Command::Id(id) => Action::SetId(id),
        Command::Name(name) => Action::SetName(name),
        Command::Save => Action::Event(UiEvent::Submit),
        Command::Cancel => Action::Event(UiEvent::Cancel),
        Command::Edit(n) => Action::Event(UiEvent::Edit(row(n)?)),
        Command::Delete(n) => Action::Event(UiEvent::Delete(row(n)?.id)),
        Command::Show => Action::ShowForm,
        Command::Help => Action::Help,
        Command::Quit => Action::Quit,
    })
}

pub fn print_prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use subjects_lib::types::SubjectId;

    use super::*;

    fn rows() -> Vec<Subject> {
        vec![Subject::new("7", "Algebra"), Subject::new("9", "Physics")]
    }

    #[test]
    fn parse_navigation() {
        assert_eq!(parse("next"), Ok(Command::Next));
        assert_eq!(parse(" N "), Ok(Command::Next));
        assert_eq!(parse("prev"), Ok(Command::Prev));
    }

    #[test]
    fn parse_fields_keep_inner_spaces() {
        assert_eq!(
            parse("name   Analisis Matematico I  "),
            Ok(Command::Name("Analisis Matematico I".to_string()))
        );
        assert_eq!(parse("id"), Ok(Command::Id(String::new())));
        assert_eq!(parse("id 7"), Ok(Command::Id("7".to_string())));
    }

    #[test]
    fn parse_rows() {
        assert_eq!(parse("edit 2"), Ok(Command::Edit(2)));
        assert_eq!(parse("delete 1"), Ok(Command::Delete(1)));
        assert!(parse("delete 0").is_err());
        assert!(parse("edit x").is_err());
    }

    #[test]
    fn parse_unknown() {
        assert!(parse("").is_err());
        assert!(parse("launch").is_err());
    }

    #[test]
    fn resolve_rows_to_events() {
        let config = SubjectsConfig::default();
        assert_eq!(
            resolve(Command::Delete(1), &rows(), &config),
            Ok(Action::Event(UiEvent::Delete(SubjectId::from("7"))))
        );
        assert_eq!(
            resolve(Command::Edit(2), &rows(), &config),
            Ok(Action::Event(UiEvent::Edit(Subject::new("9", "Physics"))))
        );
        assert!(resolve(Command::Edit(3), &rows(), &config).is_err());
    }

    #[test]
    fn resolve_size_falls_back_to_default() {
        let config = SubjectsConfig::default();
        assert_eq!(
            resolve(Command::Size("10".to_string()), &[], &config),
            Ok(Action::Event(UiEvent::PageSizeChanged(10)))
        );
        assert_eq!(
            resolve(Command::Size("lots".to_string()), &[], &config),
            Ok(Action::Event(UiEvent::PageSizeChanged(5)))
        );
        assert_eq!(
            resolve(Command::Size("7".to_string()), &[], &config),
            Ok(Action::Event(UiEvent::PageSizeChanged(5)))
        );
    }

    #[test]
    fn help_lists_page_sizes() {
        let text = help(&SubjectsConfig::default());
        assert!(text.starts_with(HELP));
        assert!(text.ends_with("Page sizes: 5, 10, 20, 50 (default 5)"));
    }
}
