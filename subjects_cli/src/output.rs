use std::io::Write;

use serde::Serialize;
use subjects_lib::types::Subject;
use subjects_lib::{Messages, SubjectView};
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize, Debug)]
struct SubjectRow {
    #[tabled(rename = "#")]
    #[serde(rename = "Row")]
    row: usize,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Actions")]
    #[serde(skip)]
    actions: String,
}

fn build_subject_rows(subjects: &[Subject], messages: &Messages) -> Vec<SubjectRow> {
    let actions = format!("[{}] [{}]", messages.edit_label, messages.delete_label);
    subjects
        .iter()
        .enumerate()
        .map(|(i, s)| SubjectRow {
            row: i + 1,
            id: s.id.to_string(),
            name: s.name.clone(),
            actions: actions.clone(),
        })
        .collect()
}

fn render_table(subjects: &[Subject], messages: &Messages) -> String {
    let mut table = Table::new(build_subject_rows(subjects, messages));
    table.with(Style::rounded());
    table.to_string()
}

fn render_json(subjects: &[Subject], messages: &Messages) -> String {
    serde_json::to_string_pretty(&build_subject_rows(subjects, messages))
        .unwrap_or_else(|_| "[]".to_string())
}

fn render_modal(title: &str, message: &str, acknowledge: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record([title.to_string()]);
    builder.push_record([message.to_string()]);
    builder.push_record([format!("[ {} ]", acknowledge)]);
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// An error modal waiting for acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorModal {
    pub title: String,
    pub message: String,
}

/// Terminal rendering of the subjects page.
///
/// Form fields live in memory and are edited with the `id`/`name` commands.
/// Rendering failures on the writer are logged and otherwise ignored.
pub struct TerminalView<W> {
    out: W,
    format: OutputFormat,
    id: String,
    name: String,
    indicator: String,
    modal: Option<ErrorModal>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            id: String::new(),
            name: String::new(),
            indicator: String::new(),
            modal: None,
        }
    }

    pub fn modal(&self) -> Option<&ErrorModal> {
        self.modal.as_ref()
    }

    /// The single acknowledgement control of the modal.
    pub fn dismiss_error(&mut self) {
        self.modal = None;
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    /// Prints the form state below the table.
    pub fn print_form(&mut self) {
        let mode = if self.id.trim().is_empty() {
            "new".to_string()
        } else {
            format!("editing {}", self.id.trim())
        };
        let line = format!("Form ({}): name = {:?}", mode, self.name);
        self.write(&line);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> SubjectView for TerminalView<W> {
    fn id_field(&self) -> String {
        self.id.clone()
    }

    fn name_field(&self) -> String {
        self.name.clone()
    }

    fn set_id_field(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn set_name_field(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn render_rows(&mut self, subjects: &[Subject], messages: &Messages) {
        let rendered = match self.format {
            OutputFormat::Table => render_table(subjects, messages),
            OutputFormat::Json => render_json(subjects, messages),
        };
        self.write(&rendered);
    }

    fn set_page_indicator(&mut self, text: &str) {
        self.indicator = text.to_string();
        self.write(text);
    }

    fn show_error(&mut self, title: &str, message: &str, messages: &Messages) {
        let rendered = render_modal(title, message, &messages.acknowledge_label);
        self.write(&rendered);
        self.modal = Some(ErrorModal {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
