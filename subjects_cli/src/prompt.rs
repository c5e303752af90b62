//! Line input shared by the command loop and the delete confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use subjects_lib::Confirm;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, Lines};
use tokio::sync::Mutex;

/// A cloneable handle on one line-oriented input stream.
pub struct Input<R> {
    lines: Arc<Mutex<Lines<R>>>,
}

impl<R> Clone for Input<R> {
    fn clone(&self) -> Self {
        Self {
            lines: Arc::clone(&self.lines),
        }
    }
}

impl<R: AsyncBufRead + Unpin + Send> Input<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Arc::new(Mutex::new(reader.lines())),
        }
    }

    /// Next input line, or `None` at end of input.
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

/// Asks `prompt [y/N]` and reads the answer from the shared input.
pub struct LineConfirm<R> {
    input: Input<R>,
}

impl<R> LineConfirm<R> {
    pub fn new(input: Input<R>) -> Self {
        Self { input }
    }
}

/// Only an explicit yes confirms.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Confirm for LineConfirm<R> {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        let question = format!("{} [y/N] ", prompt);
        if stdout.write_all(question.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
            tracing::warn!("Failed to print confirmation prompt");
        }
        match self.input.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::error!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_variants() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(is_yes("sí"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("maybe"));
    }

    #[tokio::test]
    async fn input_reads_lines_in_order() {
        let input = Input::new(&b"next\nsave\n"[..]);
        let other = input.clone();
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("next"));
        assert_eq!(other.next_line().await.unwrap().as_deref(), Some("save"));
        assert_eq!(input.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn confirm_reads_answer() {
        let confirm = LineConfirm::new(Input::new(&b"y\nn\n"[..]));
        assert!(confirm.confirm("Delete?").await);
        assert!(!confirm.confirm("Delete?").await);
        assert!(!confirm.confirm("Delete?").await);
    }
}
