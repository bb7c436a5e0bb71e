use std::sync::Arc;

use crate::answerer::QueryAnswerer;
use crate::models::Dataset;
use crate::session::Session;

/// Application state for the chat TUI.
///
/// Owns the conversation `Session`, the input buffer and the history scroll
/// position. The dataset is loaded before the UI starts and shared read-only.
#[derive(Debug, Clone)]
pub struct App {
    /// Conversation so far
    session: Session,
    /// Question being typed
    input: String,
    /// How many lines the history is scrolled up from the bottom
    scroll_back: u16,
    answerer: QueryAnswerer,
    dataset: Arc<Dataset>,
}

impl App {
    /// Creates a new App with an empty conversation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use renewal::tui::App;
    /// use renewal::{Dataset, QueryAnswerer};
    ///
    /// let app = App::new(Arc::new(Dataset::default()), QueryAnswerer::new());
    /// assert!(app.session().is_empty());
    /// assert_eq!(app.input(), "");
    /// ```
    pub fn new(dataset: Arc<Dataset>, answerer: QueryAnswerer) -> Self {
        Self {
            session: Session::new(),
            input: String::new(),
            scroll_back: 0,
            answerer,
            dataset,
        }
    }

    /// Returns the conversation.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns how far the history is scrolled up from the bottom.
    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    /// Returns the number of records in the loaded dataset.
    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    /// Appends a character to the input buffer.
    pub fn push_input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Removes the last character from the input buffer.
    pub fn pop_input_char(&mut self) {
        self.input.pop();
    }

    /// Submits the input buffer as a question.
    ///
    /// Blank input is discarded without an exchange. The buffer is cleared and
    /// the history jumps back to the newest exchange.
    pub fn submit(&mut self) {
        let question = std::mem::take(&mut self.input);
        if self
            .session
            .ask(&self.answerer, &question, &self.dataset)
            .is_some()
        {
            self.scroll_back = 0;
        }
    }

    /// Scrolls the history towards older exchanges.
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_back = self.scroll_back.saturating_add(amount);
    }

    /// Scrolls the history towards newer exchanges.
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(amount);
    }

    /// Clears the conversation and the input buffer.
    pub fn clear(&mut self) {
        self.session.clear();
        self.input.clear();
        self.scroll_back = 0;
    }
}
