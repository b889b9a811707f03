use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::generation::GenerationResult;
use crate::client::models::messages::Message;
use crate::common::document;
use iced::Command;

/// Which input the studio form is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Prompt,
    Url,
}

/// Minimum trimmed lengths before a request may be submitted. Shorter input
/// only disables the trigger control, it is never surfaced as an error.
pub const MIN_PROMPT_LEN: usize = 3;
pub const MIN_URL_LEN: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct StudioState {
    pub mode: InputMode,
    pub prompt_input: String,
    pub url_input: String,
    pub result: Option<GenerationResult>,
    /// Assembled preview document, computed once per result.
    pub preview_doc: String,
    pub loading: bool,
    pub error: Option<String>,
    pub fullscreen: bool,
    pub logger: Vec<LogMessage>,
}

impl StudioState {
    /// Guard for the Generate control: at most one request in flight, and the
    /// active mode's input must clear its minimum length.
    pub fn can_generate(&self) -> bool {
        if self.loading {
            return false;
        }
        match self.mode {
            InputMode::Prompt => self.prompt_input.trim().len() >= MIN_PROMPT_LEN,
            InputMode::Url => self.url_input.trim().len() >= MIN_URL_LEN,
        }
    }

    /// Enter the loading state: previous outcome is dropped wholesale, no
    /// partial result is ever shown.
    pub fn begin_generation(&mut self) {
        self.error = None;
        self.result = None;
        self.preview_doc.clear();
        self.loading = true;
    }

    /// Pure state transitions. Messages that need the HTTP service or a
    /// window command are handled in `gui::app` before falling through here.
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::None => {}
            Message::ModeSelected(mode) => {
                self.mode = mode;
            }
            Message::PromptChanged(text) => {
                self.prompt_input = text;
            }
            Message::UrlChanged(text) => {
                self.url_input = text;
            }
            Message::GenerationFinished(Ok(result)) => {
                self.loading = false;
                self.preview_doc = document::build_document(
                    result.html.as_deref(),
                    result.css.as_deref(),
                    result.js.as_deref(),
                );
                self.result = Some(result);
            }
            Message::GenerationFinished(Err(message)) => {
                self.loading = false;
                self.result = None;
                self.preview_doc.clear();
                self.error = Some(message);
            }
            Message::DownloadFinished(Ok(path)) => {
                self.logger.push(LogMessage {
                    level: LogLevel::Success,
                    message: format!("Saved ZIP to {}", path),
                });
                // keep the notice visible briefly, then clear it
                return Command::perform(
                    async {
                        tokio::time::sleep(tokio::time::Duration::from_millis(2500)).await;
                        Message::ClearLog
                    },
                    |m| m,
                );
            }
            Message::DownloadFinished(Err(message)) => {
                self.logger.push(LogMessage {
                    level: LogLevel::Error,
                    message: format!("Download failed: {}", message),
                });
            }
            Message::ClearLog => {
                self.logger.clear();
            }
            // service- and window-backed messages are consumed by gui::app
            Message::Generate
            | Message::DownloadZip
            | Message::ToggleFullscreen
            | Message::OpenInBrowser => {}
        }
        Command::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> GenerationResult {
        GenerationResult {
            html: Some("<h1>Hi</h1>".to_string()),
            css: Some("h1{color:red}".to_string()),
            js: Some("console.log(1)".to_string()),
            zip_base64: Some("AAAA".to_string()),
            filename: Some("site.zip".to_string()),
        }
    }

    #[test]
    fn prompt_guard_opens_at_three_characters() {
        let mut state = StudioState::default();
        state.prompt_input = "ab".to_string();
        assert!(!state.can_generate());
        state.prompt_input = "abc".to_string();
        assert!(state.can_generate());
    }

    #[test]
    fn url_guard_opens_at_eight_characters() {
        let mut state = StudioState {
            mode: InputMode::Url,
            ..Default::default()
        };
        state.url_input = "http://".to_string();
        assert!(!state.can_generate());
        state.url_input = "http://x".to_string();
        assert!(state.can_generate());
    }

    #[test]
    fn guard_trims_surrounding_whitespace() {
        let mut state = StudioState::default();
        state.prompt_input = "  ab  ".to_string();
        assert!(!state.can_generate());
    }

    #[test]
    fn loading_disables_the_guard() {
        let mut state = StudioState::default();
        state.prompt_input = "a fitness landing page".to_string();
        state.loading = true;
        assert!(!state.can_generate());
    }

    #[test]
    fn begin_generation_drops_previous_outcome() {
        let mut state = StudioState::default();
        state.error = Some("rate limited".to_string());
        state.result = Some(sample_result());
        state.preview_doc = "<!doctype html>".to_string();
        state.begin_generation();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.result.is_none());
        assert!(state.preview_doc.is_empty());
    }

    #[test]
    fn successful_generation_stores_result_and_assembles_preview() {
        let mut state = StudioState::default();
        state.loading = true;
        let _ = state.update(Message::GenerationFinished(Ok(sample_result())));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.preview_doc.contains("<h1>Hi</h1>"));
        assert!(state.preview_doc.contains("h1{color:red}"));
        let result = state.result.expect("result stored");
        assert!(result.has_archive());
    }

    #[test]
    fn failed_generation_surfaces_the_message_and_no_result() {
        let mut state = StudioState::default();
        state.loading = true;
        let _ = state.update(Message::GenerationFinished(Err("rate limited".to_string())));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("rate limited"));
        assert!(state.result.is_none());
        assert!(state.preview_doc.is_empty());
    }

    #[test]
    fn result_without_zip_hides_download_affordance() {
        let mut state = StudioState::default();
        let result = GenerationResult {
            zip_base64: None,
            ..sample_result()
        };
        let _ = state.update(Message::GenerationFinished(Ok(result)));
        let stored = state.result.expect("result stored");
        assert!(!stored.has_archive());
    }

    #[test]
    fn download_outcome_lands_in_the_alert_bar() {
        let mut state = StudioState::default();
        let _ = state.update(Message::DownloadFinished(Ok("./site.zip".to_string())));
        assert_eq!(state.logger.len(), 1);
        assert!(state.logger[0].message.contains("./site.zip"));
        let _ = state.update(Message::ClearLog);
        assert!(state.logger.is_empty());
    }
}
