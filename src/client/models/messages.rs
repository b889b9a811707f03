use crate::client::models::app_state::InputMode;
use crate::client::models::generation::GenerationResult;

#[derive(Debug, Clone)]
pub enum Message {
    None,
    // Input editing
    ModeSelected(InputMode),
    PromptChanged(String),
    UrlChanged(String),
    // Generation flow
    Generate,
    GenerationFinished(Result<GenerationResult, String>),
    // ZIP download
    DownloadZip,
    DownloadFinished(Result<String, String>),
    // Preview presentation surfaces
    ToggleFullscreen,
    OpenInBrowser,
    // Alert bar
    ClearLog,
}
