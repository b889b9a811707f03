use crate::client::models::app_state::{InputMode, StudioState};
use crate::client::models::generation::GenerationRequest;
use crate::client::models::messages::Message;
use crate::client::services::generate_service::GenerateService;
use crate::client::services::presenter;
use crate::common::archive;
use crate::config::ClientConfig;
use iced::{window, Application, Command, Element, Theme};

pub struct StudioApp {
    pub state: StudioState,
    pub config: ClientConfig,
    pub service: GenerateService,
}

impl Application for StudioApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let service = GenerateService::new(config.api_base.clone());
        let app = StudioApp {
            state: StudioState::default(),
            config,
            service,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Minisite Studio".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Generate => {
                // guard against concurrent requests and too-short input
                if !self.state.can_generate() {
                    return Command::none();
                }
                self.state.begin_generation();
                let request = match self.state.mode {
                    InputMode::Prompt => GenerationRequest::Prompt {
                        prompt: self.state.prompt_input.clone(),
                        provider: self.config.provider.clone(),
                    },
                    InputMode::Url => GenerationRequest::Url {
                        url: self.state.url_input.clone(),
                    },
                };
                let service = self.service.clone();
                Command::perform(
                    async move {
                        service
                            .generate(&request)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::GenerationFinished,
                )
            }
            Message::DownloadZip => {
                let Some(result) = self.state.result.as_ref() else {
                    return Command::none();
                };
                let Some(encoded) = result.zip_base64.clone().filter(|s| !s.is_empty()) else {
                    return Command::none();
                };
                let filename = result
                    .filename
                    .clone()
                    .unwrap_or_else(|| archive::DEFAULT_ARCHIVE_NAME.to_string());
                let target = self.config.download_dir.join(filename);
                Command::perform(
                    async move {
                        // the decoded archive only lives for the write below
                        match archive::materialize(&encoded, archive::ZIP_CONTENT_TYPE) {
                            Some(archive) => archive
                                .save_to(&target)
                                .map(|()| target.display().to_string())
                                .map_err(|e| e.to_string()),
                            None => Err("ZIP payload could not be decoded".to_string()),
                        }
                    },
                    Message::DownloadFinished,
                )
            }
            Message::ToggleFullscreen => {
                if self.state.preview_doc.is_empty() {
                    return Command::none();
                }
                self.state.fullscreen = !self.state.fullscreen;
                let mode = if self.state.fullscreen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                window::change_mode(window::Id::MAIN, mode)
            }
            Message::OpenInBrowser => {
                if self.state.preview_doc.is_empty() {
                    return Command::none();
                }
                let document = self.state.preview_doc.clone();
                Command::perform(
                    async move {
                        // both the fullscreen path and this fallback are
                        // cosmetic; a failure here is logged, not surfaced
                        if let Err(e) = presenter::present_in_browser(&document) {
                            log::warn!("external preview failed: {}", e);
                        }
                        Message::None
                    },
                    |m| m,
                )
            }
            other => self.state.update(other),
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::studio::view(&self.state)
    }
}
