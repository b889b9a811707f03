use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    minisite::client::gui::app::StudioApp::run(iced::Settings::default())
}
