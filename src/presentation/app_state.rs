// Application state for HTTP handlers
use crate::application::poll_loop::PollLoop;
use crate::application::session::SharedSession;
use crate::application::settings_dispatcher::SettingsDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub dispatcher: SettingsDispatcher,
    pub poll: PollLoop,
}
