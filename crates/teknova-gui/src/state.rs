use std::path::PathBuf;

/// UI-only state that the core viewer does not track.
#[derive(Default)]
pub struct UIState {
    /// File the current image was loaded from.
    pub file_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
