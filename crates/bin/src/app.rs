use ratatui::widgets::ScrollbarState;
use threadview::constants::DEFAULT_THREAD_NAME;
use threadview::{ChatThreadView, InputBuffer, RenderMode, SubmitOutcome, ThreadId};
use tracing::debug;

pub struct App {
    pub view: ChatThreadView,

    // Thread ids in creation order, for Tab cycling
    pub order: Vec<ThreadId>,
    pub active: ThreadId,

    // Chat state
    pub input: InputBuffer,
    pub mode: RenderMode,
    pub scroll_state: ScrollbarState,
    pub scroll_position: usize,

    pub status_message: Option<String>,

    pub should_quit: bool,
}

impl App {
    /// Creates the app with one thread per requested name, ids assigned
    /// sequentially from "1". With no names, a single default thread.
    pub fn new(thread_names: &[String], mode: RenderMode) -> Self {
        let mut names = thread_names.to_vec();
        if names.is_empty() {
            names.push(DEFAULT_THREAD_NAME.to_string());
        }

        let mut view = ChatThreadView::new();
        let mut order = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let id = ThreadId::new((i + 1).to_string());
            // Sequential ids cannot collide
            if view.create_thread(id.clone(), name.clone()).is_ok() {
                order.push(id);
            }
        }
        let active = order[0].clone();

        Self {
            view,
            order,
            active,
            input: InputBuffer::new(),
            mode,
            scroll_state: ScrollbarState::default(),
            scroll_position: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Fires append-message on the active thread.
    ///
    /// A blank buffer and an unresolvable thread are both silent no-ops;
    /// the miss is only logged.
    pub fn submit_message(&mut self) {
        self.clear_status_message();
        match self.view.append_message(&self.active, &mut self.input) {
            Ok(SubmitOutcome::Appended) => self.update_scroll(),
            Ok(SubmitOutcome::IgnoredBlank) => {}
            Err(e) => debug!(thread = %self.active, error = %e, "append ignored"),
        }
    }

    /// Fires clear-thread on the active thread.
    pub fn clear_active_thread(&mut self) {
        match self.view.clear_thread(&self.active) {
            Ok(()) => self.status_message = Some("Thread cleared".to_string()),
            Err(e) => debug!(thread = %self.active, error = %e, "clear ignored"),
        }
        self.scroll_position = 0;
        self.scroll_state = self.scroll_state.position(0);
    }

    /// Cycles the active thread forward in creation order.
    pub fn next_thread(&mut self) {
        self.cycle_thread(1);
    }

    /// Cycles the active thread backward in creation order.
    pub fn prev_thread(&mut self) {
        self.cycle_thread(self.order.len().saturating_sub(1));
    }

    fn cycle_thread(&mut self, step: usize) {
        if self.order.len() < 2 {
            return;
        }
        self.clear_status_message();
        if let Some(pos) = self.order.iter().position(|id| *id == self.active) {
            self.active = self.order[(pos + step) % self.order.len()].clone();
            self.update_scroll();
        }
    }

    /// Entry count of the active thread; zero if it cannot be resolved.
    pub fn active_len(&self) -> usize {
        self.view.thread(&self.active).map(|t| t.len()).unwrap_or(0)
    }

    pub fn update_scroll(&mut self) {
        let len = self.active_len();
        if len > 0 {
            self.scroll_position = len - 1;
            self.scroll_state = self.scroll_state.position(self.scroll_position);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_position = self.scroll_position.saturating_sub(1);
        self.scroll_state = self.scroll_state.position(self.scroll_position);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_position < self.active_len().saturating_sub(1) {
            self.scroll_position = self.scroll_position.saturating_add(1);
            self.scroll_state = self.scroll_state.position(self.scroll_position);
        }
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
