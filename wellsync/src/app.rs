//! Main application state and logic

use thiserror::Error;
use tokio::sync::mpsc;
use wellsync_core::{
    Companion, DailySchedule, InsightsReport, MoodCategory, QuizAnswers, QuizError, QuizResult,
    ReflectionComparisonResult, ScheduleProgress, SessionError, SingleAnalysisResult,
    WellnessSession, QUIZ_QUESTIONS,
};

use crate::ui::theme::WellSyncTheme;
use crate::worker::{WorkerRequest, WorkerResponse};

/// Vim-style input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - free text input
    Insert,
    /// Command mode - entering : commands
    Command,
}

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Chat,
    Analyzer,
    Quiz,
    Scheduler,
    Reflection,
    Insights,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Chat,
        Page::Analyzer,
        Page::Quiz,
        Page::Scheduler,
        Page::Reflection,
        Page::Insights,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Chat => "Chat",
            Page::Analyzer => "Analyzer",
            Page::Quiz => "Quiz",
            Page::Scheduler => "Scheduler",
            Page::Reflection => "Reflection",
            Page::Insights => "Insights",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Page for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let n = n as usize;
        (1..=Self::ALL.len()).contains(&n).then(|| Self::ALL[n - 1])
    }

    /// Page for a `:` command name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.title().eq_ignore_ascii_case(name))
    }

    /// Whether this page has a text box.
    pub fn accepts_text(self) -> bool {
        matches!(
            self,
            Page::Chat | Page::Analyzer | Page::Quiz | Page::Reflection
        )
    }
}

/// Errors surfaced to the user in the status bar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("Please share something about your day first")]
    EmptyInput,

    #[error("Please select your morning mood first")]
    MissingMorningMood,

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Unavailable(#[from] SessionError),
}

/// Main application state
pub struct App {
    // Channel communication with the companion worker
    pub request_tx: mpsc::Sender<WorkerRequest>,
    pub response_rx: mpsc::Receiver<WorkerResponse>,

    pub session: WellnessSession,

    // UI state
    pub theme: WellSyncTheme,
    pub page: Page,
    pub show_help: bool,

    // Input state
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,

    // Status
    status_message: Option<String>,
    error: Option<UiError>,
    pub should_quit: bool,

    // Chat
    pub companion: Companion,
    /// Replies requested from the worker and not yet received.
    pub pending_replies: usize,

    // Analyzer
    pub analysis: Option<SingleAnalysisResult>,

    // Quiz
    pub quiz_answers: Vec<String>,
    pub quiz_index: usize,
    pub quiz_result: Option<QuizResult>,

    // Scheduler
    pub schedule: Option<DailySchedule>,
    pub progress: ScheduleProgress,
    pub schedule_cursor: usize,

    // Reflection
    pub morning_mood: Option<MoodCategory>,
    pub mood_cursor: usize,
    pub reflection: Option<ReflectionComparisonResult>,

    // Insights
    pub insights: Option<InsightsReport>,

    pub animation_frame: u8,
}

impl App {
    pub fn new(
        request_tx: mpsc::Sender<WorkerRequest>,
        response_rx: mpsc::Receiver<WorkerResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            session: WellnessSession::new(),
            theme: WellSyncTheme::default(),
            page: Page::Home,
            show_help: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            status_message: Some("Press ? for help, 1-7 or Tab to switch pages".to_string()),
            error: None,
            should_quit: false,
            companion: Companion::new(),
            pending_replies: 0,
            analysis: None,
            quiz_answers: vec![String::new(); QUIZ_QUESTIONS.len()],
            quiz_index: 0,
            quiz_result: None,
            schedule: None,
            progress: ScheduleProgress::new(0),
            schedule_cursor: 0,
            morning_mood: None,
            mood_cursor: 0,
            reflection: None,
            insights: None,
            animation_frame: 0,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Switch page, loading whatever the new page shows on open.
    pub fn go_to(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        tracing::debug!(target: "wellsync::ui", from = self.page.title(), to = page.title(), "Page change");
        self.page = page;
        self.clear_input();
        self.input_mode = InputMode::Normal;
        self.error = None;

        match page {
            Page::Scheduler => self.refresh_schedule(),
            Page::Insights => self.refresh_insights(),
            Page::Quiz => self.load_quiz_answer(),
            _ => {}
        }
    }

    pub fn next_page(&mut self) {
        self.go_to(self.page.next());
    }

    pub fn prev_page(&mut self) {
        self.go_to(self.page.prev());
    }

    /// Enter insert mode on pages with a text box
    pub fn enter_insert_mode(&mut self) {
        if self.page.accepts_text() {
            self.input_mode = InputMode::Insert;
        } else {
            self.set_status("This page has no text input");
        }
    }

    /// Enter command mode (starts with :)
    pub fn enter_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.input_buffer.clear();
        self.input_buffer.push(':');
        self.cursor_position = 1;
    }

    /// Exit to normal mode
    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        // Clear command buffer when leaving command mode
        if self.input_buffer.starts_with(':') {
            self.clear_input();
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // =========================================================================
    // Page actions
    // =========================================================================

    /// Route submitted text to the current page.
    pub fn submit_text(&mut self, text: String) {
        self.error = None;
        let outcome = match self.page {
            Page::Chat => self.send_chat(&text),
            Page::Analyzer => self.analyze(&text),
            Page::Quiz => self.answer_quiz(text),
            Page::Reflection => self.reflect(&text),
            _ => Ok(()),
        };
        if let Err(e) = outcome {
            self.fail(e);
        }
    }

    fn fail(&mut self, error: UiError) {
        tracing::warn!(target: "wellsync::ui", page = self.page.title(), %error, "Action rejected");
        self.status_message = None;
        self.error = Some(error);
    }

    /// Send a chat message and ask the worker for a reply
    pub fn send_chat(&mut self, text: &str) -> Result<(), UiError> {
        let message = match self.companion.send(text) {
            Some(message) => message.text.clone(),
            None => return Err(UiError::EmptyInput),
        };

        // Try to send the request (non-blocking)
        if self
            .request_tx
            .try_send(WorkerRequest::Reply { message })
            .is_err()
        {
            self.set_status("Companion busy, please wait...");
            return Ok(());
        }
        self.pending_replies += 1;
        Ok(())
    }

    /// Whether the companion still owes a reply
    pub fn companion_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Apply a response from the companion worker
    pub fn apply_worker_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Reply(text) => {
                self.companion.push_reply(text);
                self.pending_replies = self.pending_replies.saturating_sub(1);
            }
        }
    }

    pub fn analyze(&mut self, text: &str) -> Result<(), UiError> {
        if text.trim().is_empty() {
            return Err(UiError::EmptyInput);
        }
        let result = self.session.analyze_entry(text)?.clone();
        self.set_status(format!(
            "Detected {} ({:.0}% confidence)",
            result.mood,
            result.confidence * 100.0
        ));
        self.analysis = Some(result);
        Ok(())
    }

    /// Clear the analyzer result and input
    pub fn clear_analysis(&mut self) {
        self.analysis = None;
        self.error = None;
        self.clear_input();
    }

    /// Store the current quiz answer and move on, submitting after the last one.
    pub fn answer_quiz(&mut self, text: String) -> Result<(), UiError> {
        self.quiz_answers[self.quiz_index] = text;
        if self.quiz_index + 1 < self.quiz_answers.len() {
            self.quiz_index += 1;
            self.load_quiz_answer();
            return Ok(());
        }
        self.submit_quiz()
    }

    pub fn submit_quiz(&mut self) -> Result<(), UiError> {
        let answers = QuizAnswers::from_form(&self.quiz_answers).map_err(|e| {
            if let QuizError::Unanswered { question_id } = e {
                self.select_question(question_id as usize - 1);
            }
            e
        })?;
        let score = self.session.submit_quiz(&answers).clone();
        self.set_status(format!("Wellness score: {}/100", score.wellness_score));
        self.quiz_result = Some(score);
        Ok(())
    }

    /// Focus a quiz question, loading its previous answer into the input.
    pub fn select_question(&mut self, index: usize) {
        self.quiz_index = index.min(self.quiz_answers.len() - 1);
        self.load_quiz_answer();
    }

    fn load_quiz_answer(&mut self) {
        let answer = self.quiz_answers[self.quiz_index].clone();
        self.set_input(answer);
    }

    pub fn refresh_schedule(&mut self) {
        match self.session.daily_schedule() {
            Ok(schedule) => {
                // Keep ticks when the routine is unchanged
                if self.schedule.as_ref() != Some(&schedule) {
                    self.progress = ScheduleProgress::new(schedule.routine.len());
                    self.schedule_cursor = 0;
                }
                self.schedule = Some(schedule);
            }
            Err(e) => {
                self.schedule = None;
                self.fail(e.into());
            }
        }
    }

    pub fn toggle_schedule_item(&mut self) {
        self.progress.toggle(self.schedule_cursor);
    }

    pub fn move_cursor(&mut self, down: bool) {
        let (cursor, len) = match self.page {
            Page::Scheduler => (&mut self.schedule_cursor, self.progress.total()),
            Page::Reflection => (&mut self.mood_cursor, MoodCategory::ALL.len()),
            Page::Quiz => {
                let next = if down {
                    self.quiz_index + 1
                } else {
                    self.quiz_index.saturating_sub(1)
                };
                self.select_question(next);
                return;
            }
            _ => return,
        };
        if len == 0 {
            return;
        }
        *cursor = if down {
            (*cursor + 1).min(len - 1)
        } else {
            cursor.saturating_sub(1)
        };
    }

    /// Pick the highlighted morning mood
    pub fn choose_morning_mood(&mut self) {
        let mood = MoodCategory::ALL[self.mood_cursor];
        self.morning_mood = Some(mood);
        self.set_status(format!("Morning mood: {mood}"));
    }

    pub fn reflect(&mut self, evening: &str) -> Result<(), UiError> {
        let morning = self.morning_mood.ok_or(UiError::MissingMorningMood)?;
        if evening.trim().is_empty() {
            return Err(UiError::EmptyInput);
        }
        let result = self.session.reflect(morning.label(), evening)?.clone();
        self.set_status(format!(
            "Mood {} ({:+})",
            result.trend, result.mood_change
        ));
        self.reflection = Some(result);
        Ok(())
    }

    pub fn refresh_insights(&mut self) {
        match self.session.insights() {
            Ok(report) => self.insights = Some(report),
            Err(e) => {
                self.insights = None;
                self.fail(e.into());
            }
        }
    }

    /// Process a colon command
    /// Returns whether it was recognized
    pub fn process_command(&mut self, command: &str) -> bool {
        let cmd = command.trim_start_matches(':');
        let parts: Vec<&str> = cmd.split_whitespace().collect();

        if parts.is_empty() {
            return false;
        }

        match parts[0] {
            "q" | "quit" | "exit" => {
                self.should_quit = true;
                true
            }
            "help" | "h" => {
                self.toggle_help();
                true
            }
            "clear" => {
                self.clear_analysis();
                true
            }
            "submit" if self.page == Page::Quiz => {
                if let Err(e) = self.submit_quiz() {
                    self.fail(e);
                }
                true
            }
            name => match Page::from_name(name) {
                Some(page) => {
                    self.go_to(page);
                    true
                }
                None => {
                    self.set_status(format!("Unknown command: {name}"));
                    false
                }
            },
        }
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    // =========================================================================
    // Input editing
    // =========================================================================

    /// Submit current input
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input_buffer.is_empty() {
            return None;
        }
        self.cursor_position = 0;
        Some(std::mem::take(&mut self.input_buffer))
    }

    /// Handle a typed character (unicode-safe)
    pub fn type_char(&mut self, c: char) {
        // Convert cursor position (character index) to byte index
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Handle backspace (unicode-safe)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.remove_at_cursor();
        }
    }

    /// Handle delete (unicode-safe)
    pub fn delete(&mut self) {
        self.remove_at_cursor();
    }

    fn remove_at_cursor(&mut self) {
        if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position) {
            self.input_buffer
                .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    pub fn set_input(&mut self, content: impl Into<String>) {
        self.input_buffer = content.into();
        self.cursor_end();
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn error(&self) -> Option<&UiError> {
        self.error.as_ref()
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellsync_core::{MoodTrend, Sender};

    fn test_app() -> (App, mpsc::Receiver<WorkerRequest>) {
        let (request_tx, request_rx) = mpsc::channel(4);
        let (_response_tx, response_rx) = mpsc::channel(4);
        (App::new(request_tx, response_rx), request_rx)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Home.prev(), Page::Insights);
        assert_eq!(Page::Insights.next(), Page::Home);
        assert_eq!(Page::from_number(3), Some(Page::Analyzer));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(8), None);
        assert_eq!(Page::from_name("QUIZ"), Some(Page::Quiz));
    }

    #[test]
    fn test_unicode_editing() {
        let (mut app, _rx) = test_app();
        type_str(&mut app, "héllo");
        app.cursor_left();
        app.cursor_left();
        app.cursor_left();
        app.backspace();
        assert_eq!(app.input_buffer(), "hllo");
        app.cursor_home();
        app.delete();
        assert_eq!(app.input_buffer(), "llo");
        assert_eq!(app.submit_input(), Some("llo".to_string()));
        assert_eq!(app.submit_input(), None);
    }

    #[test]
    fn test_chat_sends_request() {
        let (mut app, mut rx) = test_app();
        app.go_to(Page::Chat);
        app.submit_text("hello there".to_string());

        assert!(app.companion_typing());
        assert_eq!(
            rx.try_recv().unwrap(),
            WorkerRequest::Reply {
                message: "hello there".to_string()
            }
        );

        app.apply_worker_response(WorkerResponse::Reply("Keep going!".to_string()));
        assert!(!app.companion_typing());
        let last = app.companion.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Ai);
        assert_eq!(last.text, "Keep going!");
    }

    #[test]
    fn test_typing_lasts_until_every_reply_arrives() {
        let (mut app, _rx) = test_app();
        app.go_to(Page::Chat);
        app.submit_text("first".to_string());
        app.submit_text("second".to_string());
        assert_eq!(app.pending_replies, 2);

        app.apply_worker_response(WorkerResponse::Reply("One".to_string()));
        assert!(app.companion_typing());
        app.apply_worker_response(WorkerResponse::Reply("Two".to_string()));
        assert!(!app.companion_typing());
    }

    #[test]
    fn test_blank_chat_is_rejected() {
        let (mut app, mut rx) = test_app();
        app.go_to(Page::Chat);
        app.submit_text("   ".to_string());
        assert_eq!(app.error(), Some(&UiError::EmptyInput));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_analyzer() {
        let (mut app, _rx) = test_app();
        app.go_to(Page::Analyzer);
        app.submit_text("tired after a long shift".to_string());
        assert_eq!(app.analysis.as_ref().unwrap().mood, MoodCategory::Tired);

        app.clear_analysis();
        assert!(app.analysis.is_none());
    }

    #[test]
    fn test_scheduler_requires_analysis() {
        let (mut app, _rx) = test_app();
        app.go_to(Page::Scheduler);
        assert!(app.schedule.is_none());
        assert_eq!(
            app.error(),
            Some(&UiError::Unavailable(SessionError::MissingChatAnalysis))
        );
        assert_eq!(
            app.error().unwrap().to_string(),
            "Please complete the Chat Analyzer first."
        );
    }

    #[test]
    fn test_quiz_walkthrough() {
        let (mut app, _rx) = test_app();
        app.go_to(Page::Quiz);
        for answer in ["8", "1", "no", "9", "8"] {
            app.submit_text(answer.to_string());
        }
        assert_eq!(app.quiz_result.as_ref().unwrap().wellness_score, 100);
    }

    #[test]
    fn test_quiz_missing_answer_jumps_back() {
        let (mut app, _rx) = test_app();
        app.go_to(Page::Quiz);
        app.submit_text("7".to_string());
        app.select_question(4);
        app.submit_text("9".to_string());

        assert!(matches!(app.error(), Some(UiError::Quiz(_))));
        assert_eq!(app.quiz_index, 1);
        assert!(app.quiz_result.is_none());
    }

    #[test]
    fn test_schedule_toggle() {
        let (mut app, _rx) = test_app();
        app.analyze("stressed about work").unwrap();
        app.quiz_answers = ["7", "2", "no", "6", "9"].map(String::from).to_vec();
        app.submit_quiz().unwrap();
        app.go_to(Page::Scheduler);
        assert!(app.error().is_none());
        let total = app.schedule.as_ref().unwrap().routine.len();
        assert_eq!(app.progress.total(), total);

        app.move_cursor(true);
        app.toggle_schedule_item();
        assert!(app.progress.is_completed(1));

        // Re-opening with the same routine keeps progress
        app.go_to(Page::Home);
        app.go_to(Page::Scheduler);
        assert!(app.progress.is_completed(1));
    }

    #[test]
    fn test_reflection_needs_morning_mood() {
        let (mut app, _rx) = test_app();
        app.go_to(Page::Reflection);
        app.submit_text("feeling great".to_string());
        assert_eq!(app.error(), Some(&UiError::MissingMorningMood));

        // Stressed is last in the list
        for _ in 0..MoodCategory::ALL.len() {
            app.move_cursor(true);
        }
        app.choose_morning_mood();
        assert_eq!(app.morning_mood, Some(MoodCategory::Stressed));

        app.submit_text("feeling great".to_string());
        let reflection = app.reflection.as_ref().unwrap();
        assert_eq!(reflection.trend, MoodTrend::Improved);
        assert_eq!(reflection.mood_change, 50);
    }

    #[test]
    fn test_insights_after_full_day() {
        let (mut app, _rx) = test_app();
        app.analyze("calm").unwrap();
        app.quiz_answers = ["7", "2", "no", "6", "9"].map(String::from).to_vec();
        app.submit_quiz().unwrap();
        app.morning_mood = Some(MoodCategory::Calm);
        app.reflect("calm and relaxed").unwrap();

        app.go_to(Page::Insights);
        let report = app.insights.as_ref().unwrap();
        assert_eq!(report.mood_trend, MoodTrend::Stable);
    }

    #[test]
    fn test_commands() {
        let (mut app, _rx) = test_app();
        assert!(app.process_command(":quiz"));
        assert_eq!(app.page, Page::Quiz);
        assert!(!app.process_command(":bogus"));
        assert_eq!(app.status_message(), Some("Unknown command: bogus"));
        assert!(app.process_command(":q"));
        assert!(app.should_quit);
    }
}
