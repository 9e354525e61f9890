use janken_core::{
    Event, EventBus, GameConfig, GameEngine, GameError, Hand, RoundOutcome, SessionSummary,
};
use janken_data::I18n;
use std::collections::VecDeque;

const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub i18n: I18n,
    pub locale: String,
    pub seed: u64,
    pub engine: GameEngine,
    pub events: EventBus,
    pub hand_cursor: usize,
    pub selected: Option<Hand>,
    pub last_outcome: Option<RoundOutcome>,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(
        i18n: I18n,
        locale: &str,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        let engine = GameEngine::new(config, seed)?;
        let locale = i18n.locale_or_default(Some(locale)).to_string();
        let status_line = i18n.translate_or_key(&locale, "game.ready").to_string();
        Ok(Self {
            i18n,
            locale,
            seed,
            engine,
            events: EventBus::default(),
            hand_cursor: 0,
            selected: None,
            last_outcome: None,
            event_log: VecDeque::new(),
            status_line,
            show_help: false,
            should_quit: false,
        })
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.i18n.translate_or_key(&self.locale, key)
    }

    pub fn hand_label(&self, hand: Hand) -> String {
        format!("{} {}", hand.glyph(), self.t(hand.label_key()))
    }

    pub fn cursor_hand(&self) -> Hand {
        Hand::ALL[self.hand_cursor.min(Hand::ALL.len() - 1)]
    }

    /// Hand controls are disabled once the session is over.
    pub fn controls_enabled(&self) -> bool {
        !self.engine.is_session_over()
    }

    pub fn move_cursor(&mut self, right: bool) {
        if !self.controls_enabled() {
            return;
        }
        move_index(&mut self.hand_cursor, Hand::ALL.len(), right);
    }

    pub fn select_cursor(&mut self) {
        if !self.controls_enabled() {
            return;
        }
        self.selected = Some(self.cursor_hand());
    }

    pub fn pick(&mut self, hand: Hand) {
        if !self.controls_enabled() {
            return;
        }
        self.hand_cursor = usize::from(hand.ordinal());
        self.selected = Some(hand);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn submit(&mut self) {
        if self.engine.is_session_over() {
            let hint = format!("{}: {}", self.t("game.over"), self.t("game.new_game"));
            self.push_status(hint);
            return;
        }
        match self.engine.submit_choice(self.selected, &mut self.events) {
            Ok(outcome) => {
                let line = format!(
                    "{} {}",
                    self.t(outcome.result.label_key()),
                    self.round_line(&outcome)
                );
                self.push_status(line);
                self.last_outcome = Some(outcome);
            }
            Err(GameError::InputMissing) => {
                let prompt = self.t("game.choose_hand").to_string();
                self.push_status(prompt);
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
    }

    pub fn new_game(&mut self) {
        self.engine.reset(&mut self.events);
        self.selected = None;
        self.last_outcome = None;
        let status = self.t("game.new_game_started").to_string();
        self.push_status(status);
        self.flush_events();
    }

    pub fn cycle_locale(&mut self) {
        self.locale = self.i18n.next_locale(&self.locale).to_string();
        let status = format!(
            "{}: {}",
            self.t("game.language"),
            self.i18n.language_name(&self.locale).unwrap_or(&self.locale)
        );
        self.push_status(status);
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        self.engine.summary()
    }

    pub fn summary_lines(&self, summary: &SessionSummary) -> Vec<String> {
        vec![
            format!("{}: {}", self.t("game.summary.wins"), summary.wins),
            format!("{}: {}", self.t("game.summary.draws"), summary.draws),
            format!("{}: {}", self.t("game.summary.losses"), summary.losses),
            format!(
                "{}: {:.0}%",
                self.t("game.summary.win_rate"),
                summary.win_rate_percent()
            ),
        ]
    }

    pub fn rounds_left_line(&self) -> String {
        format!(
            "{}: {}/{}",
            self.t("game.rounds_left"),
            self.engine.rounds_remaining(),
            self.engine.config().initial_rounds
        )
    }

    fn round_line(&self, outcome: &RoundOutcome) -> String {
        format!(
            "{} {} / {} {}",
            self.t("game.you_played"),
            outcome.user_hand.glyph(),
            self.t("game.system_played"),
            outcome.system_hand.glyph()
        )
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    pub fn push_error(&mut self, err: GameError) {
        self.status_line = format!("{}: {err}", self.t("game.error"));
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            let line = self.format_event(&event);
            self.push_event_line(line);
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }

    fn format_event(&self, event: &Event) -> String {
        match event {
            Event::RoundPlayed {
                round,
                user_hand,
                system_hand,
                result,
                rounds_remaining,
            } => format!(
                "{} {round}: {} vs {} -> {} ({} {rounds_remaining})",
                self.t("game.round"),
                user_hand.glyph(),
                system_hand.glyph(),
                self.t(result.label_key()),
                self.t("game.rounds_left"),
            ),
            Event::SessionFinished { summary } => format!(
                "{}: {}",
                self.t("game.over"),
                self.summary_lines(summary).join(" | ")
            ),
            Event::SessionReset { rounds } => {
                format!("{} ({rounds})", self.t("game.new_game_started"))
            }
        }
    }
}

fn move_index(index: &mut usize, len: usize, forward: bool) {
    if len == 0 {
        *index = 0;
        return;
    }
    if forward {
        *index = (*index + 1) % len;
    } else {
        *index = (*index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janken_data::builtin_i18n;

    fn app() -> App {
        let i18n = builtin_i18n().expect("builtin");
        App::bootstrap(i18n, "ja_JP", GameConfig::with_rounds(2), 5).expect("app")
    }

    #[test]
    fn bootstrap_normalizes_locale() {
        let app = app();
        assert_eq!(app.locale, "ja");
        assert_eq!(app.status_line, "準備完了");
    }

    #[test]
    fn submit_without_selection_prompts() {
        let mut app = app();
        app.submit();
        assert_eq!(app.status_line, "手を選んでください");
        assert_eq!(app.engine.rounds_remaining(), 2);
        assert!(app.event_log.is_empty());
    }

    #[test]
    fn controls_lock_after_last_round() {
        let mut app = app();
        app.pick(Hand::Paper);
        app.submit();
        app.submit();
        assert!(!app.controls_enabled());
        assert!(app.summary().is_some());
        app.move_cursor(true);
        assert_eq!(app.hand_cursor, 2);
        app.submit();
        assert_eq!(app.engine.standings().played(), 2);
        assert!(app.status_line.starts_with("ゲーム終了"));

        app.new_game();
        assert!(app.controls_enabled());
        assert_eq!(app.selected, None);
        assert_eq!(app.engine.rounds_remaining(), 2);
    }

    #[test]
    fn cursor_wraps() {
        let mut app = app();
        app.move_cursor(false);
        assert_eq!(app.cursor_hand(), Hand::Paper);
        app.move_cursor(true);
        assert_eq!(app.cursor_hand(), Hand::Rock);
        app.select_cursor();
        assert_eq!(app.selected, Some(Hand::Rock));
    }

    #[test]
    fn cycles_language() {
        let mut app = app();
        app.cycle_locale();
        assert_eq!(app.locale, "ko");
        app.cycle_locale();
        assert_eq!(app.locale, "en");
        assert_eq!(app.t("game.hand.rock"), "Rock");
    }
}
