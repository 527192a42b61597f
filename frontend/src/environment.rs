//! Environment signals that live outside the component tree: the tab favicon
//! that tracks whose turn it is, and the document-level dark-mode class. The
//! game view only talks to [`EnvironmentPort`]; the DOM implementation is one
//! of several, which keeps the reconciler testable without a browser.

use shared::game::{GameState, Team};
use web_sys::window;

pub const NEUTRAL_FAVICON: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAACXBIWXMAAAsTAAALEwEAmpwYAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAA8SURBVHgB7dHBDQAgCAPA1oVkBWdzPR84kW4AD0LCg36bXJqUcLL2eVY/EEwDFQBeEfPnqUpkLmigAvABK38Grs5TfaMAAAAASUVORK5CYII=";
pub const BLUE_TURN_FAVICON: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAACXBIWXMAAAsTAAALEwEAmpwYAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAmSURBVHgB7cxBAQAABATBo5ls6ulEiPt47ASYqJ6VIWUiICD4Ehyi7wKv/xtOewAAAABJRU5ErkJggg==";
pub const RED_TURN_FAVICON: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAACXBIWXMAAAsTAAALEwEAmpwYAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAmSURBVHgB7cwxAQAACMOwgaL5d4EiELGHoxGQGnsVaIUICAi+BAci2gJQFUhklQAAAABJRU5ErkJggg==";

pub trait EnvironmentPort {
    /// `None` means the neutral default icon.
    fn set_turn_indicator(&self, team: Option<Team>);
    fn set_appearance_flag(&self, enabled: bool);
}

/// Production port. Missing DOM nodes degrade to no-ops.
pub struct DomEnvironment;

impl EnvironmentPort for DomEnvironment {
    fn set_turn_indicator(&self, team: Option<Team>) {
        let href = match team {
            Some(Team::Blue) => BLUE_TURN_FAVICON,
            Some(Team::Red) => RED_TURN_FAVICON,
            None => NEUTRAL_FAVICON,
        };
        if let Some(icon) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("favicon"))
        {
            let _ = icon.set_attribute("href", href);
        }
    }

    fn set_appearance_flag(&self, enabled: bool) {
        // Document scope on purpose: dark mode must restyle chrome outside
        // the game view's own subtree.
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            let result = if enabled {
                class_list.add_1("dark-mode")
            } else {
                class_list.remove_1("dark-mode")
            };
            let _ = result;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TurnKey {
    winning_team: Option<Team>,
    round: u32,
    state_id: String,
}

/// Diffs successive states and touches the environment only when one of the
/// fields it cares about actually changed.
pub struct SideEffectReconciler<E: EnvironmentPort> {
    env: E,
    last_turn: Option<TurnKey>,
    last_dark: Option<bool>,
}

impl<E: EnvironmentPort> SideEffectReconciler<E> {
    pub fn new(env: E) -> SideEffectReconciler<E> {
        SideEffectReconciler {
            env,
            last_turn: None,
            last_dark: None,
        }
    }

    pub fn observe_game(&mut self, state: &GameState) {
        let key = TurnKey {
            winning_team: state.winning_team,
            round: state.round,
            state_id: state.state_id.clone(),
        };
        if self.last_turn.as_ref() == Some(&key) {
            return;
        }
        if state.is_over() {
            self.env.set_turn_indicator(None);
        } else {
            self.env.set_turn_indicator(Some(state.current_team()));
        }
        self.last_turn = Some(key);
    }

    pub fn observe_dark_mode(&mut self, enabled: bool) {
        if self.last_dark == Some(enabled) {
            return;
        }
        self.env.set_appearance_flag(enabled);
        self.last_dark = Some(enabled);
    }

    /// Restore the neutral icon; called unconditionally when the view goes
    /// away.
    pub fn teardown(&self) {
        self.env.set_turn_indicator(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::game::CellTag;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Indicator(Option<Team>),
        Appearance(bool),
    }

    #[derive(Clone, Default)]
    struct RecordingEnvironment {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl EnvironmentPort for RecordingEnvironment {
        fn set_turn_indicator(&self, team: Option<Team>) {
            self.calls.borrow_mut().push(Call::Indicator(team));
        }

        fn set_appearance_flag(&self, enabled: bool) {
            self.calls.borrow_mut().push(Call::Appearance(enabled));
        }
    }

    fn game() -> GameState {
        GameState {
            id: "g".to_string(),
            round: 0,
            starting_team: Team::Red,
            winning_team: None,
            layout: vec![CellTag::Red],
            revealed: vec![false],
            words: vec!["A".into()],
            state_id: "s1".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            round_started_at: String::new(),
            timer_duration_ms: 0,
            enforce_timer: false,
            word_set: vec![],
        }
    }

    fn harness() -> (SideEffectReconciler<RecordingEnvironment>, Rc<RefCell<Vec<Call>>>) {
        let env = RecordingEnvironment::default();
        let calls = env.calls.clone();
        (SideEffectReconciler::new(env), calls)
    }

    #[test]
    fn unchanged_state_is_a_noop() {
        let (mut reconciler, calls) = harness();
        let game = game();
        reconciler.observe_game(&game);
        reconciler.observe_game(&game);
        reconciler.observe_game(&game);
        assert_eq!(&*calls.borrow(), &[Call::Indicator(Some(Team::Red))]);
    }

    #[test]
    fn round_change_flips_the_indicator() {
        let (mut reconciler, calls) = harness();
        let mut game = game();
        reconciler.observe_game(&game);
        game.round = 1;
        game.state_id = "s2".to_string();
        reconciler.observe_game(&game);
        assert_eq!(
            &*calls.borrow(),
            &[
                Call::Indicator(Some(Team::Red)),
                Call::Indicator(Some(Team::Blue)),
            ]
        );
    }

    #[test]
    fn winner_resets_to_the_neutral_icon() {
        let (mut reconciler, calls) = harness();
        let mut game = game();
        reconciler.observe_game(&game);
        game.winning_team = Some(Team::Red);
        game.state_id = "s2".to_string();
        reconciler.observe_game(&game);
        assert_eq!(calls.borrow().last(), Some(&Call::Indicator(None)));
    }

    #[test]
    fn state_id_change_alone_reapplies_the_indicator() {
        let (mut reconciler, calls) = harness();
        let mut game = game();
        reconciler.observe_game(&game);
        game.state_id = "s2".to_string();
        reconciler.observe_game(&game);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn dark_mode_acts_only_on_change() {
        let (mut reconciler, calls) = harness();
        reconciler.observe_dark_mode(true);
        reconciler.observe_dark_mode(true);
        reconciler.observe_dark_mode(false);
        assert_eq!(
            &*calls.borrow(),
            &[Call::Appearance(true), Call::Appearance(false)]
        );
    }

    #[test]
    fn teardown_restores_neutral_unconditionally() {
        let (mut reconciler, calls) = harness();
        let game = game();
        reconciler.observe_game(&game);
        reconciler.teardown();
        assert_eq!(calls.borrow().last(), Some(&Call::Indicator(None)));
    }
}
