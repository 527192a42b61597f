//! The game view: wires the poller's output into the turn gates, the derived
//! score line, the countdown timer and the environment reconciler, and turns
//! user input into action requests. The server owns all game logic; this
//! page only requests and displays.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use shared::game::{GameState, NextGameRequest, Role};
use shared::rules::{can_end_turn, can_guess, next_game_gate, NextGameGate};

use crate::api::{self, ApiError};
use crate::components::settings_panel::{SettingsButton, SettingsPanel};
use crate::components::timer::Timer;
use crate::environment::{DomEnvironment, SideEffectReconciler};
use crate::hooks::use_game_sync::use_game_sync;
use crate::settings::{GameSettings, Setting};

const ACTION_ERROR_VISIBLE_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Game,
    Settings,
}

#[derive(Properties, PartialEq)]
pub struct GamePageProps {
    pub game_id: String,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let sync = use_game_sync(props.game_id.clone());
    let settings = use_state(GameSettings::load);
    let mode = use_state(|| ViewMode::Game);
    let action_error = use_state(|| None::<String>);
    // Guards against duplicate in-flight mutations (rapid double clicks);
    // the server does not promise idempotency.
    let action_busy = use_state(|| false);
    let reconciler = use_mut_ref(|| SideEffectReconciler::new(DomEnvironment));

    // Favicon follows the turn; the reconciler diffs the relevant fields
    // itself, so feeding it every replaced state is cheap.
    {
        let reconciler = reconciler.clone();
        use_effect_with((*sync.game).clone(), move |game| {
            if let Some(game) = game {
                reconciler.borrow_mut().observe_game(game);
            }
            || ()
        });
    }

    // Dark mode is a document-level signal, not a component class.
    {
        let reconciler = reconciler.clone();
        use_effect_with(settings.dark_mode, move |&dark| {
            reconciler.borrow_mut().observe_dark_mode(dark);
            || ()
        });
    }

    // On teardown the tab icon reverts to neutral no matter what state the
    // game was in.
    {
        let reconciler = reconciler.clone();
        use_effect_with((), move |_| move || reconciler.borrow().teardown());
    }

    // Escape always returns from the settings view.
    {
        let mode = mode.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|e| e.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        mode.set(ViewMode::Game);
                    }
                })
            });
            move || drop(listener)
        });
    }

    // Shared tail for every mutating request: clear the busy flag, publish
    // the fresh state on success, surface a transient banner on failure.
    let apply_action_result = {
        let game = sync.game.clone();
        let action_error = action_error.clone();
        let action_busy = action_busy.clone();
        Rc::new(move |result: Result<GameState, ApiError>| {
            action_busy.set(false);
            match result {
                Ok(state) => {
                    action_error.set(None);
                    game.set(Some(state));
                }
                Err(err) => {
                    log::warn!("action request failed: {:?}", err);
                    let message = err.to_string();
                    action_error.set(Some(message.clone()));
                    let action_error = action_error.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(ACTION_ERROR_VISIBLE_MS).await;
                        if action_error.as_deref() == Some(message.as_str()) {
                            action_error.set(None);
                        }
                    });
                }
            }
        })
    };

    let on_guess = {
        let game = sync.game.clone();
        let role = sync.role.clone();
        let settings = settings.clone();
        let action_busy = action_busy.clone();
        let apply = apply_action_result.clone();
        Callback::from(move |index: usize| {
            let Some(game) = (*game).clone() else { return };
            if *action_busy || !can_guess(&game, *role, index, settings.spymaster_may_guess) {
                return;
            }
            action_busy.set(true);
            let apply = apply.clone();
            spawn_local(async move {
                apply(api::submit_guess(&game.id, index).await);
            });
        })
    };

    // Used by both the end-turn button and timer enforcement; the timer path
    // bypasses the role gate because every client's clock expires at once.
    let end_turn_request = {
        let game = sync.game.clone();
        let action_busy = action_busy.clone();
        let apply = apply_action_result.clone();
        Callback::from(move |_: ()| {
            let Some(game) = (*game).clone() else { return };
            if *action_busy || game.is_over() {
                return;
            }
            action_busy.set(true);
            let apply = apply.clone();
            spawn_local(async move {
                apply(api::end_turn(&game.id, game.round).await);
            });
        })
    };

    let on_end_turn_click = {
        let end_turn_request = end_turn_request.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            end_turn_request.emit(());
        })
    };

    let on_timer_expired = {
        let game = sync.game.clone();
        let end_turn_request = end_turn_request.clone();
        Callback::from(move |_: ()| {
            if let Some(game) = &*game {
                if game.enforce_timer {
                    end_turn_request.emit(());
                }
            }
        })
    };

    let on_next_game = {
        let game = sync.game.clone();
        let role = sync.role.clone();
        let action_busy = action_busy.clone();
        let apply = apply_action_result.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let Some(game) = (*game).clone() else { return };
            if *action_busy {
                return;
            }
            if next_game_gate(&game) == NextGameGate::NeedsConfirmation {
                let confirmed = window()
                    .and_then(|w| {
                        w.confirm_with_message("Do you really want to start a new game?")
                            .ok()
                    })
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
            }
            action_busy.set(true);
            let role = role.clone();
            let apply = apply.clone();
            spawn_local(async move {
                let result = api::next_game(&NextGameRequest {
                    game_id: &game.id,
                    word_set: &game.word_set,
                    create_new: true,
                    timer_duration_ms: game.timer_duration_ms,
                    enforce_timer: None,
                })
                .await;
                if result.is_ok() {
                    role.set(Role::Player);
                }
                apply(result);
            });
        })
    };

    let select_role = {
        let role = sync.role.clone();
        move |selected: Role| {
            let role = role.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                role.set(selected);
            })
        }
    };

    let on_open_settings = {
        let mode = mode.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            mode.set(ViewMode::Settings);
        })
    };

    let on_close_settings = {
        let mode = mode.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            mode.set(ViewMode::Game);
        })
    };

    let on_toggle_setting = {
        let settings = settings.clone();
        Callback::from(move |setting: Setting| {
            let next = settings.toggled(setting);
            next.save();
            settings.set(next);
        })
    };

    let sync_banner = match &*sync.sync_error {
        Some(message) => html! { <div class="warning banner">{ message }</div> },
        None => html! {},
    };

    let game = match &*sync.game {
        Some(game) => game.clone(),
        None => {
            return html! {
                <>
                    { sync_banner }
                    <p class="loading">{"Loading\u{2026}"}</p>
                </>
            };
        }
    };

    if *mode == ViewMode::Settings {
        return html! {
            <SettingsPanel
                values={*settings}
                on_toggle={on_toggle_setting}
                on_close={on_close_settings}
            />
        };
    }

    let role = *sync.role;
    let is_codemaster = role == Role::Codemaster;
    let current_team = game.current_team();
    let other_team = game.starting_team.opposite();

    let (status, status_class) = match game.winning_team {
        Some(winner) => (format!("{} wins!", winner), format!("{} win", winner)),
        None => (
            format!("{}'s turn", current_team),
            format!("{}-turn", current_team),
        ),
    };

    let mut view_classes = classes!(
        "game-view",
        if is_codemaster { "codemaster" } else { "player" }
    );
    if settings.color_blind {
        view_classes.push("color-blind");
    }
    if settings.dark_mode {
        view_classes.push("dark-mode");
    }
    if settings.fullscreen {
        view_classes.push("full-screen");
    }

    let share_link = (!settings.fullscreen)
        .then(|| {
            window().and_then(|w| w.location().href().ok()).map(|href| {
                html! {
                    <div id="share">
                        {"Send this link to friends:\u{a0}"}
                        <a class="url" href={href.clone()}>{ href }</a>
                    </div>
                }
            })
        })
        .flatten()
        .unwrap_or_default();

    let timer = (game.timer_duration_ms > 0).then(|| {
        html! {
            <div id="timer">
                <Timer
                    round_started_at={game.round_started_at.clone()}
                    timer_duration_ms={game.timer_duration_ms}
                    on_expired={on_timer_expired}
                    frozen={game.is_over()}
                />
            </div>
        }
    });

    let end_turn_button = can_end_turn(&game, role).then(|| {
        html! {
            <div id="end-turn-cont">
                <button onclick={on_end_turn_click} id="end-turn-btn" disabled={*action_busy}>
                    { format!("End {}'s turn", current_team) }
                </button>
            </div>
        }
    });

    let action_banner = match &*action_error {
        Some(message) => html! { <div class="warning banner">{ message }</div> },
        None => html! {},
    };

    let cells = game
        .words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let tag = game.layout[index];
            let revealed = game.revealed[index];
            let mut cell_classes = classes!("cell", tag.css_class());
            if is_codemaster && !settings.spymaster_may_guess {
                cell_classes.push("disabled");
            }
            cell_classes.push(if revealed { "revealed" } else { "hidden-word" });
            let onclick = {
                let on_guess = on_guess.clone();
                Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    on_guess.emit(index);
                })
            };
            html! {
                <div key={index} class={cell_classes} {onclick}>
                    <span class="word">{ word }</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div id="game-view" class={view_classes}>
            { sync_banner }
            { action_banner }
            <div id="infoContent">
                { share_link }
                { timer }
            </div>
            <div id="status-line" class={status_class.clone()}>
                <div id="remaining">
                    <span class={format!("{}-remaining", game.starting_team)}>
                        { game.remaining(game.starting_team.into()) }
                    </span>
                    {"\u{a0}\u{2013}\u{a0}"}
                    <span class={format!("{}-remaining", other_team)}>
                        { game.remaining(other_team.into()) }
                    </span>
                </div>
                <div id="status" class="status-text">{ status }</div>
                { end_turn_button }
            </div>
            <div class={classes!("board", status_class)}>
                { cells }
            </div>
            <form id="mode-toggle"
                class={if is_codemaster { "codemaster-selected" } else { "player-selected" }}>
                <SettingsButton onclick={on_open_settings} />
                <button onclick={select_role(Role::Player)} class="player">
                    {"Player"}
                </button>
                <button onclick={select_role(Role::Codemaster)} class="codemaster">
                    {"Spymaster"}
                </button>
                <button onclick={on_next_game} id="next-game-btn" disabled={*action_busy}>
                    {"Next game"}
                </button>
            </form>
        </div>
    }
}
