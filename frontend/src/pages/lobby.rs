//! Pre-game lobby: pick a game identifier, choose word sets, optionally set a
//! round timer, then create or join the game and navigate to its board.

use rand::seq::SliceRandom;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use shared::game::NextGameRequest;
use shared::wordset::{self, MIN_WORDS};

use crate::api;
use crate::components::wordset_toggle::WordSetToggle;
use crate::words::{CUSTOM_SET_NAME, DEFAULT_WORD_SETS};
use crate::Route;

const ID_ADJECTIVES: &[&str] = &[
    "amber", "bold", "calm", "deep", "eager", "fuzzy", "grand", "happy",
    "keen", "lively", "mellow", "noble", "proud", "quiet", "rapid", "sunny",
    "tidy", "vivid", "warm", "zesty",
];

const ID_ANIMALS: &[&str] = &[
    "badger", "crane", "dolphin", "falcon", "gecko", "heron", "ibex",
    "jaguar", "koala", "lemur", "marmot", "narwhal", "otter", "panther",
    "quail", "raven", "seal", "tapir", "walrus", "yak",
];

fn random_game_id() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ID_ADJECTIVES.choose(&mut rng).copied().unwrap_or("brave");
    let animal = ID_ANIMALS.choose(&mut rng).copied().unwrap_or("otter");
    format!("{}-{}", adjective, animal)
}

fn selected_words(selected: &[String], custom_words: &[String]) -> Vec<String> {
    let mut sets: Vec<Vec<String>> = Vec::new();
    for (name, words) in DEFAULT_WORD_SETS {
        if selected.iter().any(|s| s == name) {
            sets.push(words.iter().map(|w| w.to_string()).collect());
        }
    }
    if selected.iter().any(|s| s == CUSTOM_SET_NAME) {
        sets.push(custom_words.to_vec());
    }
    wordset::combine(&sets)
}

#[function_component(Lobby)]
pub fn lobby() -> Html {
    let navigator = use_navigator();
    let game_name = use_state(random_game_id);
    let selected = use_state(|| vec![DEFAULT_WORD_SETS[0].0.to_string()]);
    let custom_text = use_state(String::new);
    let warning = use_state(|| None::<String>);
    let timer_minutes = use_state(|| 0u64);
    let timer_seconds = use_state(|| 0u64);
    let enforce_timer = use_state(|| false);
    let submitting = use_state(|| false);

    let custom_words = wordset::parse_custom_words(&custom_text);
    let word_count = selected_words(&selected, &custom_words).len();

    // The warning clears itself as soon as the selection is large enough
    // again.
    {
        let warning = warning.clone();
        use_effect_with(word_count, move |&count| {
            if count >= MIN_WORDS {
                warning.set(None);
            }
            || ()
        });
    }

    let on_name_input = {
        let game_name = game_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                game_name.set(input.value());
            }
        })
    };

    let on_custom_input = {
        let custom_text = custom_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                custom_text.set(area.value());
            }
        })
    };

    let toggle_set = {
        let selected = selected.clone();
        move |name: String| {
            let selected = selected.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                let mut next = (*selected).clone();
                match next.iter().position(|s| s == &name) {
                    Some(index) => {
                        next.remove(index);
                    }
                    None => next.push(name.clone()),
                }
                selected.set(next);
            })
        }
    };

    let on_minutes_input = {
        let timer_minutes = timer_minutes.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                timer_minutes.set(input.value().parse().unwrap_or(0));
            }
        })
    };

    let on_seconds_input = {
        let timer_seconds = timer_seconds.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                timer_seconds.set(input.value().parse().unwrap_or(0));
            }
        })
    };

    let on_toggle_enforce = {
        let enforce_timer = enforce_timer.clone();
        Callback::from(move |_: MouseEvent| {
            enforce_timer.set(!*enforce_timer);
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let game_name = game_name.clone();
        let selected = selected.clone();
        let custom_text = custom_text.clone();
        let warning = warning.clone();
        let timer_minutes = timer_minutes.clone();
        let timer_seconds = timer_seconds.clone();
        let enforce_timer = enforce_timer.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let name = (*game_name).trim().to_string();
            if name.is_empty() || *submitting {
                return;
            }

            let custom_words = wordset::parse_custom_words(&custom_text);
            let combined = selected_words(&selected, &custom_words);
            if let Err(err) = wordset::validate_selection(&combined) {
                warning.set(Some(err.to_string()));
                return;
            }

            let duration_ms = *timer_minutes * 60_000 + *timer_seconds * 1000;
            let enforce = duration_ms > 0 && *enforce_timer;

            submitting.set(true);
            let navigator = navigator.clone();
            let warning = warning.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let result = api::next_game(&NextGameRequest {
                    game_id: &name,
                    word_set: &combined,
                    create_new: false,
                    timer_duration_ms: duration_ms,
                    enforce_timer: Some(enforce),
                })
                .await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Game { id: name });
                        }
                    }
                    Err(err) => {
                        log::warn!("failed to create game {}: {:?}", name, err);
                        warning.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let custom_selected = selected.iter().any(|s| s == CUSTOM_SET_NAME);

    html! {
        <div id="lobby">
            <form id="new-game">
                <p class="intro">
                    {"Play a word-guessing game online across multiple devices on a \
                      shared board. To create a new game or join an existing game, \
                      enter a game identifier and click 'GO'."}
                </p>
                <input
                    type="text"
                    id="game-name"
                    value={(*game_name).clone()}
                    oninput={on_name_input}
                />
                <button disabled={game_name.is_empty() || *submitting} onclick={on_submit}>
                    {"Go"}
                </button>
                {
                    match &*warning {
                        Some(message) => html! { <div class="warning">{ message }</div> },
                        None => html! {},
                    }
                }
                <div id="timer-settings">
                    <label>{"Round timer (optional)"}</label>
                    <input type="number" min="0" value={timer_minutes.to_string()}
                        oninput={on_minutes_input} />
                    {"m"}
                    <input type="number" min="0" max="59" value={timer_seconds.to_string()}
                        oninput={on_seconds_input} />
                    {"s"}
                    <label class={if *enforce_timer { "enforce selected" } else { "enforce" }}
                        onclick={on_toggle_enforce}>
                        {"End the turn when the timer runs out"}
                    </label>
                </div>
                <div id="new-game-options">
                    <div id="wordsets">
                        <p class="instruction">
                            {"You've selected "}<strong>{ word_count }</strong>{" words."}
                        </p>
                        <div id="default-wordsets">
                            {
                                for DEFAULT_WORD_SETS.iter().map(|(name, words)| {
                                    html! {
                                        <WordSetToggle
                                            key={*name}
                                            label={name.to_string()}
                                            word_count={words.len()}
                                            selected={selected.iter().any(|s| s == name)}
                                            on_toggle={toggle_set(name.to_string())}
                                        />
                                    }
                                })
                            }
                        </div>
                        <div id="custom-words">
                            <WordSetToggle
                                label={CUSTOM_SET_NAME.to_string()}
                                word_count={custom_words.len()}
                                selected={custom_selected}
                                on_toggle={toggle_set(CUSTOM_SET_NAME.to_string())}
                            />
                            <textarea
                                placeholder={"Comma-separated custom words"}
                                value={(*custom_text).clone()}
                                oninput={on_custom_input}
                            />
                        </div>
                    </div>
                </div>
            </form>
        </div>
    }
}
