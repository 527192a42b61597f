//! Polling loop that keeps the local game state in step with the server.
//!
//! Exactly one request is in flight per poller: the next poll is scheduled a
//! fixed delay after the previous response has been processed, never from
//! dispatch, so slow links can stretch the cadence but requests never
//! overlap. Cancellation is cooperative: the liveness flag flips on teardown
//! and is re-checked after every await, so a response that lands afterwards
//! is consumed and discarded rather than acted upon.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::game::{GameState, Role};

use crate::api;

pub const POLL_INTERVAL_MS: u32 = 2000;
pub const MAX_POLL_BACKOFF_MS: u32 = 30_000;

/// Delay before the next poll, measured from completion of the previous one.
/// Consecutive failures back off exponentially up to the cap; a success
/// resets the schedule.
pub fn next_poll_delay(consecutive_failures: u32) -> u32 {
    POLL_INTERVAL_MS
        .saturating_mul(1u32 << consecutive_failures.min(5))
        .min(MAX_POLL_BACKOFF_MS)
}

#[derive(Clone, PartialEq)]
pub struct GameSync {
    /// Authoritative local copy of the server state. Action responses replace
    /// it too; the poller reconciles on its next cycle either way.
    pub game: UseStateHandle<Option<GameState>>,
    pub role: UseStateHandle<Role>,
    /// Non-blocking banner text while the poll loop is failing.
    pub sync_error: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_game_sync(game_id: String) -> GameSync {
    let game = use_state(|| None::<GameState>);
    // _eq variants: the loop republishes these every cycle and an unchanged
    // value must not re-render the whole board.
    let role = use_state_eq(|| Role::Player);
    let sync_error = use_state_eq(|| None::<String>);

    {
        let game = game.clone();
        let role = role.clone();
        let sync_error = sync_error.clone();

        use_effect_with(game_id, move |game_id| {
            let live = Rc::new(Cell::new(true));
            let game_id = game_id.clone();

            {
                let live = live.clone();
                spawn_local(async move {
                    // The loop tracks the change token and instance marker
                    // itself; the state handle inside this closure only ever
                    // sees the value from the render that spawned it.
                    let mut last_state_id = String::new();
                    let mut last_created_at: Option<String> = None;
                    let mut failures: u32 = 0;

                    loop {
                        if !live.get() {
                            break;
                        }

                        let result = api::fetch_game_state(&game_id, &last_state_id).await;

                        // The view may have gone away while the request was in
                        // flight; drop the response without acting on it.
                        if !live.get() {
                            break;
                        }

                        match result {
                            Ok(next) => {
                                if failures > 0 {
                                    log::debug!("poll for {} recovered", game_id);
                                }
                                failures = 0;
                                sync_error.set(None);

                                // A new created_at marks a replaced game
                                // instance; a codemaster role must not carry
                                // over into it.
                                let new_instance = last_created_at
                                    .as_deref()
                                    .is_some_and(|prev| prev != next.created_at);
                                if new_instance {
                                    role.set(Role::Player);
                                }

                                if next.state_id != last_state_id {
                                    last_state_id = next.state_id.clone();
                                    last_created_at = Some(next.created_at.clone());
                                    game.set(Some(next));
                                }
                            }
                            Err(err) => {
                                failures += 1;
                                log::warn!(
                                    "poll for {} failed ({} consecutive): {:?}",
                                    game_id,
                                    failures,
                                    err
                                );
                                sync_error.set(Some(format!("{} Retrying\u{2026}", err)));
                            }
                        }

                        TimeoutFuture::new(next_poll_delay(failures)).await;
                    }
                });
            }

            move || live.set(false)
        });
    }

    GameSync {
        game,
        role,
        sync_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_delay_starts_at_the_base_interval() {
        assert_eq!(next_poll_delay(0), 2000);
    }

    #[test]
    fn poll_delay_doubles_per_failure_up_to_the_cap() {
        assert_eq!(next_poll_delay(1), 4000);
        assert_eq!(next_poll_delay(2), 8000);
        assert_eq!(next_poll_delay(3), 16_000);
        assert_eq!(next_poll_delay(4), 30_000);
        assert_eq!(next_poll_delay(50), 30_000);
    }
}
