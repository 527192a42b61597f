//! Live round clock. The heavy lifting (wall-clock recompute, the fire-once
//! expiration latch, freezing) lives in `shared::countdown`; this component
//! just feeds it a 1-second interval and the effective end time.

use gloo_timers::callback::Interval;
use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use shared::countdown::{CountdownClock, TimeRemaining, Urgency, GRACE_MS};

#[derive(Properties, PartialEq)]
pub struct TimerProps {
    /// RFC 3339 timestamp stamped by the server when the round began.
    pub round_started_at: String,
    pub timer_duration_ms: u64,
    pub on_expired: Callback<()>,
    /// Set once the game has a winner: holds the display steady without
    /// ticking.
    #[prop_or(false)]
    pub frozen: bool,
}

fn effective_end_ms(round_started_at: &str, timer_duration_ms: u64) -> f64 {
    let started = Date::new(&JsValue::from_str(round_started_at)).get_time();
    started + timer_duration_ms as f64 + GRACE_MS
}

#[function_component(Timer)]
pub fn timer(props: &TimerProps) -> Html {
    let display = use_state(|| None::<TimeRemaining>);
    let clock = use_mut_ref(CountdownClock::new);

    let end_ms = effective_end_ms(&props.round_started_at, props.timer_duration_ms);

    {
        let display = display.clone();
        let clock = clock.clone();
        let on_expired = props.on_expired.clone();

        // Keyed on the end time (by bits, f64 is not Eq) and the freeze flag:
        // any change cancels the old tick chain before a new one starts, so
        // two chains can never coexist.
        use_effect_with((end_ms.to_bits(), props.frozen), move |&(end_bits, frozen)| {
            {
                let mut clock = clock.borrow_mut();
                clock.retarget(f64::from_bits(end_bits));
                if frozen {
                    clock.freeze();
                } else {
                    clock.thaw();
                }
            }

            let tick = {
                let clock = clock.clone();
                let display = display.clone();
                move || {
                    let mut clock = clock.borrow_mut();
                    display.set(clock.tick(Date::now()));
                    if clock.take_expiration() {
                        on_expired.emit(());
                    }
                }
            };

            tick();
            let interval = (!frozen).then(|| Interval::new(1000, tick));

            move || drop(interval)
        });
    }

    match *display {
        Some(remaining) => {
            let class = match remaining.urgency() {
                Urgency::Critical => "timer critical",
                Urgency::Low => "timer low",
                Urgency::Normal => "timer",
            };
            html! { <span class={class}>{ remaining.to_string() }</span> }
        }
        None => html! {},
    }
}
