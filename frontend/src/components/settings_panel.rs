use yew::prelude::*;

use crate::settings::{GameSettings, Setting};

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub state: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let class = if props.state { "toggle active" } else { "toggle inactive" };
    html! {
        <div onclick={props.on_toggle.clone()} class={class}>
            <div class="switch"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsButtonProps {
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SettingsButton)]
pub fn settings_button(props: &SettingsButtonProps) -> Html {
    html! {
        <button onclick={props.onclick.clone()} class="settings-button">
            {"Settings"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub values: GameSettings,
    pub on_toggle: Callback<Setting>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    html! {
        <div id="settings" class={if props.values.dark_mode { "dark-mode" } else { "" }}>
            <h2>{"Settings"}</h2>
            {
                for Setting::ALL.iter().map(|&setting| {
                    let on_toggle = {
                        let on_toggle = props.on_toggle.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            on_toggle.emit(setting);
                        })
                    };
                    let state = props.values.get(setting);
                    html! {
                        <div class="toggle-set" key={setting.label()}>
                            <div class="settings-label">
                                { setting.label() }{" "}
                                <span class="toggle-state">
                                    { if state { "ON" } else { "OFF" } }
                                </span>
                                <div class="settings-desc">{ setting.description() }</div>
                            </div>
                            <Toggle state={state} on_toggle={on_toggle} />
                        </div>
                    }
                })
            }
            <button onclick={props.on_close.clone()} class="close-settings">
                {"Back to the game"}
            </button>
        </div>
    }
}
