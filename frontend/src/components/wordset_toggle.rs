use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WordSetToggleProps {
    pub label: String,
    pub word_count: usize,
    pub selected: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(WordSetToggle)]
pub fn wordset_toggle(props: &WordSetToggleProps) -> Html {
    let class = if props.selected {
        "btn-wordsettoggle selected"
    } else {
        "btn-wordsettoggle"
    };
    html! {
        <div class={class} onclick={props.on_toggle.clone()}
            title={format!("{} words", props.word_count)}>
            { &props.label }
        </div>
    }
}
