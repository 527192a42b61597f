pub mod api;
pub mod components;
pub mod config;
pub mod environment;
pub mod hooks;
pub mod pages;
pub mod settings;
pub mod words;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{game::GamePage, lobby::Lobby};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Lobby,
    #[at("/:id")]
    Game { id: String },
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Lobby => html! { <Lobby /> },
        Route::Game { id } => html! { <GamePage game_id={id} /> },
    }
}
