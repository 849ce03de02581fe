use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod reveal;
mod header;
mod gallery;
mod announcements;
mod registration_form;
mod proof_modal;
mod export;
mod particles;
mod loading;
mod login;
mod portal;

use crate::portal::Portal;
use shared::Variant;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/3d")] Showcase,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering plain portal");
            html! { <Portal key="plain" variant={Variant::Plain} /> }
        }
        Route::Showcase => {
            info!("Rendering 3D portal");
            html! { <Portal key="showcase" variant={Variant::Showcase} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    yew::Renderer::<App>::new().render();
}
