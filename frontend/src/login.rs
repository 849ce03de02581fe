use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::catalog::{SCHOOL_LOGO_PATH, SCHOOL_NAME};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct LoginGateProps {
    pub error: Option<String>,
    /// Emits `(username, password)`.
    pub on_login: Callback<(String, String)>,
}

#[function_component]
pub fn LoginGate(props: &LoginGateProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };
    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="relative z-10 min-h-screen flex items-center justify-center p-4">
            <div class={combine_classes(panel(true), "w-full max-w-sm")}>
                <div class="text-center mb-6">
                    <img src={SCHOOL_LOGO_PATH} alt="Logo Sekolah" class="h-16 mx-auto mb-3" />
                    <h1 class="text-xl font-bold text-white">{"Portal Ekstrakurikuler"}</h1>
                    <p class="text-sm text-slate-400">{SCHOOL_NAME}</p>
                </div>
                <form {onsubmit} class="space-y-4">
                    <div>
                        <label for="username" class={label(true)}>{"Username"}</label>
                        <input id="username" type="text" required=true autocomplete="username"
                            value={(*username).clone()} oninput={on_username} class={input(true)} />
                    </div>
                    <div>
                        <label for="password" class={label(true)}>{"Password"}</label>
                        <input id="password" type="password" required=true autocomplete="current-password"
                            value={(*password).clone()} oninput={on_password} class={input(true)} />
                    </div>
                    {if let Some(error) = &props.error {
                        html! { <p class={TEXT_ERROR}>{error}</p> }
                    } else { html! {} }}
                    <button type="submit" class={button_primary(true)}>{"Masuk"}</button>
                </form>
            </div>
        </div>
    }
}
