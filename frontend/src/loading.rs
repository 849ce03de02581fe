use gloo_timers::callback::Timeout;
use yew::prelude::*;
use shared::catalog::{SCHOOL_LOGO_PATH, SCHOOL_SHORT_NAME};
use crate::config::CONFIG;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_finished: Callback<()>,
}

#[function_component]
pub fn LoadingScreen(props: &LoadingScreenProps) -> Html {
    use_effect_with_deps({
        let on_finished = props.on_finished.clone();
        move |_| {
            let timeout = Timeout::new(CONFIG.loading_delay_ms, move || on_finished.emit(()));
            move || drop(timeout)
        }
    }, ());

    html! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-slate-950 text-slate-100">
            <img src={SCHOOL_LOGO_PATH} alt="Logo Sekolah" class="h-20 mb-6 animate-pulse" />
            <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin"></div>
            <p class="mt-6 text-sm tracking-widest uppercase text-slate-400">{format!("Memuat {}...", SCHOOL_SHORT_NAME)}</p>
        </div>
    }
}
