use yew::prelude::*;
use yew_router::prelude::*;
use shared::catalog::{SCHOOL_LOGO_PATH, SCHOOL_SHORT_NAME};
use shared::Variant;
use crate::Route;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#gallery", "Galeri Ekstra"),
    ("#announcements", "Pengumuman"),
    ("#register", "Pendaftaran"),
];

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub variant: Variant,
    pub dark: bool,
    pub scrolled: bool,
    pub on_toggle_theme: Callback<()>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component]
pub fn Navigation(props: &NavigationProps) -> Html {
    let solid = match (props.scrolled, props.dark) {
        (false, _) => "",
        (true, false) => "bg-blue-800 backdrop-blur-md shadow-lg",
        (true, true) => "bg-slate-900/90 backdrop-blur-md shadow-lg border-b border-slate-700",
    };

    let toggle = props.on_toggle_theme.reform(|_: MouseEvent| ());
    let other_variant = match props.variant {
        Variant::Plain => html! {
            <Link<Route> to={Route::Showcase} classes="text-gray-300 hover:text-white font-medium px-3 py-2">{"3D"}</Link<Route>>
        },
        Variant::Showcase => html! {
            <Link<Route> to={Route::Home} classes="text-gray-300 hover:text-white font-medium px-3 py-2">{"Klasik"}</Link<Route>>
        },
    };

    html! {
        <header class={classes!("fixed", "top-0", "left-0", "right-0", "z-40", "transition-all", "duration-300", solid)}>
            <nav class="container mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center space-x-3">
                    <img src={SCHOOL_LOGO_PATH} alt="Logo Sekolah" class="h-10" />
                    <span class="text-xl font-bold text-white tracking-wider">{SCHOOL_SHORT_NAME}</span>
                </div>
                <div class="flex items-center space-x-2">
                    <div class="hidden md:flex items-center space-x-2">
                        {for NAV_LINKS.iter().map(|(href, text)| html! {
                            <a href={*href} class="text-gray-300 hover:text-white transition-colors duration-300 font-medium px-3 py-2 rounded-md">
                                {*text}
                            </a>
                        })}
                    </div>
                    {other_variant}
                    <button
                        type="button"
                        onclick={toggle}
                        title="Ganti tema"
                        class="text-gray-200 hover:text-white px-3 py-2 rounded-md border border-white/20"
                    >
                        {if props.dark { "☀" } else { "☾" }}
                    </button>
                    {if let Some(on_logout) = &props.on_logout {
                        html! {
                            <button
                                type="button"
                                onclick={on_logout.reform(|_: MouseEvent| ())}
                                class="text-gray-200 hover:text-white px-3 py-2 rounded-md"
                            >
                                {"Keluar"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
            </nav>
        </header>
    }
}
