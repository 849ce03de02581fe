use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

pub const CONTAINER: &str = "container mx-auto px-6";
pub const CONTAINER_NARROW: &str = "max-w-2xl mx-auto";
pub const SECTION: &str = "py-20 relative";

pub const CARD_MEDIA: &str = "rounded-lg shadow-md overflow-hidden group";
pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4 animate-fade-in";

pub const INPUT_BASE: &str = "mt-1 block w-full px-4 py-2 border rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-md font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "text-white bg-blue-600 hover:bg-blue-700";
pub const BUTTON_MUTED: &str = "text-gray-700 bg-gray-300 hover:bg-gray-400";
pub const BUTTON_FULL: &str = "w-full py-3 px-6 rounded-lg transform hover:scale-105 shadow-md";
pub const BUTTON_PILL: &str = "bg-blue-600 text-white font-bold py-3 px-8 rounded-full hover:bg-blue-700 transition-transform duration-300 transform hover:scale-105 inline-block";

pub const TEXT_LABEL: &str = "block text-sm font-medium mb-1";
pub const TEXT_ERROR: &str = "text-sm text-red-500 font-semibold";
pub const HEADING_SECTION: &str = "text-3xl font-bold text-center mb-4";
pub const HEADING_HERO: &str = "text-4xl md:text-6xl font-bold text-white leading-tight mb-4";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(BUTTON_BASE, &combine_classes(BUTTON_PRIMARY, BUTTON_FULL))
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes("p-3 rounded-md text-sm", "bg-red-500/90 text-white"),
        "success" => combine_classes("p-3 rounded-md text-sm", "bg-green-500/90 text-white"),
        _ => combine_classes("p-3 rounded-md text-sm", "bg-blue-500/90 text-white"),
    }
}

pub fn page(dark: bool) -> &'static str {
    if dark { "bg-slate-950 text-slate-100 min-h-screen" } else { "bg-slate-100 text-slate-800 min-h-screen" }
}

/// Alternating section backgrounds; translucent in dark mode so the scene shows through.
pub fn section(dark: bool, alternate: bool) -> String {
    let bg = match (dark, alternate) {
        (true, false) => "bg-slate-900/70",
        (true, true) => "bg-slate-950/60",
        (false, false) => "bg-white",
        (false, true) => "bg-slate-100",
    };
    combine_classes(SECTION, bg)
}

pub fn card(dark: bool) -> String {
    if dark {
        combine_classes(CARD_MEDIA, "bg-slate-800/80 border border-slate-700")
    } else {
        combine_classes(CARD_MEDIA, "bg-white")
    }
}

pub fn panel(dark: bool) -> &'static str {
    if dark {
        "bg-slate-800/80 border border-slate-700 p-8 rounded-xl shadow-lg"
    } else {
        "bg-slate-50 p-8 rounded-xl shadow-lg"
    }
}

pub fn input(dark: bool) -> String {
    if dark {
        combine_classes(INPUT_BASE, "bg-slate-900 border-slate-600 text-white")
    } else {
        combine_classes(INPUT_BASE, "bg-white border-gray-300")
    }
}

pub fn label(dark: bool) -> String {
    combine_classes(TEXT_LABEL, if dark { "text-slate-300" } else { "text-gray-700" })
}

pub fn muted(dark: bool) -> &'static str {
    if dark { "text-slate-400" } else { "text-slate-600" }
}

#[function_component]
pub fn GlobalStyles() -> Html {
    html! {
        <Global css={css!(r#"
            html { scroll-behavior: smooth; }
            .reveal {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.7s ease-out, transform 0.7s ease-out;
            }
            .reveal.visible {
                opacity: 1;
                transform: none;
            }
            @keyframes fadeIn {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .animate-fade-in {
                animation: fadeIn 0.3s ease-out;
            }
        "#)} />
    }
}
