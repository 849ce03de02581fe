use yew::prelude::*;
use shared::catalog::ANNOUNCEMENTS;
use shared::Announcement;
use crate::{reveal::Reveal, styles::*};

#[derive(Properties, PartialEq)]
pub struct AnnouncementCardProps {
    pub announcement: &'static Announcement,
    pub dark: bool,
    pub on_open: Callback<String>,
}

#[function_component]
pub fn AnnouncementCard(props: &AnnouncementCardProps) -> Html {
    let announcement = props.announcement;
    let onclick = {
        let url = announcement.sheet_url.to_string();
        props.on_open.reform(move |_: MouseEvent| url.clone())
    };
    let surface = if props.dark { "bg-slate-800/80" } else { "bg-white" };

    html! {
        <div class={classes!(surface, "p-5", "rounded-lg", "shadow-sm", "border-l-4",
            announcement.accent.border_class(), "flex", "items-start", "space-x-4")}>
            <div class="flex-shrink-0">
                <svg class="w-6 h-6 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={announcement.icon}></path>
                </svg>
            </div>
            <div class="flex-grow">
                <h3 class={classes!("font-semibold", if props.dark { "text-slate-100" } else { "text-gray-800" })}>
                    {announcement.title}
                </h3>
                <p class={classes!("text-sm", "mb-3", muted(props.dark))}>{announcement.description}</p>
                <button type="button" {onclick}
                    class="bg-blue-600 text-white text-sm font-semibold py-1 px-4 rounded-md hover:bg-blue-700 transition-colors">
                    {"Klik Disini"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnnouncementListProps {
    pub dark: bool,
    pub on_open: Callback<String>,
}

#[function_component]
pub fn AnnouncementList(props: &AnnouncementListProps) -> Html {
    html! {
        <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6">
            {for ANNOUNCEMENTS.iter().map(|announcement| html! {
                <Reveal key={announcement.id}>
                    <AnnouncementCard {announcement} dark={props.dark} on_open={props.on_open.clone()} />
                </Reveal>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnnouncementModalProps {
    pub url: AttrValue,
    pub on_close: Callback<()>,
}

/// Shows the linked sheet in a frame; clicking outside the panel closes it.
#[function_component]
pub fn AnnouncementModal(props: &AnnouncementModalProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={MODAL_BACKDROP} onclick={close.clone()}>
            <div class="bg-white text-slate-800 rounded-lg shadow-2xl w-full max-w-4xl h-[80vh] flex flex-col" onclick={keep_open}>
                <div class="p-4 border-b flex justify-between items-center">
                    <h3 class="font-semibold">{"Detail Pengumuman"}</h3>
                    <button type="button" onclick={close} class="text-gray-500 hover:text-gray-800 text-2xl leading-none">
                        {"×"}
                    </button>
                </div>
                <div class="flex-grow p-2">
                    <iframe src={props.url.clone()} class="w-full h-full border-0" title="Pengumuman"></iframe>
                </div>
            </div>
        </div>
    }
}
