use std::rc::Rc;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use shared::catalog::{SCHOOL_ADDRESS, SCHOOL_NAME};
use shared::{PageAction, PageModel, RegistrationRecord, Variant};
use crate::{
    announcements::{AnnouncementList, AnnouncementModal},
    config::CONFIG,
    gallery::{ActivityCarousel, ActivityGrid},
    header::Navigation,
    loading::LoadingScreen,
    login::LoginGate,
    particles::ParticleBackground,
    proof_modal::RegistrationProofModal,
    registration_form::RegistrationForm,
    reveal::Reveal,
    styles::*,
};

#[derive(Clone, PartialEq)]
pub struct PageState(PageModel);

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(PageState(next))
        }
    }
}

#[hook]
fn use_window_scroll(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with_deps(move |_| {
        let listener = web_sys::window().map(|window| {
            let target = window.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let y = target.scroll_y().unwrap_or(0.0);
                dispatcher.dispatch(PageAction::Scrolled(y));
            });
            let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            (window, closure)
        });

        move || {
            if let Some((window, closure)) = listener {
                let _ = window.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }
    }, ());
}

#[derive(Properties, PartialEq)]
pub struct PortalProps {
    pub variant: Variant,
}

#[function_component]
pub fn Portal(props: &PortalProps) -> Html {
    let variant = props.variant;
    let state = use_reducer(|| PageState(PageModel::for_variant(variant)));
    use_window_scroll(state.dispatcher());

    let page = &state.0;
    let dark = page.dark;

    let on_loaded = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::LoadingFinished))
    };
    let on_login = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(username, password): (String, String)| {
            dispatcher.dispatch(PageAction::Login { username, password })
        })
    };
    let on_toggle_theme = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleTheme))
    };
    let on_logout = (variant == Variant::Showcase).then(|| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::Logout))
    });
    let on_submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |record: RegistrationRecord| dispatcher.dispatch(PageAction::Submit(record)))
    };
    let on_close_proof = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::CloseProof))
    };
    let on_open_announcement = {
        let dispatcher = state.dispatcher();
        Callback::from(move |url: String| {
            info!("opening announcement {}", url);
            dispatcher.dispatch(PageAction::OpenAnnouncement(url))
        })
    };
    let on_close_announcement = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::CloseAnnouncement))
    };

    let backdrop = if variant == Variant::Showcase && dark {
        html! { <ParticleBackground /> }
    } else {
        html! {}
    };

    if page.loading {
        return html! {
            <>
                <GlobalStyles />
                <LoadingScreen on_finished={on_loaded} />
            </>
        };
    }

    if !page.unlocked {
        return html! {
            <div class={page_class(true)}>
                <GlobalStyles />
                <ParticleBackground />
                <LoginGate error={page.login_error.clone()} {on_login} />
            </div>
        };
    }

    let gallery = match variant {
        Variant::Plain => html! { <ActivityGrid {dark} /> },
        Variant::Showcase => html! { <ActivityCarousel {dark} /> },
    };

    html! {
        <div class={page_class(dark)}>
            <GlobalStyles />
            {backdrop}
            <Navigation {variant} {dark} scrolled={page.header_scrolled} {on_toggle_theme} {on_logout} />

            <main class="relative z-10">
                <section id="home" class="min-h-screen flex items-center bg-cover bg-center bg-fixed relative"
                    style={format!("background-image: url({})", CONFIG.hero_image)}>
                    <div class={classes!("absolute", "inset-0", if variant == Variant::Showcase { "bg-black/70" } else { "bg-black/50" })}></div>
                    <div class="container mx-auto px-6 text-center relative">
                        <Reveal>
                            <h1 class={HEADING_HERO}>{"Portal Ekstrakurikuler"}</h1>
                            <p class="text-lg md:text-xl text-gray-200 mb-8">
                                {"Temukan Bakatmu, Kembangkan Potensimu di SMKN 9 Semarang."}
                            </p>
                            <a href="#register" class={BUTTON_PILL}>{"Daftar Sekarang"}</a>
                        </Reveal>
                    </div>
                </section>

                <section id="gallery" class={section(dark, false)}>
                    <div class={CONTAINER}>
                        <Reveal>
                            <h2 class={HEADING_SECTION}>{"Galeri Ekstrakurikuler"}</h2>
                            <p class={classes!("text-center", "max-w-2xl", "mx-auto", "mb-12", muted(dark))}>
                                {"Lihat berbagai pilihan kegiatan untuk menyalurkan minat dan bakatmu."}
                            </p>
                        </Reveal>
                        {gallery}
                    </div>
                </section>

                <section id="announcements" class={section(dark, true)}>
                    <div class={CONTAINER}>
                        <Reveal>
                            <h2 class={HEADING_SECTION}>{"Pengumuman"}</h2>
                            <p class={classes!("text-center", "max-w-2xl", "mx-auto", "mb-12", muted(dark))}>
                                {"Informasi terbaru seputar seleksi dan kegiatan ekstrakurikuler."}
                            </p>
                        </Reveal>
                        <AnnouncementList {dark} on_open={on_open_announcement} />
                    </div>
                </section>

                <section id="register" class={section(dark, false)}>
                    <RegistrationForm {dark} {on_submit} />
                </section>
            </main>

            {if let Some(record) = page.proof() {
                html! { <RegistrationProofModal record={record.clone()} on_close={on_close_proof} /> }
            } else { html! {} }}
            {if let Some(url) = &page.announcement_url {
                html! { <AnnouncementModal url={url.clone()} on_close={on_close_announcement} /> }
            } else { html! {} }}

            <Footer {dark} />
        </div>
    }
}

fn page_class(dark: bool) -> Classes {
    classes!(page(dark), "relative")
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    dark: bool,
}

#[function_component]
fn Footer(props: &FooterProps) -> Html {
    let year = CONFIG.local_now().year();
    let bg = if props.dark { "bg-slate-900 border-t border-slate-800" } else { "bg-blue-800" };

    html! {
        <footer class={classes!("relative", "z-10", "text-white", "py-6", bg)}>
            <div class="container mx-auto px-6 text-center text-blue-200">
                <p>{format!("Copyright © {} - {}", year, SCHOOL_NAME)}</p>
                <p class="text-sm">{SCHOOL_ADDRESS}</p>
            </div>
        </footer>
    }
}
