use std::rc::Rc;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use shared::carousel::Carousel;
use shared::catalog::ACTIVITIES;
use shared::Activity;
use crate::{config::CONFIG, reveal::Reveal, styles::*};

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: &'static Activity,
    pub dark: bool,
}

#[function_component]
pub fn ActivityCard(props: &ActivityCardProps) -> Html {
    let activity = props.activity;
    html! {
        <div class={card(props.dark)}>
            <div class="relative h-56 overflow-hidden">
                <img src={activity.image} alt={activity.name}
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110" />
                <div class="absolute inset-0 bg-black/30"></div>
                <h3 class="absolute bottom-4 left-4 text-white text-2xl font-bold">{activity.name}</h3>
            </div>
            <div class="p-5">
                <p class={classes!("text-sm", muted(props.dark))}>{activity.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub dark: bool,
}

#[function_component]
pub fn ActivityGrid(props: &GalleryProps) -> Html {
    html! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {for ACTIVITIES.iter().map(|activity| html! {
                <Reveal key={activity.id}>
                    <ActivityCard {activity} dark={props.dark} />
                </Reveal>
            })}
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct CarouselState(Carousel);

enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index),
        }
        Rc::new(CarouselState(next))
    }
}

#[function_component]
pub fn ActivityCarousel(props: &GalleryProps) -> Html {
    let state = use_reducer(|| CarouselState(Carousel::new(ACTIVITIES.len(), CONFIG.carousel_per_view)));

    use_effect_with_deps({
        let dispatcher = state.dispatcher();
        move |_| {
            let interval = Interval::new(CONFIG.carousel_interval_ms, move || {
                dispatcher.dispatch(CarouselAction::Next);
            });
            move || drop(interval)
        }
    }, ());

    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };
    let arrow = "absolute top-1/2 -translate-y-1/2 z-10 w-10 h-10 rounded-full bg-slate-900/70 text-white hover:bg-blue-600 transition-colors";

    html! {
        <div class="relative">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 px-12">
                {for state.0.visible().enumerate().map(|(slot, index)| {
                    let activity = &ACTIVITIES[index];
                    // The third slide only fits on wide screens.
                    let hidden = match slot {
                        0 => "",
                        1 => "hidden md:block",
                        _ => "hidden lg:block",
                    };
                    html! {
                        <div key={activity.id} class={classes!("animate-fade-in", hidden)}>
                            <ActivityCard {activity} dark={props.dark} />
                        </div>
                    }
                })}
            </div>
            <button type="button" onclick={prev} class={classes!(arrow, "left-0")}>{"‹"}</button>
            <button type="button" onclick={next} class={classes!(arrow, "right-0")}>{"›"}</button>
            <div class="flex justify-center gap-2 mt-8">
                {for (0..state.0.len()).map(|index| {
                    let go_to = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(index)))
                    };
                    let active = index == state.0.index();
                    html! {
                        <button type="button" onclick={go_to}
                            aria-label={format!("Slide {}", index + 1)}
                            class={classes!("w-2.5", "h-2.5", "rounded-full", "transition-colors",
                                if active { "bg-blue-500" } else { "bg-slate-500" })} />
                    }
                })}
            </div>
        </div>
    }
}
