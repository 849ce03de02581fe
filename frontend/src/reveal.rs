use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.1;

/// Becomes `true` the first time `node` scrolls into view, then stops observing.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        use_effect_with_deps(move |node: &NodeRef| {
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            setter.set(true);
                            observer.unobserve(&entry.target());
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok();

            match (&observer, node.cast::<Element>()) {
                (Some(observer), Some(element)) => observer.observe(&element),
                _ => log::debug!("IntersectionObserver unavailable, revealing immediately"),
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        }, node);
    }

    // Browsers without IntersectionObserver show content right away.
    *visible || !observer_supported()
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!(props.class.clone(), "reveal", visible.then_some("visible"))}>
            { for props.children.iter() }
        </div>
    }
}
