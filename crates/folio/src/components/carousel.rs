use crate::anim::carousel::{AUTO_ADVANCE_MS, Carousel, CarouselAction, RESUME_AFTER_MS, Slot};
use crate::util::debounce::Debouncer;
use crate::util::timer::BrowserScheduler;
use gloo::timers::callback::Interval;
use log::debug;
use yew::prelude::*;

/// Whether the user asked the system to minimise non-essential motion.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .is_some_and(|query| query.matches())
}

#[derive(Clone, PartialEq)]
pub struct UseCarouselHandle {
    pub index: usize,
    pub len: usize,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    carousel: Carousel,
}

impl UseCarouselHandle {
    pub fn slot_of(&self, item: usize) -> Slot {
        self.carousel.slot_of(item)
    }
}

/// Rotates through `len` items while `in_view` is set. Manual steps pause the
/// rotation until the user has left the controls alone for [`RESUME_AFTER_MS`].
#[hook]
pub fn use_carousel(len: usize, in_view: bool) -> UseCarouselHandle {
    let carousel = use_reducer_eq(move || {
        let reduced_motion = prefers_reduced_motion();
        if reduced_motion {
            debug!("Reduced motion requested, carousel auto-advance disabled");
        }
        Carousel::new(len).with_reduced_motion(reduced_motion)
    });
    let resume = {
        let dispatcher = carousel.dispatcher();
        use_mut_ref(move || {
            Debouncer::new(BrowserScheduler, RESUME_AFTER_MS, move |()| {
                dispatcher.dispatch(CarouselAction::Resume);
            })
        })
    };

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(in_view, move |&in_view| {
            dispatcher.dispatch(CarouselAction::InView(in_view));
        });
    }

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(carousel.is_rotating(), move |&rotating| {
            let interval = rotating.then(|| {
                Interval::new(AUTO_ADVANCE_MS, move || {
                    dispatcher.dispatch(CarouselAction::Tick);
                })
            });
            move || drop(interval)
        });
    }

    let step = |action: CarouselAction| {
        let dispatcher = carousel.dispatcher();
        let resume = resume.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(action);
            resume.borrow().trigger(());
        })
    };

    UseCarouselHandle {
        index: carousel.index(),
        len: carousel.len(),
        on_previous: step(CarouselAction::Previous),
        on_next: step(CarouselAction::Next),
        carousel: *carousel,
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselControlsProps {
    pub handle: UseCarouselHandle,
    #[prop_or_default]
    pub label: AttrValue,
}

#[function_component(CarouselControls)]
pub fn carousel_controls(CarouselControlsProps { handle, label }: &CarouselControlsProps) -> Html {
    if handle.len < 2 {
        return html! {};
    }
    html! {
        <div class="carousel-controls">
            <button
                class="carousel-button"
                aria-label={format!("Previous {label}")}
                onclick={handle.on_previous.clone()}
            >
                {"‹"}
            </button>
            <span class="carousel-position">
                { format!("{} / {}", handle.index + 1, handle.len) }
            </span>
            <button
                class="carousel-button"
                aria-label={format!("Next {label}")}
                onclick={handle.on_next.clone()}
            >
                {"›"}
            </button>
        </div>
    }
}
