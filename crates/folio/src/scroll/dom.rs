//! Browser bindings for the scroll spy: DOM measurement, window listeners
//! and the `use_scroll_spy` hook.

use super::spy::{SCROLL_DEBOUNCE_MS, ScrollSpy};
use super::tracker::{RegionSource, ScrollState, SectionTracker, Viewport};
use crate::util::timer::BrowserScheduler;
use gloo::events::EventListener;
use log::{trace, warn};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Reads section positions from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomRegions;

impl RegionSource for DomRegions {
    fn top_of(&self, id: &str, _viewport: &Viewport) -> Option<f64> {
        let element = gloo::utils::document().get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }
}

/// Current scroll offset and window height, if the window can report them.
pub fn current_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { scroll_y, height })
}

/// Smoothly scrolls the section into view. Returns `false` when it does not exist.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = gloo::utils::document().get_element_by_id(id) else {
        warn!("Cannot scroll to missing section {id}");
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub type DomScrollSpy = ScrollSpy<BrowserScheduler>;

#[derive(Clone, PartialEq)]
pub struct UseScrollSpyHandle {
    pub state: ScrollState,
    /// Scrolls to a section and highlights it without waiting for the scroll to settle.
    pub select: Callback<String>,
}

/// Tracks which of `sections` is in view while the calling component is mounted.
#[hook]
pub fn use_scroll_spy(sections: Vec<String>, default_section: String) -> UseScrollSpyHandle {
    let state = use_state_eq({
        let default_section = default_section.clone();
        move || ScrollState {
            active_section: default_section,
            scroll_y: 0.0,
        }
    });
    let spy_slot: Rc<RefCell<Option<Rc<DomScrollSpy>>>> = use_mut_ref(|| None);

    {
        let state = state.clone();
        let spy_slot = spy_slot.clone();
        use_effect_with(
            (sections, default_section),
            move |(sections, default_section)| {
                let tracker = SectionTracker::new(sections.clone(), default_section.clone());
                let spy = Rc::new(ScrollSpy::new(
                    tracker,
                    DomRegions,
                    BrowserScheduler,
                    SCROLL_DEBOUNCE_MS,
                    move |update| state.set(update.state.clone()),
                ));

                let on_event = {
                    let spy = spy.clone();
                    move |event: &web_sys::Event| {
                        trace!("{} event", event.type_());
                        if let Some(viewport) = current_viewport() {
                            spy.notify(viewport);
                        }
                    }
                };
                let window = gloo::utils::window();
                let scroll = EventListener::new(&window, "scroll", on_event.clone());
                let resize = EventListener::new(&window, "resize", on_event);
                // Settle on the initial position once the first layout is done.
                if let Some(viewport) = current_viewport() {
                    spy.notify(viewport);
                }
                *spy_slot.borrow_mut() = Some(spy.clone());

                move || {
                    drop(scroll);
                    drop(resize);
                    spy.cancel();
                    spy_slot.borrow_mut().take();
                }
            },
        );
    }

    let select = Callback::from(move |id: String| {
        if scroll_to_section(&id)
            && let Some(spy) = spy_slot.borrow().as_ref()
        {
            spy.select(&id);
        }
    });

    UseScrollSpyHandle {
        state: (*state).clone(),
        select,
    }
}
