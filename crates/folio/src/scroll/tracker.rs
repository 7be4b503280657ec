//! Picks the section closest to a fixed anchor line in the viewport.

use log::trace;

/// Fraction of the viewport height, measured from the top, where the anchor line sits.
pub const ANCHOR_RATIO: f64 = 0.3;
/// Scroll offset past which the page counts as scrolled.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Viewport snapshot taken when a scroll or resize event arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn anchor(&self, ratio: f64) -> f64 {
        self.height * ratio
    }
}

/// Measures where a section's top edge currently is, relative to the viewport top.
///
/// `None` means the section cannot be measured, e.g. it is not mounted yet.
pub trait RegionSource {
    fn top_of(&self, id: &str, viewport: &Viewport) -> Option<f64>;
}

/// Sections laid out at fixed document offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticLayout {
    offsets: Vec<(String, f64)>,
}

impl StaticLayout {
    pub fn new<I, S>(offsets: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            offsets: offsets.into_iter().map(|(id, top)| (id.into(), top)).collect(),
        }
    }
}

impl RegionSource for StaticLayout {
    fn top_of(&self, id: &str, viewport: &Viewport) -> Option<f64> {
        self.offsets
            .iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, top)| top - viewport.scroll_y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
#[display("{from} -> {to}")]
pub struct Transition {
    pub from: String,
    pub to: String,
}

/// What navigation needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub active_section: String,
    pub scroll_y: f64,
}

impl ScrollState {
    pub fn scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No scroll observed yet; the default section is active.
    Idle,
    Tracking,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    sections: Vec<String>,
    anchor_ratio: f64,
    phase: Phase,
    state: ScrollState,
    recomputations: u64,
}

impl SectionTracker {
    /// Sections are compared in the given order; among equally distant
    /// sections the first one wins.
    pub fn new(sections: Vec<String>, default_section: impl Into<String>) -> Self {
        Self {
            sections,
            anchor_ratio: ANCHOR_RATIO,
            phase: Phase::Idle,
            state: ScrollState {
                active_section: default_section.into(),
                scroll_y: 0.0,
            },
            recomputations: 0,
        }
    }

    #[must_use]
    pub fn with_anchor_ratio(mut self, anchor_ratio: f64) -> Self {
        self.anchor_ratio = anchor_ratio;
        self
    }

    pub fn active(&self) -> &str {
        &self.state.active_section
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Re-measures every section and moves the active one to the section
    /// whose top is nearest the anchor line.
    ///
    /// Keeps the current section when nothing can be measured.
    pub fn recompute(
        &mut self,
        viewport: &Viewport,
        source: &impl RegionSource,
    ) -> Option<Transition> {
        self.phase = Phase::Tracking;
        self.recomputations += 1;
        self.state.scroll_y = viewport.scroll_y;

        let anchor = viewport.anchor(self.anchor_ratio);
        let mut closest: Option<(&str, f64)> = None;
        for id in &self.sections {
            let Some(top) = source.top_of(id, viewport).filter(|top| top.is_finite()) else {
                continue;
            };
            let distance = (top - anchor).abs();
            trace!("Section {id} is {distance}px from the anchor");
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((id, distance));
            }
        }

        let next = closest?.0.to_owned();
        self.activate(next)
    }

    /// Makes `id` active right away, e.g. after a navigation click.
    ///
    /// Ignores ids that are not registered.
    pub fn select(&mut self, id: &str) -> Option<Transition> {
        if !self.sections.iter().any(|section| section == id) {
            return None;
        }
        self.activate(id.to_owned())
    }

    fn activate(&mut self, next: String) -> Option<Transition> {
        if next == self.state.active_section {
            return None;
        }
        let from = std::mem::replace(&mut self.state.active_section, next.clone());
        Some(Transition { from, to: next })
    }
}
