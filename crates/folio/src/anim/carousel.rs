//! Wrap-around index rotation with auto-advance that yields to manual navigation
//! and only runs while the carousel is on screen.

use std::rc::Rc;
use yew::Reducible;

pub const AUTO_ADVANCE_MS: u32 = 5000;
/// Inactivity after a manual step before auto-advance resumes.
pub const RESUME_AFTER_MS: u32 = 10_000;

/// Where an item sits relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Previous,
    Current,
    Next,
    Hidden,
}

impl Slot {
    pub fn css_class(self) -> &'static str {
        match self {
            Slot::Previous => "slot-previous",
            Slot::Current => "slot-current",
            Slot::Next => "slot-next",
            Slot::Hidden => "slot-hidden",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// Timer-driven step; ignored unless [`Carousel::is_rotating`].
    Tick,
    Next,
    Previous,
    Resume,
    /// The carousel's section entered or left the viewport.
    InView(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    auto: bool,
    in_view: bool,
    reduced_motion: bool,
}

impl Carousel {
    /// Starts off screen; nothing rotates before the first [`CarouselAction::InView`].
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            auto: true,
            in_view: false,
            reduced_motion: false,
        }
    }

    /// With reduced motion the carousel only moves on manual navigation.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    /// Whether the auto-advance timer should be running.
    pub fn is_rotating(&self) -> bool {
        self.auto && self.in_view && !self.reduced_motion && self.len > 1
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.len
    }

    fn previous_index(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }

    #[must_use]
    pub fn apply(self, action: CarouselAction) -> Self {
        if self.is_empty() {
            return self;
        }
        match action {
            CarouselAction::Tick if self.is_rotating() => Self {
                index: self.next_index(),
                ..self
            },
            CarouselAction::Tick => self,
            CarouselAction::Next => Self {
                index: self.next_index(),
                auto: false,
                ..self
            },
            CarouselAction::Previous => Self {
                index: self.previous_index(),
                auto: false,
                ..self
            },
            CarouselAction::Resume => Self { auto: true, ..self },
            CarouselAction::InView(in_view) => Self { in_view, ..self },
        }
    }

    pub fn slot_of(&self, item: usize) -> Slot {
        if self.is_empty() || item >= self.len {
            Slot::Hidden
        } else if item == self.index {
            Slot::Current
        } else if item == self.previous_index() {
            Slot::Previous
        } else if item == self.next_index() {
            Slot::Next
        } else {
            Slot::Hidden
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 0, CarouselAction::Next, 1)]
    #[case(3, 2, CarouselAction::Next, 0)]
    #[case(3, 0, CarouselAction::Previous, 2)]
    #[case(1, 0, CarouselAction::Previous, 0)]
    #[case(4, 3, CarouselAction::Tick, 0)]
    fn rotates_with_wrap_around(
        #[case] len: usize,
        #[case] start: usize,
        #[case] action: CarouselAction,
        #[case] expected: usize,
    ) {
        let carousel = Carousel {
            index: start,
            ..visible(len)
        };
        assert_eq!(expected, carousel.apply(action).index());
    }

    fn visible(len: usize) -> Carousel {
        Carousel::new(len).apply(CarouselAction::InView(true))
    }

    #[rstest]
    #[case::off_screen(Carousel::new(3))]
    #[case::scrolled_away(visible(3).apply(CarouselAction::InView(false)))]
    #[case::reduced_motion(visible(3).with_reduced_motion(true))]
    #[case::single_item(visible(1))]
    fn tick_is_ignored_while_not_rotating(#[case] carousel: Carousel) {
        assert!(!carousel.is_rotating());
        assert_eq!(carousel, carousel.apply(CarouselAction::Tick));
    }

    #[test]
    fn manual_steps_work_off_screen_and_with_reduced_motion() {
        let carousel = Carousel::new(3).with_reduced_motion(true);
        assert_eq!(1, carousel.apply(CarouselAction::Next).index());
        assert_eq!(2, carousel.apply(CarouselAction::Previous).index());
    }

    #[test]
    fn coming_into_view_starts_rotation() {
        let carousel = Carousel::new(3);
        assert!(!carousel.is_in_view());
        let shown = carousel.apply(CarouselAction::InView(true));
        assert!(shown.is_rotating());
        assert_eq!(1, shown.apply(CarouselAction::Tick).index());
    }

    #[test]
    fn manual_step_pauses_auto_advance_until_resumed() {
        let carousel = visible(3).apply(CarouselAction::Next);
        assert!(!carousel.is_auto());
        let ticked = carousel.apply(CarouselAction::Tick);
        assert_eq!(1, ticked.index());

        let resumed = ticked.apply(CarouselAction::Resume);
        assert!(resumed.is_auto());
        assert_eq!(2, resumed.apply(CarouselAction::Tick).index());
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let carousel = Carousel::new(0);
        for action in [
            CarouselAction::Tick,
            CarouselAction::Next,
            CarouselAction::Previous,
            CarouselAction::Resume,
            CarouselAction::InView(true),
        ] {
            assert_eq!(carousel, carousel.apply(action));
        }
        assert_eq!(Slot::Hidden, carousel.slot_of(0));
    }

    #[test]
    fn slots_surround_the_current_item() {
        let carousel = Carousel::new(5).apply(CarouselAction::Next);
        let slots: Vec<Slot> = (0..6).map(|item| carousel.slot_of(item)).collect();
        assert_eq!(
            vec![
                Slot::Previous,
                Slot::Current,
                Slot::Next,
                Slot::Hidden,
                Slot::Hidden,
                Slot::Hidden
            ],
            slots
        );
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let carousel = Rc::new(Carousel::new(2).apply(CarouselAction::Next));
        let same = carousel.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&carousel, &same));
    }
}
