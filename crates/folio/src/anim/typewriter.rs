//! Type-pause-erase cycle over a list of phrases.

/// Cursor blink period.
pub const CURSOR_BLINK_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub write_delay_ms: u32,
    pub erase_delay_ms: u32,
    pub pause_delay_ms: u32,
    /// Start over after the last phrase instead of leaving it on screen.
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            write_delay_ms: 100,
            erase_delay_ms: 50,
            pause_delay_ms: 2000,
            looping: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    config: TypewriterConfig,
    text_index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(texts: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            texts: texts
                .into_iter()
                .map(|text| text.as_ref().chars().collect())
                .collect(),
            config,
            text_index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// The part of the current phrase that is on screen.
    pub fn display(&self) -> String {
        self.current()
            .map(|text| text[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    fn current(&self) -> Option<&[char]> {
        self.texts.get(self.text_index).map(Vec::as_slice)
    }

    fn is_last(&self) -> bool {
        self.text_index + 1 == self.texts.len()
    }

    /// How long to wait before the next [`tick`](Self::tick), or `None` once
    /// there is nothing left to animate.
    pub fn next_delay(&self) -> Option<u32> {
        let text = self.current()?;
        match self.phase {
            Phase::Typing if self.shown < text.len() => Some(self.config.write_delay_ms),
            Phase::Typing if !self.config.looping && self.is_last() => None,
            Phase::Typing => Some(self.config.pause_delay_ms),
            Phase::Erasing => Some(self.config.erase_delay_ms),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next_delay().is_none()
    }

    pub fn tick(&mut self) {
        let Some(len) = self.current().map(<[char]>::len) else {
            return;
        };
        match self.phase {
            Phase::Typing if self.shown < len => self.shown += 1,
            Phase::Typing => {
                if self.next_delay().is_some() {
                    self.phase = Phase::Erasing;
                }
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.text_index = (self.text_index + 1) % self.texts.len();
                }
            }
        }
    }
}
