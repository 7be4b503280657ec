use crate::theme::Theme;
use std::fmt::{self, Write as _};

/// Hue, saturation, lightness and opacity derived from a label.
///
/// Saturation, lightness and `alpha` are percentages. An `alpha` of 100
/// renders as plain `hsl(..)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorDescriptor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: u8,
}

impl fmt::Display for ColorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ColorDescriptor {
            hue,
            saturation,
            lightness,
            alpha,
        } = self;
        if *alpha >= 100 {
            write!(f, "hsl({hue}, {saturation}%, {lightness}%)")
        } else {
            let alpha = f64::from(*alpha) / 100.0;
            write!(f, "hsla({hue}, {saturation}%, {lightness}%, {alpha})")
        }
    }
}

/// Polynomial string hash (multiplier 31) over UTF-16 code units, wrapping at 32 bits.
pub fn hash_label(label: &str) -> i32 {
    label.encode_utf16().fold(0_i32, |acc, unit| {
        i32::from(unit).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    })
}

fn hash_magnitude(label: &str) -> u32 {
    hash_label(label).unsigned_abs()
}

fn small(value: u32) -> u8 {
    u8::try_from(value).expect("band offsets are below 256")
}

pub fn hue_of(label: &str) -> u16 {
    u16::try_from(hash_magnitude(label) % 360).expect("hue is below 360")
}

/// Theme accent for a label: neon glow on dark, soft glass tint on light.
///
/// The hue depends on the label only; the theme picks the band.
pub fn derive(label: &str, theme: Theme) -> ColorDescriptor {
    let (saturation, lightness, alpha) = match theme {
        Theme::Dark => (80, 60, 40),
        Theme::Light => (50, 90, 30),
    };
    ColorDescriptor {
        hue: hue_of(label),
        saturation,
        lightness,
        alpha,
    }
}

/// Shadow color used around cards.
pub fn glow(label: &str) -> ColorDescriptor {
    ColorDescriptor {
        hue: hue_of(label),
        saturation: 80,
        lightness: 70,
        alpha: 50,
    }
}

/// Saturated outline color for dark-theme borders and icons.
pub fn neon(label: &str) -> ColorDescriptor {
    ColorDescriptor {
        hue: hue_of(label),
        saturation: 100,
        lightness: 70,
        alpha: 80,
    }
}

/// Muted tint behind tab buttons.
pub fn soft_tint(label: &str) -> ColorDescriptor {
    ColorDescriptor {
        hue: hue_of(label),
        saturation: 60,
        lightness: 85,
        alpha: 25,
    }
}

/// Stone-like card background: a narrow blue-grey band around hue 200.
pub fn granite(label: &str) -> ColorDescriptor {
    let hash = hash_magnitude(label);
    ColorDescriptor {
        hue: 200 + u16::from(small(hash % 30)),
        saturation: 15 + small(hash % 15),
        lightness: 25 + small(hash % 20),
        alpha: 100,
    }
}

/// CSS color string for a label under the given theme.
pub fn generate_color(label: &str, theme: Theme) -> String {
    derive(label, theme).to_string()
}

/// Colors used by a single label-keyed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPalette {
    pub accent: ColorDescriptor,
    pub glow: ColorDescriptor,
    pub border: ColorDescriptor,
    pub background: Option<ColorDescriptor>,
}

impl CardPalette {
    /// On light theme the card keeps the stylesheet's background.
    pub fn for_label(label: &str, theme: Theme) -> Self {
        Self {
            accent: derive(label, theme),
            glow: glow(label),
            border: neon(label),
            background: (theme == Theme::Dark).then(|| granite(label)),
        }
    }

    pub fn card_style(&self) -> String {
        let mut style = format!(
            "--accent: {}; --border: {}; box-shadow: 0 4px 20px {};",
            self.accent, self.border, self.glow
        );
        if let Some(background) = self.background {
            let _ = write!(style, " background-color: {background};");
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[test]
    fn empty_label_hashes_to_zero() {
        assert_eq!(0, hash_label(""));
        assert_eq!(0, derive("", Theme::Dark).hue);
        assert_eq!(0, derive("", Theme::Light).hue);
    }

    #[rstest]
    #[case("a", 97)]
    #[case("ab", 3105)]
    #[case("Rust", 2_558_980)]
    fn hash_matches_the_31_polynomial(#[case] label: &str, #[case] expected: i32) {
        assert_eq!(expected, hash_label(label));
    }

    #[test]
    fn long_labels_wrap_instead_of_overflowing() {
        let label = "Full-stack-development with a very long descriptive label";
        let hash = hash_label(label);
        assert_eq!(hash, hash_label(label));
        assert!(derive(label, Theme::Dark).hue < 360);
    }

    #[test]
    fn hue_uses_utf16_code_units() {
        // U+1F980 is a surrogate pair in UTF-16: 0xD83E 0xDD80.
        let expected = 0xDD80 + 31 * 0xD83E;
        assert_eq!(expected, hash_label("🦀"));
    }

    #[rstest]
    fn hue_is_in_range_and_stable(
        #[values("", "C", "Git", "REST APIs", "Database Management", "Typescript", "ßüñ")]
        label: &str,
        #[values(Theme::Light, Theme::Dark)] theme: Theme,
    ) {
        let first = derive(label, theme);
        assert!(first.hue < 360);
        assert_eq!(first, derive(label, theme));
    }

    #[rstest]
    fn theme_changes_band_but_not_hue(
        #[values("Python", "Java", "Algorithms", "")] label: &str,
    ) {
        let light = derive(label, Theme::Light);
        let dark = derive(label, Theme::Dark);
        assert_eq!(light.hue, dark.hue);
        assert_ne!(
            (light.saturation, light.lightness, light.alpha),
            (dark.saturation, dark.lightness, dark.alpha)
        );
        assert!(dark.saturation > light.saturation);
    }

    #[test]
    fn granite_stays_in_its_band() {
        for label in ["Git", "Python", "Communication", ""] {
            let color = granite(label);
            assert!((200..230).contains(&color.hue));
            assert!((15..30).contains(&color.saturation));
            assert!((25..45).contains(&color.lightness));
            assert_eq!(100, color.alpha);
        }
    }

    #[test]
    fn renders_css_strings() {
        // "a" hashes to 97.
        assert_snapshot!(derive("a", Theme::Dark), @"hsla(97, 80%, 60%, 0.4)");
        assert_snapshot!(derive("a", Theme::Light), @"hsla(97, 50%, 90%, 0.3)");
        assert_snapshot!(granite("a"), @"hsl(207, 22%, 42%)");
        assert_snapshot!(soft_tint("a"), @"hsla(97, 60%, 85%, 0.25)");
    }

    #[test]
    fn light_cards_keep_stylesheet_background() {
        let palette = CardPalette::for_label("a", Theme::Light);
        assert_eq!(None, palette.background);
        assert_snapshot!(
            palette.card_style(),
            @"--accent: hsla(97, 50%, 90%, 0.3); --border: hsla(97, 100%, 70%, 0.8); box-shadow: 0 4px 20px hsla(97, 80%, 70%, 0.5);"
        );
        let dark = CardPalette::for_label("a", Theme::Dark);
        assert!(dark.card_style().ends_with("background-color: hsl(207, 22%, 42%);"));
    }
}
