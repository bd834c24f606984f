//! Accent-color themes.
//!
//! A theme is either a named palette or a custom base color. Everything
//! else on screen — the secondary shade, the light and glow tints, the
//! hero gradient, the background ornaments — is derived from the base by
//! pure functions here and never stored, so reapplying a persisted color
//! always reproduces the identical visible state.

/// Per-channel reduction used to derive the secondary shade.
pub const SECONDARY_STEP: u8 = 40;

/// Alpha of the light background tint (10 %).
pub const LIGHT_TINT_ALPHA: u8 = 26;

/// Alpha of the glow tint (30 %).
pub const GLOW_TINT_ALPHA: u8 = 77;

/// RGB color (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba { r: self.r, g: self.g, b: self.b, a }
    }

    /// `"#rrggbb"` form, as persisted and as shown in the hex field.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGBA color (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    InvalidColor(String),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::InvalidColor(s) => write!(f, "invalid color: {s:?}"),
        }
    }
}

impl std::error::Error for ThemeError {}

/// Parse a strict 6-hex-digit color, with or without a leading `#`.
///
/// Anything else — short form, alpha form, named color, stray
/// characters — is `ThemeError::InvalidColor`. The caller decides
/// whether to surface or swallow the rejection.
pub fn parse_hex(input: &str) -> Result<Rgb, ThemeError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidColor(input.to_string()));
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    Ok(Rgb::new(byte(0), byte(2), byte(4)))
}

// ─── Named palettes ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedPalette {
    Blue,
    Red,
    Orange,
    Green,
    Purple,
    Pink,
}

impl NamedPalette {
    pub const ALL: [NamedPalette; 6] = [
        NamedPalette::Blue,
        NamedPalette::Red,
        NamedPalette::Orange,
        NamedPalette::Green,
        NamedPalette::Purple,
        NamedPalette::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedPalette::Blue => "blue",
            NamedPalette::Red => "red",
            NamedPalette::Orange => "orange",
            NamedPalette::Green => "green",
            NamedPalette::Purple => "purple",
            NamedPalette::Pink => "pink",
        }
    }

    pub fn base(self) -> Rgb {
        match self {
            NamedPalette::Blue => Rgb::new(0x21, 0x96, 0xf3),
            NamedPalette::Red => Rgb::new(0xf4, 0x43, 0x36),
            NamedPalette::Orange => Rgb::new(0xff, 0x98, 0x00),
            NamedPalette::Green => Rgb::new(0x4c, 0xaf, 0x50),
            NamedPalette::Purple => Rgb::new(0x9c, 0x27, 0xb0),
            NamedPalette::Pink => Rgb::new(0xe9, 0x1e, 0x63),
        }
    }

    pub fn from_name(name: &str) -> Option<NamedPalette> {
        NamedPalette::ALL.iter().copied().find(|p| p.name() == name)
    }
}

/// The user's accent choice, persisted as a single string: a palette
/// name or a `#rrggbb` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Named(NamedPalette),
    Custom(Rgb),
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Named(NamedPalette::Blue)
    }
}

impl ThemePreference {
    pub fn base(self) -> Rgb {
        match self {
            ThemePreference::Named(p) => p.base(),
            ThemePreference::Custom(c) => c,
        }
    }

    /// Persisted string form (palette name or hex literal).
    pub fn to_stored(self) -> String {
        match self {
            ThemePreference::Named(p) => p.name().to_string(),
            ThemePreference::Custom(c) => c.to_hex(),
        }
    }

    /// Parse a persisted value. Unrecognized strings are rejected so a
    /// corrupted preference falls back to the compiled-in default.
    pub fn from_stored(stored: &str) -> Result<ThemePreference, ThemeError> {
        if let Some(palette) = NamedPalette::from_name(stored) {
            return Ok(ThemePreference::Named(palette));
        }
        parse_hex(stored).map(ThemePreference::Custom)
    }
}

// ─── Derived colors ──────────────────────────────────────────────────────────

/// All colors derived from one base accent. Construction is the only
/// way to obtain these, keeping derivation a pure function of the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    base: Rgb,
}

impl Palette {
    pub fn new(base: Rgb) -> Self {
        Self { base }
    }

    pub fn primary(&self) -> Rgb {
        self.base
    }

    /// Secondary shade: each channel reduced by [`SECONDARY_STEP`],
    /// floored at zero.
    pub fn secondary(&self) -> Rgb {
        Rgb::new(
            self.base.r.saturating_sub(SECONDARY_STEP),
            self.base.g.saturating_sub(SECONDARY_STEP),
            self.base.b.saturating_sub(SECONDARY_STEP),
        )
    }

    /// 10 %-alpha wash used behind cards and section headers.
    pub fn light_tint(&self) -> Rgba {
        self.base.with_alpha(LIGHT_TINT_ALPHA)
    }

    /// 30 %-alpha tint used for focus glows and shadows.
    pub fn glow_tint(&self) -> Rgba {
        self.base.with_alpha(GLOW_TINT_ALPHA)
    }

    /// Diagonal hero gradient, primary → secondary.
    pub fn gradient(&self) -> (Rgb, Rgb) {
        (self.primary(), self.secondary())
    }

    /// Accent color for background ornament `index`: even ornaments take
    /// the primary, odd the secondary.
    pub fn ornament_color(&self, index: usize) -> Rgb {
        if index % 2 == 0 {
            self.primary()
        } else {
            self.secondary()
        }
    }

    /// Conic ornament `index` (0..3): a fixed start angle and the three
    /// derived colors rotated by the index.
    pub fn conic(&self, index: usize) -> ConicOrnament {
        const ANGLES: [f32; 3] = [0.0, 120.0, 240.0];
        let stops = [
            self.primary().with_alpha(255),
            self.secondary().with_alpha(255),
            self.glow_tint(),
        ];
        let i = index % 3;
        ConicOrnament {
            start_angle_deg: ANGLES[i],
            stops: [stops[i], stops[(i + 1) % 3], stops[(i + 2) % 3]],
        }
    }
}

/// One of the three conic-gradient background ornaments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicOrnament {
    pub start_angle_deg: f32,
    pub stops: [Rgba; 3],
}
