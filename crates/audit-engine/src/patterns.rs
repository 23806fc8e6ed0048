//! Pattern library: stateless matchers for class-name shapes and inline
//! hardcoded values.
//!
//! Every matcher is a pure function over a candidate string, so the same
//! table serves the one-shot tree pass and the live monitor.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Severity, ViolationKind};

lazy_static! {
    /// Directional spacing shorthands: m-4, mt-2, px-6, -mx-2, gap-4, space-y-2
    static ref SPACING_UTILITY: Regex =
        Regex::new(r"^-?(?:[mp][trblxy]?|space-[xy]|gap(?:-[xy])?)-(?:\d+(?:\.\d+)?|px|auto)$").unwrap();

    /// Flex/grid layout keywords
    static ref LAYOUT_UTILITY: Regex = Regex::new(
        r"^(?:flex|inline-flex|grid|inline-grid|flex-(?:row|col|wrap|nowrap|auto|initial|none|1)|items-[a-z]+|justify-[a-z]+|content-[a-z]+|self-[a-z]+|col-span-\d+|row-span-\d+)$",
    )
    .unwrap();

    /// Colored background/text/border utilities: bg-red-500, text-gray-600
    static ref COLOR_UTILITY: Regex = Regex::new(
        r"^(?:bg|text|border)-(?:red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose|slate|gray|grey|zinc|neutral|stone)-\d{2,3}$",
    )
    .unwrap();

    /// Literal color encodings inside style text
    static ref HARDCODED_COLOR: Regex =
        Regex::new(r"#[0-9a-fA-F]{6}\b|#[0-9a-fA-F]{3}\b|\b(?:rgba?|hsla?)\(").unwrap();

    /// Literal pixel magnitudes inside style text
    static ref HARDCODED_SPACING: Regex = Regex::new(r"\b\d+(?:\.\d+)?px\b").unwrap();

    /// font-family declaration with its value captured
    static ref FONT_DECLARATION: Regex = Regex::new(r"(?i)font-family\s*:\s*([^;]+)").unwrap();
}

/// Class-name prefixes the diagnostic stylesheet flags by selector. Kept in
/// sync with the utility regexes above; the stylesheet only approximates
/// them since CSS selectors cannot express the allow-list.
pub const UTILITY_CLASS_PREFIXES: &[&str] = &[
    "p-", "pt-", "pb-", "pl-", "pr-", "px-", "py-", "m-", "mt-", "mb-", "ml-", "mr-", "mx-",
    "my-", "gap-", "bg-", "text-", "border-",
];

/// Whether a single class token has a layout/spacing/color utility shape
pub fn is_utility_class(token: &str) -> bool {
    SPACING_UTILITY.is_match(token)
        || LAYOUT_UTILITY.is_match(token)
        || COLOR_UTILITY.is_match(token)
}

/// One inline-style rule: a named predicate plus the violation it produces.
///
/// New rule kinds slot in here without touching the validator.
pub struct StyleRule {
    pub name: &'static str,
    pub kind: ViolationKind,
    pub severity: Severity,
    /// Returns the offending fragment when the rule fires.
    pub matched: fn(&str) -> Option<String>,
    pub message: &'static str,
    pub suggested_fix: &'static str,
}

const STYLE_RULES: [StyleRule; 3] = [
    StyleRule {
        name: "hardcoded-color",
        kind: ViolationKind::HardcodedColor,
        severity: Severity::High,
        matched: match_hardcoded_color,
        message: "Inline style hardcodes a literal color value",
        suggested_fix: "Reference a color token (var(--ds-color-*)) instead",
    },
    StyleRule {
        name: "hardcoded-spacing",
        kind: ViolationKind::HardcodedSpacing,
        severity: Severity::Medium,
        matched: match_hardcoded_spacing,
        message: "Inline style hardcodes a pixel magnitude",
        suggested_fix: "Reference a spacing token (var(--ds-space-*)) instead",
    },
    StyleRule {
        name: "non-token-font",
        kind: ViolationKind::NonDesignSystemFont,
        severity: Severity::High,
        matched: match_non_token_font,
        message: "Inline font-family bypasses the typography tokens",
        suggested_fix: "Reference a typography token (var(--ds-font-*)) instead",
    },
];

/// The inline-style rule table, applied independently per rule
pub fn style_rules() -> &'static [StyleRule] {
    &STYLE_RULES
}

fn match_hardcoded_color(style: &str) -> Option<String> {
    HARDCODED_COLOR.find(style).map(|m| m.as_str().to_string())
}

fn match_hardcoded_spacing(style: &str) -> Option<String> {
    HARDCODED_SPACING.find(style).map(|m| m.as_str().to_string())
}

/// Fires on a font-family declaration whose value is not a token
/// indirection (`var(--…)`)
fn match_non_token_font(style: &str) -> Option<String> {
    let caps = FONT_DECLARATION.captures(style)?;
    let value = caps.get(1)?.as_str().trim();
    if value.starts_with("var(") {
        None
    } else {
        Some(value.to_string())
    }
}
