// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colours, spacing and sizes shared by the swipe control and the demo screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Control and stroke sizes
- **Typography**: Font size scale

## Examples

```
use iced_swipe::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let muted_hint = Color {
    a: opacity::HINT,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Background of a disabled swipe control
    pub const DISABLED_GREY: Color = Color::from_rgb(0.8, 0.8, 0.8);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Default control background

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Faint track under the spinner arc
    pub const SPINNER_TRACK: f32 = 0.25;
    /// Default hint chevrons over the control background
    pub const HINT: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Demo control height
    pub const SWIPE_BUTTON_HEIGHT: f32 = 56.0;
    /// Demo control width
    pub const SWIPE_BUTTON_WIDTH: f32 = 320.0;

    /// Chevron stroke
    pub const HINT_STROKE: f32 = 2.5;
    /// Spinner arc stroke
    pub const SPINNER_STROKE: f32 = 3.0;
    /// Check / cross stroke
    pub const GLYPH_STROKE: f32 = 3.0;

    /// Gap between the glyph or spinner and the morphed square's edge
    pub const INDICATOR_INSET: f32 = 14.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen title
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Status line
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HINT > 0.0 && opacity::HINT < 1.0);

    assert!(sizing::SWIPE_BUTTON_WIDTH > sizing::SWIPE_BUTTON_HEIGHT);
    assert!(sizing::INDICATOR_INSET * 2.0 < sizing::SWIPE_BUTTON_HEIGHT);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn disabled_grey_is_neutral() {
        let grey = palette::DISABLED_GREY;
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
    }
}
