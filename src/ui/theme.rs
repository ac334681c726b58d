use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Paprika,
    Herb,
    Slate,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Paprika, ThemePreset::Herb, ThemePreset::Slate]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Paprika => "Paprika",
            ThemePreset::Herb => "Herb",
            ThemePreset::Slate => "Slate",
        }
    }

    /// Parse a preset from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Paprika => Theme::paprika(),
            ThemePreset::Herb => Theme::herb(),
            ThemePreset::Slate => Theme::slate(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub favorite: Color32,
    pub error: Color32,

    pub border: Color32,
}

impl Theme {
    /// Warm red-orange on charcoal
    pub fn paprika() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(18, 15, 14),
            bg_dark: Color32::from_rgb(27, 23, 21),
            bg_medium: Color32::from_rgb(38, 32, 29),
            bg_light: Color32::from_rgb(56, 47, 43),

            text_primary: Color32::from_rgb(250, 246, 242),
            text_secondary: Color32::from_rgb(214, 202, 194),
            text_muted: Color32::from_rgb(150, 138, 130),

            accent: Color32::from_rgb(234, 88, 12),
            accent_hover: Color32::from_rgb(249, 115, 22),
            accent_muted: Color32::from_rgb(170, 62, 8),

            favorite: Color32::from_rgb(244, 63, 94),
            error: Color32::from_rgb(239, 68, 68),

            border: Color32::from_rgb(72, 60, 55),
        }
    }

    /// Fresh green on dark olive
    pub fn herb() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(13, 17, 13),
            bg_dark: Color32::from_rgb(20, 27, 21),
            bg_medium: Color32::from_rgb(29, 39, 30),
            bg_light: Color32::from_rgb(44, 58, 45),

            text_primary: Color32::from_rgb(240, 250, 240),
            text_secondary: Color32::from_rgb(196, 216, 198),
            text_muted: Color32::from_rgb(128, 150, 130),

            accent: Color32::from_rgb(101, 163, 13),
            accent_hover: Color32::from_rgb(132, 204, 22),
            accent_muted: Color32::from_rgb(77, 124, 15),

            favorite: Color32::from_rgb(251, 113, 133),
            error: Color32::from_rgb(252, 165, 165),

            border: Color32::from_rgb(52, 70, 54),
        }
    }

    /// Neutral blue-grey
    pub fn slate() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(12, 16, 24),
            bg_dark: Color32::from_rgb(17, 22, 33),
            bg_medium: Color32::from_rgb(26, 32, 46),
            bg_light: Color32::from_rgb(40, 48, 66),

            text_primary: Color32::from_rgb(241, 245, 249),
            text_secondary: Color32::from_rgb(203, 213, 225),
            text_muted: Color32::from_rgb(134, 146, 164),

            accent: Color32::from_rgb(56, 189, 248),
            accent_hover: Color32::from_rgb(125, 211, 252),
            accent_muted: Color32::from_rgb(2, 132, 199),

            favorite: Color32::from_rgb(251, 113, 133),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(51, 65, 85),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
