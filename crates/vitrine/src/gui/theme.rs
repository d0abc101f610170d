use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub card: Srgba<f64>,
    pub card_border: Srgba<f64>,
    pub text: Srgba<f64>,
    pub muted: Srgba<f64>,
    pub accent: Srgba<f64>,
    pub track: Srgba<f64>,
}

impl ThemeColors {
    /// Colours used when the theme defines none of ours.
    pub fn fallback() -> Self {
        Self {
            card: Srgba::new(0.12, 0.11, 0.18, 0.95),
            card_border: Srgba::new(0.55, 0.36, 0.96, 0.4),
            text: Srgba::new(0.9, 0.91, 0.92, 1.0),
            muted: Srgba::new(0.61, 0.64, 0.69, 0.8),
            accent: Srgba::new(0.55, 0.36, 0.96, 1.0),
            track: Srgba::new(1.0, 1.0, 1.0, 0.1),
        }
    }

    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::fallback();
        Self {
            card: Self::lookup_color(context, "vitrine_card_color", fallback.card, None),
            card_border: Self::lookup_color(
                context,
                "vitrine_accent_color",
                fallback.card_border,
                Some(0.4),
            ),
            text: Self::lookup_color(context, "theme_fg_color", fallback.text, None),
            muted: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                fallback.muted,
                Some(0.8),
            ),
            accent: Self::lookup_color(context, "vitrine_accent_color", fallback.accent, None),
            track: Self::lookup_color(context, "theme_fg_color", fallback.track, Some(0.1)),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    alpha_override.unwrap_or(c.alpha() as f64),
                )
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color vitrine_card_color rgba(31, 28, 46, 0.95);
@define-color vitrine_accent_color #8b5cf6;

.vitrine-window {
    background-color: #0b0a12;
    color: #e5e7eb;
}

.vitrine-scene, .vitrine-content {
    background: none;
    background-color: transparent;
}

.vitrine-heading {
    font-size: 22px;
    font-weight: bold;
}

.vitrine-quote {
    font-style: italic;
}

.vitrine-stars {
    color: #facc15;
}

.vitrine-error {
    color: #f87171;
}

.vitrine-dot {
    color: alpha(@vitrine_accent_color, 0.35);
    min-width: 16px;
    padding: 0 2px;
}

.vitrine-dot-active {
    color: @vitrine_accent_color;
}

.vitrine-project {
    background-color: @vitrine_card_color;
    border-radius: 12px;
    padding: 16px;
}

.vitrine-project-title {
    font-size: 16px;
    font-weight: bold;
}

.vitrine-project-stack {
    color: @vitrine_accent_color;
    font-size: 12px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
