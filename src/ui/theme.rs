use ratatui::style::{Color, Modifier, Style};

// ── Helper: build an Rgb Color from a hex literal ──────────────────────

const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >>  8) & 0xFF) as u8,
        ( hex        & 0xFF) as u8,
    )
}

// ── Theme variant selector ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeVariant {
    Default,
    Dracula,
    Gruvbox,
    Nord,
}

impl ThemeVariant {
    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Dracula,
            Self::Dracula => Self::Gruvbox,
            Self::Gruvbox => Self::Nord,
            Self::Nord    => Self::Default,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::Dracula,
            "gruvbox" => Self::Gruvbox,
            "nord"    => Self::Nord,
            _         => Self::Default,
        }
    }
}

// ── Theme struct ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub title:          Style,
    pub text:           Style,
    pub text_dim:       Style,
    pub header:         Style,
    pub warn:           Style,
    pub bar_low:        Style,
    pub bar_mid:        Style,
    pub bar_high:       Style,
    pub bar_crit:       Style,
    pub footer_bg:      Style,
    pub footer_key:     Style,
    pub footer_text:    Style,
}

impl Theme {
    pub fn for_variant(v: ThemeVariant) -> Self {
        match v {
            ThemeVariant::Default => Self::default(),
            ThemeVariant::Dracula => Self::dracula(),
            ThemeVariant::Gruvbox => Self::gruvbox(),
            ThemeVariant::Nord    => Self::nord(),
        }
    }

    pub fn default() -> Self {
        Self {
            border_focused: Style::default().fg(Color::Cyan),
            title:          Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(Color::White),
            text_dim:       Style::default().fg(Color::DarkGray),
            header:         Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD),
            warn:           Style::default().fg(Color::Yellow),
            bar_low:        Style::default().fg(Color::Green),
            bar_mid:        Style::default().fg(Color::Yellow),
            bar_high:       Style::default().fg(Color::LightRed),
            bar_crit:       Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(Color::DarkGray).fg(Color::White),
            footer_key:     Style::default().bg(Color::DarkGray).fg(Color::Cyan).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(Color::DarkGray).fg(Color::Gray),
        }
    }

    fn dracula() -> Self {
        // https://draculatheme.com/ — purple/pink dark theme
        Self {
            border_focused: Style::default().fg(rgb(0xbd93f9)),
            title:          Style::default().fg(rgb(0xf8f8f2)).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(rgb(0xf8f8f2)),
            text_dim:       Style::default().fg(rgb(0x6272a4)),
            header:         Style::default().fg(rgb(0xf8f8f2)).bg(rgb(0x44475a)).add_modifier(Modifier::BOLD),
            warn:           Style::default().fg(rgb(0xf1fa8c)),
            bar_low:        Style::default().fg(rgb(0x50fa7b)),
            bar_mid:        Style::default().fg(rgb(0xf1fa8c)),
            bar_high:       Style::default().fg(rgb(0xffb86c)),
            bar_crit:       Style::default().fg(rgb(0xff5555)).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(rgb(0x44475a)).fg(rgb(0xf8f8f2)),
            footer_key:     Style::default().bg(rgb(0x44475a)).fg(rgb(0xbd93f9)).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(rgb(0x44475a)).fg(rgb(0x6272a4)),
        }
    }

    fn gruvbox() -> Self {
        // https://github.com/morhetz/gruvbox — warm retro dark theme
        Self {
            border_focused: Style::default().fg(rgb(0x83a598)),
            title:          Style::default().fg(rgb(0xebdbb2)).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(rgb(0xebdbb2)),
            text_dim:       Style::default().fg(rgb(0xa89984)),
            header:         Style::default().fg(rgb(0xebdbb2)).bg(rgb(0x504945)).add_modifier(Modifier::BOLD),
            warn:           Style::default().fg(rgb(0xfabd2f)),
            bar_low:        Style::default().fg(rgb(0xb8bb26)),
            bar_mid:        Style::default().fg(rgb(0xfabd2f)),
            bar_high:       Style::default().fg(rgb(0xfe8019)),
            bar_crit:       Style::default().fg(rgb(0xfb4934)).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(rgb(0x3c3836)).fg(rgb(0xebdbb2)),
            footer_key:     Style::default().bg(rgb(0x3c3836)).fg(rgb(0x83a598)).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(rgb(0x3c3836)).fg(rgb(0xa89984)),
        }
    }

    fn nord() -> Self {
        // https://www.nordtheme.com/ — Arctic, north-bluish clean theme
        Self {
            border_focused: Style::default().fg(rgb(0x88c0d0)),
            title:          Style::default().fg(rgb(0xeceff4)).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(rgb(0xe5e9f0)),
            text_dim:       Style::default().fg(rgb(0x4c566a)),
            header:         Style::default().fg(rgb(0xeceff4)).bg(rgb(0x3b4252)).add_modifier(Modifier::BOLD),
            warn:           Style::default().fg(rgb(0xebcb8b)),
            bar_low:        Style::default().fg(rgb(0xa3be8c)),
            bar_mid:        Style::default().fg(rgb(0xebcb8b)),
            bar_high:       Style::default().fg(rgb(0xd08770)),
            bar_crit:       Style::default().fg(rgb(0xbf616a)).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(rgb(0x3b4252)).fg(rgb(0xd8dee9)),
            footer_key:     Style::default().bg(rgb(0x3b4252)).fg(rgb(0x88c0d0)).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(rgb(0x3b4252)).fg(rgb(0x4c566a)),
        }
    }

    /// Pick a usage-gradient style for a 0–100 value against the configured
    /// warn/crit thresholds.
    pub fn usage_style(&self, pct: f64, warn_pct: f64, crit_pct: f64) -> Style {
        if      pct >= crit_pct { self.bar_crit }
        else if pct >= warn_pct { self.bar_high }
        else if pct >= 50.0     { self.bar_mid  }
        else                    { self.bar_low  }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_cycle_returns_home() {
        let mut v = ThemeVariant::Default;
        for _ in 0..4 { v = v.next(); }
        assert_eq!(v, ThemeVariant::Default);
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(ThemeVariant::from_name("solarized"), ThemeVariant::Default);
        assert_eq!(ThemeVariant::from_name("NORD"), ThemeVariant::Nord);
    }

    #[test]
    fn usage_gradient_respects_thresholds() {
        let t = Theme::default();
        assert_eq!(t.usage_style(96.0, 85.0, 95.0), t.bar_crit);
        assert_eq!(t.usage_style(90.0, 85.0, 95.0), t.bar_high);
        assert_eq!(t.usage_style(60.0, 85.0, 95.0), t.bar_mid);
        assert_eq!(t.usage_style(10.0, 85.0, 95.0), t.bar_low);
    }
}
