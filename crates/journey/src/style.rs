//! Glyphs and spacing used by the render pipeline.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderGlyphs {
    pub const ROUNDED: BorderGlyphs = BorderGlyphs {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub border: BorderGlyphs,
    /// Right edge of the title box, where it meets the header rule.
    pub title_joint: char,
    /// Left edge of the info box, where it meets the footer rule.
    pub info_joint: char,
    pub rule: char,
    /// Columns subtracted from the terminal width before wrapping body text.
    pub body_margin: usize,
    pub prompt: String,
    pub placeholder: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            border: BorderGlyphs::ROUNDED,
            title_joint: '├',
            info_joint: '┤',
            rule: '─',
            body_margin: 4,
            prompt: "> ".to_string(),
            placeholder: "Initializing...".to_string(),
        }
    }
}

impl RenderStyle {
    pub fn rule(&self, width: usize) -> String {
        self.rule.to_string().repeat(width)
    }
}
