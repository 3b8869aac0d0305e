//! Frame composition for the session screen: title header, content body, info footer and the
//! input line.

use std::io::Write;

use journey_tui::{pad_to_width, visible_width, Frame};

use crate::session::SessionController;
use crate::style::RenderStyle;
use crate::view::ContentView;

pub fn render<V: ContentView, W: Write>(
    session: &SessionController<V, W>,
    style: &RenderStyle,
) -> Frame {
    if !session.is_ready() {
        return Frame::new(vec![String::new(), format!("  {}", style.placeholder)]);
    }

    let (width, _) = session.dimensions();
    let mut frame = Frame::default();
    frame.extend(header(&session.title(), width, style));
    frame.extend(session.view().view());
    frame.extend(footer(session.view().scroll_percent(), width, style));
    frame.push(session.input().render(&style.prompt, width));
    frame
}

/// Title box with the rule running off its right edge.
pub fn header(title: &str, width: usize, style: &RenderStyle) -> Vec<String> {
    let border = &style.border;
    let label = format!(" {title} ");
    let label_width = visible_width(&label);
    let span = border.horizontal.to_string().repeat(label_width);
    let rule = style.rule(width.saturating_sub(label_width + 2));

    vec![
        pad_to_width(
            &format!("{}{span}{}", border.top_left, border.top_right),
            width,
        ),
        format!("{}{label}{}{rule}", border.vertical, style.title_joint),
        pad_to_width(
            &format!("{}{span}{}", border.bottom_left, border.bottom_right),
            width,
        ),
    ]
}

/// Rule ending in the scroll-percentage box, without the input line.
pub fn footer(percent: f64, width: usize, style: &RenderStyle) -> Vec<String> {
    let border = &style.border;
    let label = format!(" {} ", format_percent(percent));
    let label_width = visible_width(&label);
    let span = border.horizontal.to_string().repeat(label_width);
    let lead = width.saturating_sub(label_width + 2);

    vec![
        format!(
            "{}{}{span}{}",
            " ".repeat(lead),
            border.top_left,
            border.top_right
        ),
        format!(
            "{}{}{label}{}",
            style.rule(lead),
            style.info_joint,
            border.vertical
        ),
        format!(
            "{}{}{span}{}",
            " ".repeat(lead),
            border.bottom_left,
            border.bottom_right
        ),
    ]
}

/// `fraction` in `0.0..=1.0` as a whole percentage right-aligned in three columns.
pub fn format_percent(fraction: f64) -> String {
    format!("{:3.0}%", fraction * 100.0)
}
