//! Full-screen diff renderer.
//!
//! Paints a [`Frame`] onto the alternate screen. The first paint and every paint after a size
//! change clear the screen and draw all rows; later paints only rewrite rows that changed.
//! Rows are clipped to the screen width and rows past the screen height are dropped.

use crate::core::output::TerminalCmd;
use crate::core::text::width::truncate_to_width;
use crate::render::Frame;

const SYNC_START: &str = "\x1b[?2026h";
const SYNC_END: &str = "\x1b[?2026l";

#[derive(Debug, Default)]
pub struct ScreenRenderer {
    previous_lines: Vec<String>,
    previous_size: Option<(usize, usize)>,
}

impl ScreenRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what is on screen, e.g. after the terminal was stopped.
    pub fn reset(&mut self) {
        self.previous_lines.clear();
        self.previous_size = None;
    }

    pub fn render(&mut self, frame: Frame, width: usize, height: usize) -> Vec<TerminalCmd> {
        let lines: Vec<String> = frame
            .into_lines()
            .into_iter()
            .take(height)
            .map(|line| truncate_to_width(&line, width))
            .collect();

        let full = self.previous_size != Some((width, height));

        let mut cmds = vec![TerminalCmd::BytesStatic(SYNC_START)];
        if full {
            cmds.push(TerminalCmd::ClearScreen);
            for (row, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                cmds.push(TerminalCmd::MoveTo {
                    row: row as u16,
                    col: 0,
                });
                cmds.push(TerminalCmd::Bytes(line.clone()));
            }
        } else {
            let rows = lines.len().max(self.previous_lines.len());
            let mut changed = false;
            for row in 0..rows {
                let old = self.previous_lines.get(row).map(String::as_str);
                let new = lines.get(row).map(String::as_str);
                if old == new {
                    continue;
                }
                changed = true;
                cmds.push(TerminalCmd::MoveTo {
                    row: row as u16,
                    col: 0,
                });
                if let Some(new) = new {
                    cmds.push(TerminalCmd::Bytes(new.to_string()));
                }
                cmds.push(TerminalCmd::ClearLine);
            }
            if !changed {
                return Vec::new();
            }
        }
        cmds.push(TerminalCmd::BytesStatic(SYNC_END));

        self.previous_lines = lines;
        self.previous_size = Some((width, height));
        cmds
    }
}
