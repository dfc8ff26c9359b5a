//! Writes a finished frame to the terminal with crossterm.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use super::FrameBuffer;
use crate::textures::Rgb;

fn colour(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Render one complete frame.
pub fn present<W: Write + ?Sized>(out: &mut W, frame: &FrameBuffer) -> std::io::Result<()> {
    let rows = frame.height() / 2;
    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row as u16))?;

        // Only emit colour changes; runs of equal cells are common.
        let mut current: Option<(Rgb, Rgb)> = None;
        let mut run = String::new();
        for col in 0..frame.width() {
            let top = frame.pixel(col, row * 2).unwrap_or(Rgb::BLACK);
            let bottom = frame.pixel(col, row * 2 + 1).unwrap_or(Rgb::BLACK);
            if current != Some((top, bottom)) {
                if !run.is_empty() {
                    out.queue(Print(&run))?;
                    run.clear();
                }
                out.queue(style::SetForegroundColor(colour(top)))?;
                out.queue(style::SetBackgroundColor(colour(bottom)))?;
                current = Some((top, bottom));
            }
            run.push('▀');
        }
        if !run.is_empty() {
            out.queue(Print(&run))?;
        }
    }

    for caption in frame.captions() {
        let under = frame
            .pixel(caption.col as i32, caption.row as i32 * 2)
            .unwrap_or(Rgb::BLACK);
        out.queue(cursor::MoveTo(caption.col, caption.row))?;
        out.queue(style::SetForegroundColor(colour(caption.ink)))?;
        out.queue(style::SetBackgroundColor(colour(under)))?;
        out.queue(Print(&caption.text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
