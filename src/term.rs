use crate::{Result, TermCoords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::debug;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self, title: &str) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(title))?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        debug!("terminal ready, {}x{}", self.width, self.height);
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        debug!("terminal restored");
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Waits up to `timeout` for a key press. Other events are swallowed.
    pub fn poll_key(&self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if poll(timeout)? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }

    pub fn size(&self) -> TermCoords {
        (self.width, self.height)
    }

    /// Frame with its top-left corner at `top_left`, `size` cells including
    /// the frame itself.
    pub fn draw_borders(&mut self, top_left: TermCoords, size: TermCoords) -> Result<()> {
        let (left, top) = top_left;
        let (width, height) = size;
        let end_x = left + width - 1;
        let end_y = top + height - 1;

        for x in left..=end_x {
            let ch = if x == left || x == end_x {"+"} else {"-"};
            self.print_at((x, top), ch, Color::White)?;
            self.print_at((x, end_y), ch, Color::White)?;
        }

        for y in top + 1..end_y {
            self.print_at((left, y), "|", Color::White)?;
            self.print_at((end_x, y), "|", Color::White)?;
        }

        Ok(())
    }

    /// Centered box of text over whatever is on screen.
    pub fn show_message(&mut self, lines: &[&str], color: Color) -> Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        let blank = " ".repeat(msg_width as usize);
        self.print_at(top_left, &blank, color)?;
        self.print_at((top_left.0, top_left.1 + msg_height - 1), &blank, color)?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            self.print_at((top_left.0, y), &padded_line, color)?;
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: TermCoords, text: &str, color: Color) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(text),
            style::ResetColor
        )?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}
