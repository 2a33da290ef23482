use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::text::truncate_to_width;
use crate::types::{Rgb, Style};

/// Backdrop assumed beneath elements that set no background.
const DEFAULT_BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const DEFAULT_FOREGROUND: Rgb = Rgb::new(220, 220, 220);

pub struct Terminal {
    stdout: io::Stdout,
    last_layout: LayoutResult,
    hovered: Option<String>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            last_layout: LayoutResult::new(),
            hovered: None,
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Element currently under the pointer; its hover style is used on the
    /// next render.
    pub fn set_hovered(&mut self, id: Option<String>) {
        self.hovered = id;
    }

    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        let available = Rect::from_size(width, height);
        self.last_layout = layout(root, available);

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;
        self.draw(root, DEFAULT_BACKGROUND)?;
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn draw(&mut self, element: &Element, backdrop: Rgb) -> io::Result<()> {
        if element.hidden {
            return Ok(());
        }
        let Some(rect) = self.last_layout.get(&element.id).copied() else {
            return Ok(());
        };
        if rect.is_empty() {
            return Ok(());
        }

        let style = match (&element.style_hover, &self.hovered) {
            (Some(hover), Some(id)) if *id == element.id => hover.clone(),
            _ => element.style.clone(),
        };
        let background = style
            .background
            .map(|c| c.over(backdrop))
            .unwrap_or(backdrop);

        if style.background.is_some() {
            self.fill(rect, background)?;
        }

        if let Some(text) = element.text_content() {
            self.print(rect, text, &style, background)?;
        }

        for child in element.child_elements() {
            self.draw(child, background)?;
        }
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Rgb) -> io::Result<()> {
        let blank = " ".repeat(rect.width as usize);
        queue!(self.stdout, SetBackgroundColor(to_crossterm(color)))?;
        for y in rect.top()..rect.bottom() {
            queue!(self.stdout, cursor::MoveTo(rect.x, y), Print(&blank))?;
        }
        Ok(())
    }

    fn print(&mut self, rect: Rect, text: &str, style: &Style, background: Rgb) -> io::Result<()> {
        let foreground = style
            .foreground
            .map(|c| c.over(background))
            .unwrap_or(DEFAULT_FOREGROUND);
        let visible = truncate_to_width(text, rect.width as usize);

        queue!(
            self.stdout,
            cursor::MoveTo(rect.x, rect.y),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_crossterm(foreground)),
            SetBackgroundColor(to_crossterm(background))
        )?;
        if style.text_style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.text_style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if style.text_style.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        queue!(self.stdout, Print(visible))?;
        Ok(())
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
