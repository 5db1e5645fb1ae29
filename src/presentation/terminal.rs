use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;

use super::{Button, ButtonLayout, Notice, PageLayout, Presenter, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Presenter that writes the page to a terminal (or any writer).
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    format: OutputFormat,
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_json(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, value).context("Failed to write JSON output")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn write_button(&mut self, button: &Button) -> Result<()> {
        match &button.url {
            Some(url) => writeln!(self.out, "[{}] {}", button.label, url)?,
            None => writeln!(self.out, "[{}] (unavailable)", button.label)?,
        }
        Ok(())
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn render(&mut self, layout: &PageLayout) -> Result<()> {
        if self.format == OutputFormat::Json {
            let value = serde_json::to_value(layout).context("Failed to serialize page")?;
            return self.write_json(&json!({ "page": value }));
        }

        writeln!(self.out, "Platform: {}", layout.text.platform)?;
        writeln!(self.out, "Package:  {}", layout.text.package)?;
        writeln!(self.out, "Version:  {}", layout.text.version)?;

        if let Some(panel) = &layout.qr_panel {
            writeln!(self.out, "\n{}", panel.title)?;
            writeln!(self.out, "  {}", panel.subtitle)?;
            writeln!(self.out, "  QR code: {}", panel.image)?;
        }

        writeln!(self.out)?;
        match &layout.buttons {
            ButtonLayout::Single { button } => self.write_button(button)?,
            ButtonLayout::DualMac {
                intel,
                apple_silicon,
            } => {
                self.write_button(intel)?;
                self.write_button(apple_silicon)?;
            }
        }
        Ok(())
    }

    fn notice(&mut self, notice: &Notice) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&json!({ "notice": notice }));
        }

        match notice.severity {
            Severity::Fatal => writeln!(self.out, "Error: {}", notice.message)?,
            Severity::Info => writeln!(self.out, "Notice: {}", notice.message)?,
        }
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&json!({ "navigate": url }));
        }

        writeln!(self.out, "Navigating to {}", url)?;
        Ok(())
    }
}
