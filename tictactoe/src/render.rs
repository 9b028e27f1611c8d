
use std::io::Write;

use utils::*;

///
/// A sink for the text a game produces: board frames and the closing message.
///
pub trait Renderer
{
    ///
    /// Displays one block of text.
    ///
    fn render (& mut self, text: & str) -> Result<()>;
}

///
/// Renders to any writer, such as the terminal.
///
pub struct WriterRenderer<W: Write>
{
    sink: W
}

impl<W: Write> WriterRenderer<W>
{
    ///
    /// Wraps the given writer.
    ///
    pub fn new (sink: W) -> WriterRenderer<W>
    {
        WriterRenderer { sink }
    }

    ///
    /// Returns the wrapped writer.
    ///
    pub fn into_inner (self) -> W
    {
        self.sink
    }
}

impl<W: Write> Renderer for WriterRenderer<W>
{
    fn render (& mut self, text: & str) -> Result<()>
    {
        writeln!(self.sink, "{}", text).context("Failed to write a frame.")?;
        self.sink.flush().context("Failed to flush the renderer.")?;
        Ok(())
    }
}

///
/// Keeps every rendered block in memory.
///
#[derive(Clone, Debug, Default)]
pub struct Transcript
{
    frames: Vec<String>
}

impl Transcript
{
    ///
    /// Returns every block rendered so far, oldest first.
    ///
    pub fn frames (& self) -> & [String]
    {
        & self.frames
    }

    ///
    /// Returns the most recently rendered block.
    ///
    pub fn last (& self) -> Option<& str>
    {
        self.frames.last().map(|s| s.as_str())
    }

    ///
    /// Returns an empty transcript.
    ///
    pub fn new () -> Transcript
    {
        Transcript::default()
    }
}

impl Renderer for Transcript
{
    fn render (& mut self, text: & str) -> Result<()>
    {
        self.frames.push(text.to_owned());
        Ok(())
    }
}
