//! Console adapter - line-oriented prompts over async reader/writer pairs

use async_trait::async_trait;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use crate::error::GrabResult;
use crate::ports::ConsolePort;

/// Interactive console reading answers from `R` and writing prompts to `W`
pub struct ConsoleAdapter<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl ConsoleAdapter<BufReader<io::Stdin>, io::Stdout> {
    /// Console attached to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleAdapter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.writer.into_inner())
    }
}

/// Prompt text for a label and its default
pub fn render_prompt(label: &str, default: &str) -> String {
    if default.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, default)
    }
}

#[async_trait]
impl<R, W> ConsolePort for ConsoleAdapter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask_optional(&self, label: &str, default: &str) -> GrabResult<Option<String>> {
        {
            let mut writer = self.writer.lock().await;
            writer.write_all(render_prompt(label, default).as_bytes()).await?;
            writer.flush().await?;
        }

        let mut line = String::new();
        // End of input reads as a blank answer
        self.reader.lock().await.read_line(&mut line).await?;

        let answer = line.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    async fn show(&self, text: &str) -> GrabResult<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}
