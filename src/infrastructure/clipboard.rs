use crate::domain::clipboard::ClipboardWriter;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Writes to the OS clipboard through `arboard`.
///
/// A configured `clipboard_command` replaces the native clipboard: the text is
/// piped into that program's stdin instead.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self {
            command: command.filter(|argv| !argv.is_empty()),
        }
    }
}

fn set_native(text: String) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("opening system clipboard")?;
    clipboard
        .set_text(text)
        .context("writing to system clipboard")?;
    Ok(())
}

async fn pipe_into(argv: &[String], text: &str) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow!("empty clipboard command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .with_context(|| format!("writing to {program}"))?;
    }

    let status = child.wait().await?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        if let Some(argv) = &self.command {
            return pipe_into(argv, text).await;
        }
        let text = text.to_string();
        tokio::task::spawn_blocking(move || set_native(text))
            .await
            .context("clipboard task failed")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_configured_command_uses_native_clipboard() {
        let clipboard = SystemClipboard::new(Some(vec![]));
        assert!(clipboard.command.is_none());
    }

    #[tokio::test]
    async fn test_native_copy_returns_instead_of_panicking() {
        // Headless hosts have no clipboard; either outcome is fine as long as
        // the failure comes back as an error.
        let clipboard = SystemClipboard::default();
        if let Err(err) = clipboard.copy("/strike add").await {
            assert!(format!("{err:#}").contains("clipboard"));
        }
    }

    #[cfg(unix)]
    mod command_override {
        use super::*;

        fn argv(parts: &[&str]) -> Option<Vec<String>> {
            Some(parts.iter().map(|s| (*s).to_string()).collect())
        }

        #[tokio::test]
        async fn test_configured_command_receives_text() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("clip.txt");
            let script = format!("cat > '{}'", out.display());
            let clipboard = SystemClipboard::new(argv(&["sh", "-c", &script]));

            clipboard.copy("/strike add").await.unwrap();
            assert_eq!(std::fs::read_to_string(&out).unwrap(), "/strike add");
        }

        #[tokio::test]
        async fn test_missing_program_is_an_error() {
            let clipboard = SystemClipboard::new(argv(&["definitely-not-a-clipboard-tool"]));
            let err = clipboard.copy("x").await.unwrap_err();
            assert!(format!("{err:#}").contains("spawning"));
        }

        #[tokio::test]
        async fn test_nonzero_exit_is_an_error() {
            let clipboard = SystemClipboard::new(argv(&["sh", "-c", "cat >/dev/null; exit 3"]));
            let err = clipboard.copy("x").await.unwrap_err();
            assert!(err.to_string().contains("exited"));
        }
    }
}
