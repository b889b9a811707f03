//! Presents the assembled document outside the in-app preview pane: the
//! document is written to a temp file and handed to the platform opener.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Write the document to a temp `.html` file and open it with the system
/// browser. Returns the path it was written to.
pub fn present_in_browser(document: &str) -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("minisite-preview-{}.html", std::process::id()));
    std::fs::write(&path, document)?;
    open_path(&path)?;
    log::info!("opened preview at {}", path.display());
    Ok(path)
}

fn open_path(path: &Path) -> anyhow::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        // empty title argument so `start` treats the path as the target
        c.args(["/C", "start", ""]);
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };
    cmd.spawn()
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("failed to launch system browser: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_document_before_opening() {
        let doc = "<!doctype html><html><body>ok</body></html>";
        // opening may fail on headless systems; the file must exist regardless
        let path = match present_in_browser(doc) {
            Ok(path) => path,
            Err(_) => std::env::temp_dir()
                .join(format!("minisite-preview-{}.html", std::process::id())),
        };
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc);
        let _ = std::fs::remove_file(&path);
    }
}
