//! `voxcast voices` handler.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use voxcast_core::VoiceCatalog;

/// Render the grouped catalog, marking the default voice.
pub fn render(catalog: &VoiceCatalog) -> String {
    let mut out = String::new();
    for group in catalog.groups() {
        let _ = writeln!(out, "{}", group.name);
        for voice in &group.voices {
            let marker = if voice.id == catalog.default_voice() { " (default)" } else { "" };
            let _ = writeln!(out, "  {:<28} {}{}", voice.id, voice.display_label, marker);
        }
    }
    out
}

pub fn execute(voices_file: Option<&Path>) -> Result<()> {
    let catalog = match voices_file {
        Some(path) => VoiceCatalog::load(path)?,
        None => VoiceCatalog::builtin(),
    };
    print!("{}", render(&catalog));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_groups_then_voices() {
        let out = render(&VoiceCatalog::builtin());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Español");
        assert!(lines[1].trim_start().starts_with("es-ES-ElviraNeural"));
        assert!(lines[1].ends_with("(default)"));
        // 5 group headers + 11 voices
        assert_eq!(lines.len(), 16);
    }
}
