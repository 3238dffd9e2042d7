//! Font setup. The bundled egui fonts have no Hangul glyphs, so a system
//! font with Korean coverage is appended as a fallback.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

const HANGUL_FONT_NAME: &str = "hangul_fallback";

/// Common install locations of fonts with Hangul coverage
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

fn candidate_paths(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

/// Read a font file and make sure epaint will be able to parse it.
///
/// egui parses fonts lazily on the next frame and panics on bad data, so
/// the bytes are checked here with the same parser first.
fn load_font(path: &Path) -> Result<Vec<u8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    ab_glyph::FontRef::try_from_slice(&bytes)
        .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))?;
    Ok(bytes)
}

/// First candidate that exists and parses as a font.
fn first_usable_font(candidates: &[PathBuf]) -> Result<(PathBuf, Vec<u8>)> {
    for path in candidates.iter().filter(|path| path.is_file()) {
        match load_font(path) {
            Ok(bytes) => return Ok((path.clone(), bytes)),
            Err(err) => log::warn!("Skipping font candidate: {:#}", err),
        }
    }
    Err(anyhow!("No font with Hangul coverage found"))
}

fn font_definitions_with(bytes: Vec<u8>) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        HANGUL_FONT_NAME.to_owned(),
        egui::FontData::from_owned(bytes),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(HANGUL_FONT_NAME.to_owned());
    }
    fonts
}

/// Build font definitions with the first usable candidate appended as a
/// fallback for both families.
pub fn build_font_definitions(configured: Option<&Path>) -> Result<egui::FontDefinitions> {
    let (path, bytes) = first_usable_font(&candidate_paths(configured))?;
    log::info!("Using {} for Hangul text", path.display());
    Ok(font_definitions_with(bytes))
}

pub fn install_fonts(ctx: &egui::Context, configured: Option<&Path>) {
    match build_font_definitions(configured) {
        Ok(fonts) => ctx.set_fonts(fonts),
        Err(err) => log::warn!("Korean labels may not render: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Bytes of one of egui's bundled fonts, known to parse
    fn bundled_font_bytes() -> Vec<u8> {
        let defaults = egui::FontDefinitions::default();
        let data = defaults
            .font_data
            .values()
            .next()
            .expect("egui ships default fonts");
        data.font.to_vec()
    }

    #[test]
    fn test_configured_font_is_tried_first() {
        let configured = PathBuf::from("/tmp/custom.ttf");
        let paths = candidate_paths(Some(&configured));
        assert_eq!(paths[0], configured);
        assert_eq!(paths.len(), SYSTEM_FONT_CANDIDATES.len() + 1);
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not really a font").unwrap();

        let err = load_font(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse font"));
        assert!(first_usable_font(&[path]).is_err());
    }

    #[test]
    fn test_falls_back_to_next_valid_candidate() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.ttf");
        let missing = dir.path().join("missing.ttf");
        let valid = dir.path().join("valid.ttf");
        std::fs::write(&broken, b"not really a font").unwrap();
        std::fs::write(&valid, bundled_font_bytes()).unwrap();

        let (path, bytes) = first_usable_font(&[broken, missing, valid.clone()]).unwrap();
        assert_eq!(path, valid);
        assert_eq!(bytes, bundled_font_bytes());
    }

    #[test]
    fn test_fallback_font_appended_to_families() {
        let fonts = font_definitions_with(bundled_font_bytes());
        assert!(fonts.font_data.contains_key(HANGUL_FONT_NAME));
        let proportional = &fonts.families[&egui::FontFamily::Proportional];
        assert_eq!(proportional.last().map(String::as_str), Some(HANGUL_FONT_NAME));
    }

    #[test]
    fn test_broken_configured_font_does_not_break_rendering() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let ctx = egui::Context::default();
        install_fonts(&ctx, Some(&path));
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("열정 꾸준 긍정");
            });
        });
    }
}
