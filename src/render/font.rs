//! Font loading for text glyphs.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use tracing::{debug, info};

use super::pixmap::RenderError;

/// System font candidates, CJK-capable faces first. BBS art is mostly block
/// glyphs, but the text that remains is usually Chinese.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/arphic/uming.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/truetype/unifont/unifont.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
];

/// Load a font from an explicit path, or probe the system locations.
///
/// With an explicit path any failure is an error; when probing, unusable
/// candidates are skipped and only a full miss fails.
pub fn load_font(path: Option<&Path>) -> Result<Font, RenderError> {
    if let Some(path) = path {
        return load_file(path);
    }

    for candidate in SYSTEM_FONTS {
        let candidate = Path::new(candidate);
        if !candidate.exists() {
            continue;
        }
        match load_file(candidate) {
            Ok(font) => {
                info!(path = %candidate.display(), "loaded system font");
                return Ok(font);
            }
            Err(err) => debug!(path = %candidate.display(), %err, "skipping font candidate"),
        }
    }

    Err(RenderError::NoSystemFont)
}

fn load_file(path: &Path) -> Result<Font, RenderError> {
    let data = std::fs::read(path).map_err(|source| RenderError::FontRead {
        path: PathBuf::from(path),
        source,
    })?;
    Font::from_bytes(data, FontSettings::default()).map_err(|message| RenderError::FontParse {
        path: PathBuf::from(path),
        message: message.to_string(),
    })
}
