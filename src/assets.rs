//! Loading of the external collaborators: template image and number font.

use ab_glyph::{Font, FontArc};
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A template or font resource could not be loaded.
///
/// Always fatal: the batch aborts before any card is generated.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to load template image {path}: {source}")]
    Template {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("font file {path} could not be parsed")]
    FontParse { path: PathBuf },
    #[error("font {path} has no glyphs for ASCII digits")]
    FontMissingDigits { path: PathBuf },
}

/// Load the background template image.
pub fn load_template(path: &Path) -> Result<DynamicImage, ResourceError> {
    image::open(path).map_err(|source| ResourceError::Template {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a TTF/OTF font and verify it can render every ASCII digit.
pub fn load_font(path: &Path) -> Result<FontArc, ResourceError> {
    let bytes = fs::read(path).map_err(|source| ResourceError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontArc::try_from_vec(bytes).map_err(|_| ResourceError::FontParse {
        path: path.to_path_buf(),
    })?;
    if !('0'..='9').all(|ch| font.glyph_id(ch).0 != 0) {
        return Err(ResourceError::FontMissingDigits {
            path: path.to_path_buf(),
        });
    }
    Ok(font)
}
