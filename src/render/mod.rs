//! Image rendering
//!
//! The encoded content string is handed to an [`ImageEncoder`], which draws
//! the QR symbol and writes it under a freshly generated filename. The
//! production implementation is [`PngRenderer`].

mod color;
mod options;
mod raster;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::debug;
use uuid::Uuid;

pub use color::parse_hex_color;
pub use options::{
    parse_ec_level, RenderOptions, RenderSettings, DEFAULT_MARGIN, DEFAULT_WIDTH, MAX_MARGIN,
    MAX_WIDTH,
};
pub use raster::rasterize;

/// Failure to produce an image. Always a server error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("content cannot be encoded as a QR symbol: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("images directory unavailable: {0}")]
    Io(#[from] io::Error),

    #[error("render task failed: {0}")]
    Task(String),
}

/// A written image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub filename: String,
    pub path: PathBuf,
}

/// Draws content into an image file
pub trait ImageEncoder: Send + Sync {
    fn render(&self, content: &str, settings: &RenderSettings) -> Result<RenderedImage, RenderError>;
}

/// Collision-resistant image name
pub fn generate_filename() -> String {
    format!("qr_{}.png", Uuid::new_v4())
}

/// Writes PNG files into a directory
#[derive(Debug, Clone)]
pub struct PngRenderer {
    images_dir: PathBuf,
}

impl PngRenderer {
    pub fn new<P: Into<PathBuf>>(images_dir: P) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}

impl ImageEncoder for PngRenderer {
    fn render(&self, content: &str, settings: &RenderSettings) -> Result<RenderedImage, RenderError> {
        let image = rasterize(content, settings)?;

        fs::create_dir_all(&self.images_dir)?;
        let filename = generate_filename();
        let path = self.images_dir.join(&filename);
        image.save_with_format(&path, ImageFormat::Png)?;

        debug!(filename = %filename, side = image.width(), "rendered image");
        Ok(RenderedImage { filename, path })
    }
}
