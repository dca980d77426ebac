//! Decoded layer images and erase masks, loaded lazily by source reference.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use cairo::{Format, ImageSurface};
use log::{debug, warn};
use thiserror::Error;

/// Errors raised while loading or converting an image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode PNG {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: cairo::IoError,
    },

    #[error("cannot derive a mask from a {0:?} surface")]
    UnsupportedFormat(Format),

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Decodes a PNG file into a Cairo surface.
pub fn load_png(path: &Path) -> Result<ImageSurface, ImageError> {
    let file = File::open(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    ImageSurface::create_from_png(&mut reader).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts an image into an alpha-only mask using its luminance.
///
/// The image is treated as if composited over white, so transparent regions keep
/// the layer visible and black regions erase it. Luminance uses the linear RGB
/// coefficients 0.2125, 0.7154 and 0.0721.
pub fn luminance_mask(image: &ImageSurface) -> Result<ImageSurface, ImageError> {
    let format = image.format();
    if !matches!(format, Format::ARgb32 | Format::Rgb24) {
        return Err(ImageError::UnsupportedFormat(format));
    }

    let width = image.width();
    let height = image.height();
    let mut mask = ImageSurface::create(Format::A8, width, height)?;
    let src_stride = image.stride() as usize;
    let dst_stride = mask.stride() as usize;

    image.flush();
    let mut alpha = vec![0u8; dst_stride * height as usize];
    image.with_data(|src| {
        for y in 0..height as usize {
            for x in 0..width as usize {
                let offset = y * src_stride + x * 4;
                let pixel = u32::from_ne_bytes([
                    src[offset],
                    src[offset + 1],
                    src[offset + 2],
                    src[offset + 3],
                ]);
                let a = if format == Format::ARgb32 {
                    (pixel >> 24) & 0xff
                } else {
                    0xff
                };
                // Channels are premultiplied, so this is already luminance * alpha
                let r = ((pixel >> 16) & 0xff) as f64;
                let g = ((pixel >> 8) & 0xff) as f64;
                let b = (pixel & 0xff) as f64;
                let luminance = 0.2125 * r + 0.7154 * g + 0.0721 * b;
                let over_white = luminance + (255 - a) as f64;
                alpha[y * dst_stride + x] = over_white.round().clamp(0.0, 255.0) as u8;
            }
        }
    })?;

    {
        let mut data = mask.data()?;
        data.copy_from_slice(&alpha);
    }
    mask.mark_dirty();
    Ok(mask)
}

/// Cache of decoded layer images and erase masks keyed by source reference.
///
/// Relative references resolve against `base_dir`. A source that fails to load is
/// remembered as missing so the failure is logged once, not on every frame.
/// Each cutout installs a fresh erase mask, so masks no layer points at any more
/// are dropped by [`ImageCache::retain_masks`]. Layer images are kept until
/// invalidated.
pub struct ImageCache {
    base_dir: PathBuf,
    images: HashMap<String, Option<ImageSurface>>,
    masks: HashMap<String, Option<ImageSurface>>,
}

impl ImageCache {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            images: HashMap::new(),
            masks: HashMap::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Registers an already-decoded image for `src`, replacing any cached entry.
    pub fn insert_image(&mut self, src: impl Into<String>, image: ImageSurface) {
        self.images.insert(src.into(), Some(image));
    }

    /// Registers a mask image for `src`, converting it to a luminance mask.
    pub fn insert_mask(
        &mut self,
        src: impl Into<String>,
        image: &ImageSurface,
    ) -> Result<(), ImageError> {
        let mask = luminance_mask(image)?;
        self.masks.insert(src.into(), Some(mask));
        Ok(())
    }

    /// Drops cached data for `src` so the next frame reloads it.
    ///
    /// Hosts call this after writing a new erase mask under an existing name.
    pub fn invalidate(&mut self, src: &str) {
        self.images.remove(src);
        self.masks.remove(src);
    }

    /// Drops every cached mask whose reference is not in `referenced`.
    ///
    /// Returns the number of evicted entries.
    pub fn retain_masks<'a>(&mut self, referenced: impl IntoIterator<Item = &'a str>) -> usize {
        let keep: HashSet<&str> = referenced.into_iter().collect();
        let before = self.masks.len();
        self.masks.retain(|src, _| keep.contains(src.as_str()));
        let evicted = before - self.masks.len();
        if evicted > 0 {
            debug!("Evicted {evicted} unreferenced erase mask(s)");
        }
        evicted
    }

    /// Number of cached mask entries, including remembered failures.
    pub fn mask_count(&self) -> usize {
        self.masks.len()
    }

    /// Image for a layer source, loading it on first use.
    pub fn image(&mut self, src: &str) -> Option<&ImageSurface> {
        if !self.images.contains_key(src) {
            let loaded = match load_png(&self.resolve(src)) {
                Ok(image) => {
                    debug!(
                        "Loaded layer image {src} ({}x{})",
                        image.width(),
                        image.height()
                    );
                    Some(image)
                }
                Err(err) => {
                    warn!("Layer image unavailable: {err}");
                    None
                }
            };
            self.images.insert(src.to_string(), loaded);
        }
        self.images.get(src).and_then(Option::as_ref)
    }

    /// Luminance mask for an erase-mask reference, loading it on first use.
    pub fn mask(&mut self, src: &str) -> Option<&ImageSurface> {
        if !self.masks.contains_key(src) {
            let loaded = load_png(&self.resolve(src)).and_then(|image| luminance_mask(&image));
            let mask = match loaded {
                Ok(mask) => Some(mask),
                Err(err) => {
                    warn!("Erase mask unavailable, drawing layer unmasked: {err}");
                    None
                }
            };
            self.masks.insert(src.to_string(), mask);
        }
        self.masks.get(src).and_then(Option::as_ref)
    }

    fn resolve(&self, src: &str) -> PathBuf {
        let path = Path::new(src);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
