//! Image source and sink collaborators
//!
//! Synthesis itself never touches storage. Hosts fetch inputs through an
//! [`ImageSource`] and hand results to an [`ImageSink`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::io::error::{Result, StereogramError};
use crate::io::image::{coerce, load_image, save_image};

/// Channel layout requested from an image source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// One 8-bit luminance channel
    Luma,
    /// Three 8-bit color channels
    Rgb,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Luma => write!(f, "single-channel luma"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// Identifier and size of a persisted image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Identifier the sink assigned
    pub image_id: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl StoredImage {
    fn describe(image_id: String, image: &DynamicImage) -> Self {
        Self {
            image_id,
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Provides decoded images by identifier
pub trait ImageSource {
    /// Fetch an image converted to `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if no image has this id, it cannot be decoded, or it
    /// cannot be converted to `mode`
    fn fetch(&self, image_id: &str, mode: ColorMode) -> Result<DynamicImage>;
}

/// Persists produced images
pub trait ImageSink {
    /// Store an image and report its identifier and size
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be persisted
    fn store(&mut self, image: &DynamicImage) -> Result<StoredImage>;
}

/// In-process image store, usable as both source and sink
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    images: HashMap<String, DynamicImage>,
    next_id: usize,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image under a generated id and return the id
    pub fn insert(&mut self, image: DynamicImage) -> String {
        let image_id = format!("image-{}", self.next_id);
        self.next_id += 1;
        self.images.insert(image_id.clone(), image);
        image_id
    }

    /// Add or replace an image under a chosen id
    pub fn insert_named(&mut self, image_id: impl Into<String>, image: DynamicImage) {
        self.images.insert(image_id.into(), image);
    }

    /// Stored image, without conversion
    pub fn get(&self, image_id: &str) -> Option<&DynamicImage> {
        self.images.get(image_id)
    }

    /// Number of stored images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store holds no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSource for MemoryStore {
    fn fetch(&self, image_id: &str, mode: ColorMode) -> Result<DynamicImage> {
        let image = self
            .images
            .get(image_id)
            .ok_or_else(|| StereogramError::ImageNotFound {
                image_id: image_id.to_string(),
            })?;
        coerce(image.clone(), mode)
    }
}

impl ImageSink for MemoryStore {
    fn store(&mut self, image: &DynamicImage) -> Result<StoredImage> {
        let image_id = self.insert(image.clone());
        Ok(StoredImage::describe(image_id, image))
    }
}

/// Reads images from files; ids are paths relative to a root directory
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    /// Source resolving ids against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File an id refers to
    pub fn path_for(&self, image_id: &str) -> PathBuf {
        self.root.join(image_id)
    }
}

impl ImageSource for FileSystemSource {
    fn fetch(&self, image_id: &str, mode: ColorMode) -> Result<DynamicImage> {
        let path = self.path_for(image_id);
        if !path.is_file() {
            return Err(StereogramError::ImageNotFound {
                image_id: image_id.to_string(),
            });
        }

        let image = load_image(&path)?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            %mode,
            "loaded image"
        );
        coerce(image, mode)
    }
}

/// Writes every stored image to one fixed path
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink writing to `path`; the extension picks the format
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for FileSink {
    fn store(&mut self, image: &DynamicImage) -> Result<StoredImage> {
        save_image(image, &self.path)?;
        debug!(path = %self.path.display(), "saved image");
        Ok(StoredImage::describe(
            self.path.display().to_string(),
            image,
        ))
    }
}
