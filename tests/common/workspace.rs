//! Temporary directory with helpers for writing sources and reading results.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use tempfile::TempDir;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Save an image; the format follows the file extension.
    ///
    /// JPEG has no alpha, so `.jpg`/`.jpeg` sources are flattened to RGB.
    pub fn write_image(&self, relative: &str, image: &RgbaImage) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }

        let is_jpeg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));
        let dynamic = DynamicImage::ImageRgba8(image.clone());
        if is_jpeg {
            DynamicImage::ImageRgb8(dynamic.to_rgb8())
                .save(&path)
                .expect("save jpeg fixture");
        } else {
            dynamic.save(&path).expect("save fixture");
        }
        path
    }

    pub fn write_bytes(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, bytes).expect("write fixture bytes");
        path
    }

    pub fn read_bytes(&self, relative: &str) -> Vec<u8> {
        std::fs::read(self.join(relative)).expect("read output")
    }

    pub fn read_rgba(&self, relative: &str) -> RgbaImage {
        image::open(self.join(relative))
            .expect("decode output")
            .to_rgba8()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.join(relative).exists()
    }
}
