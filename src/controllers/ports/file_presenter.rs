use std::path::Path;

use crate::presenters::raster::canvas::RgbaFrame;

pub trait FilePresenterPort {
    fn present(&self, frame: &RgbaFrame, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
