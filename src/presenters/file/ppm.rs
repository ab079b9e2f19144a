use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::raster::canvas::RgbaFrame;
use std::io::Write;
use std::path::Path;

/// Writes frames as binary PPM snapshots.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &RgbaFrame, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::io::BufWriter::new(std::fs::File::create(filepath)?);

        // P6 is binary RGB: width, height, then max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", frame.width(), frame.height())?;
        writeln!(file, "255")?;
        file.write_all(&frame.to_rgb())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::raster::canvas::Rgba;

    #[test]
    fn test_writes_header_and_rgb_payload() {
        let mut frame = RgbaFrame::new(2, 1);
        frame.canvas().blend_pixel(1, 0, Rgba::new(9, 8, 7, 255));
        let path = std::env::temp_dir().join(format!("flight_trail_ppm_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&frame, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&bytes[..11], b"P6\n2 1\n255\n");
        assert_eq!(&bytes[11..], &[0, 0, 0, 9, 8, 7]);
    }
}
