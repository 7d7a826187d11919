use super::PdfError;

/// Physical unit the margin is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Inch,
    Mm,
}

/// Output page format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Letter,
    A4,
}

impl PageFormat {
    /// Page size in millimetres, portrait.
    fn size_mm(&self) -> (f32, f32) {
        match self {
            PageFormat::Letter => (215.9, 279.4),
            PageFormat::A4 => (210.0, 297.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Output configuration for the request-sheet export.
///
/// The default carries the values every download uses: letter portrait,
/// one-inch margin, `church-form.pdf`.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    /// Page margin, expressed in `unit`.
    pub margin: f32,
    /// Download filename advertised in the Content-Disposition header.
    pub filename: &'static str,
    /// JPEG quality applied to raster content, in (0, 1].
    pub image_quality: f32,
    /// Pixel density multiplier applied to raster content.
    pub raster_scale: f32,
    pub unit: Unit,
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin: 1.0,
            filename: "church-form.pdf",
            image_quality: 0.98,
            raster_scale: 2.0,
            unit: Unit::Inch,
            format: PageFormat::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

impl PdfOptions {
    pub fn margin_mm(&self) -> f32 {
        match self.unit {
            Unit::Inch => self.margin * 25.4,
            Unit::Mm => self.margin,
        }
    }

    /// Page size in millimetres after applying the orientation.
    pub fn page_size_mm(&self) -> (f32, f32) {
        let (w, h) = self.format.size_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Reject configurations the renderer cannot honour.
    pub fn validate(&self) -> Result<(), PdfError> {
        if !(self.image_quality > 0.0 && self.image_quality <= 1.0) {
            return Err(PdfError::InvalidOptions(format!(
                "image quality {} outside (0, 1]",
                self.image_quality
            )));
        }
        if self.raster_scale < 1.0 {
            return Err(PdfError::InvalidOptions(format!(
                "raster scale {} below 1",
                self.raster_scale
            )));
        }
        let (w, h) = self.page_size_mm();
        let margin = self.margin_mm();
        if margin <= 0.0 || margin * 2.0 >= w.min(h) {
            return Err(PdfError::InvalidOptions(format!(
                "margin of {margin}mm leaves no printable area"
            )));
        }
        Ok(())
    }
}
