//! Minimal PDF container for a single full-page JPEG.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, ErrorCode, Result};

/// CSS pixels to PDF points.
pub const PX_TO_PT: f64 = 72.0 / 96.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Parses a base64 `data:` URL such as the ones `canvas.toDataURL` returns.
pub fn decode_data_url(url: &str) -> Result<DataUrl> {
    let rest = url.strip_prefix("data:")
        .ok_or_else(|| Error::new(ErrorCode::MalformedDataUrl, "missing data: scheme"))?;
    let (meta, payload) = rest.split_once(',')
        .ok_or_else(|| Error::new(ErrorCode::MalformedDataUrl, "missing payload separator"))?;
    let mime = meta.strip_suffix(";base64")
        .ok_or_else(|| Error::new(ErrorCode::MalformedDataUrl, "payload is not base64"))?;

    let bytes = STANDARD.decode(payload)
        .map_err(|e| Error::with_details(ErrorCode::MalformedDataUrl, "invalid base64 payload", e.to_string()))?;
    if bytes.is_empty() {
        return Err(Error::new(ErrorCode::MalformedDataUrl, "empty payload"));
    }

    Ok(DataUrl { mime: mime.to_string(), bytes })
}

fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Writes numbered objects and records their byte offsets for the xref table.
#[derive(Default)]
pub struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut writer = Self::default();
        writer.buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        writer
    }

    fn begin_object(&mut self) -> usize {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        self.buf.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        id
    }

    fn object(&mut self, dict: &str) -> usize {
        let id = self.begin_object();
        self.buf.extend_from_slice(dict.as_bytes());
        self.buf.extend_from_slice(b"\nendobj\n");
        id
    }

    /// `dict` is the stream dictionary without `/Length`, which is added here.
    fn stream(&mut self, dict: &str, data: &[u8]) -> usize {
        let id = self.begin_object();
        let header = format!("<< {} /Length {} >>\nstream\n", dict, data.len());
        self.buf.extend_from_slice(header.as_bytes());
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
        id
    }

    /// Appends the xref table and trailer. Object 1 must be the catalog.
    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", self.offsets.len() + 1);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.offsets.len() + 1,
            xref_offset
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }

    /// One page sized to the image, the JPEG drawn edge to edge.
    pub fn single_image(jpeg: &[u8], width_px: u32, height_px: u32) -> Vec<u8> {
        let width = format_number(f64::from(width_px) * PX_TO_PT);
        let height = format_number(f64::from(height_px) * PX_TO_PT);

        let mut writer = Self::new();
        writer.object("<< /Type /Catalog /Pages 2 0 R >>");
        writer.object("<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
        writer.object(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {w} {h}] \
             /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>",
            w = width,
            h = height
        ));
        writer.stream(
            &format!(
                "/Type /XObject /Subtype /Image /Width {} /Height {} \
                 /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode",
                width_px, height_px
            ),
            jpeg,
        );
        let content = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q", width, height);
        writer.stream("", content.as_bytes());
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(600.0), "600");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.75), "0.75");
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = PdfWriter::single_image(&[0xFF, 0xD8, 0xFF, 0xD9], 800, 1000);
        let text = String::from_utf8_lossy(&pdf).to_string();
        let xref_at = text.find("xref\n").unwrap();
        let entries: Vec<&str> = text[xref_at..].lines().skip(3).take(5).collect();
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            assert!(pdf[offset..].starts_with(format!("{} 0 obj", i + 1).as_bytes()));
        }
    }
}
