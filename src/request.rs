use crate::builder::{Barcode, TEXT_SIZE};
use crate::{encode, Error, Layout, Orientation, Result, Variant};

/// Default thickness of the bars, in pixels.
pub const DEFAULT_SIZE: u32 = 20;

/// Everything needed to produce one barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodingRequest {
    pub text: String,
    pub variant: Variant,
    /// Length of the bars across the bar axis, in pixels.
    pub thickness: u32,
    pub orientation: Orientation,
    /// Reserve a band for the text next to the bars.
    pub show_text: bool,
}

impl Default for EncodingRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            variant: Variant::General,
            thickness: DEFAULT_SIZE,
            orientation: Orientation::Horizontal,
            show_text: true,
        }
    }
}

impl EncodingRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn set_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn set_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn set_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn set_show_text(mut self, show_text: bool) -> Self {
        self.show_text = show_text;
        self
    }

    /// Encodes the text and computes the canvas. Fails without producing
    /// anything if a character is not encodable, or if the thickness is zero
    /// or too large to add the label band to.
    pub fn encode(&self) -> Result<Barcode> {
        if self.show_text && self.thickness.checked_add(TEXT_SIZE).is_none() {
            return Err(Error::InvalidThickness);
        }

        let symbol = encode(&self.text, self.variant)?;
        let layout = Layout::new(&symbol, self.thickness, self.orientation)?;

        Ok(Barcode::new(self.text.clone(), symbol, layout, self.orientation, self.show_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let r = EncodingRequest::new("12345");
        assert_eq!(r.variant, Variant::General);
        assert_eq!(r.thickness, 20);
        assert_eq!(r.orientation, Orientation::Horizontal);
        assert!(r.show_text);
    }

    #[test]
    fn test_encode_request() {
        let barcode = EncodingRequest::new("abc")
            .set_variant(Variant::UppercaseOnly)
            .set_thickness(50)
            .set_orientation(Orientation::Vertical)
            .encode()
            .unwrap();

        assert_eq!(barcode.symbol(), &encode("ABC", Variant::UppercaseOnly).unwrap());
        assert_eq!(barcode.text(), "abc");
        assert_eq!(barcode.layout().size(), (50, crate::code128_extent!(3)));
    }

    #[test]
    fn test_encode_request_errors() {
        let r = EncodingRequest::new("ok").set_thickness(0);
        assert!(matches!(r.encode(), Err(Error::InvalidThickness)));

        let r = EncodingRequest::new("A").set_thickness(u32::MAX - 5);
        assert!(matches!(r.encode(), Err(Error::InvalidThickness)));

        let r = EncodingRequest::new("tab\t");
        assert!(matches!(r.encode(), Err(Error::UnsupportedCharacter { character: '\t', position: 4, .. })));
    }

    #[test]
    fn test_thickest_canvas() {
        let max = u32::MAX - TEXT_SIZE;
        let barcode = EncodingRequest::new("A").set_thickness(max).encode().unwrap();
        assert_eq!(barcode.render().height(), u32::MAX);

        let barcode = EncodingRequest::new("A")
            .set_thickness(u32::MAX)
            .set_orientation(Orientation::Vertical)
            .set_show_text(false)
            .encode()
            .unwrap();
        assert_eq!(barcode.render().width(), u32::MAX);
        assert_eq!(barcode.render().height(), crate::code128_extent!(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_from_json() {
        let r: EncodingRequest =
            serde_json::from_str(r#"{"text": "HELLO", "variant": "code128a", "orientation": "vertical"}"#).unwrap();
        assert_eq!(r.variant, Variant::UppercaseOnly);
        assert_eq!(r.orientation, Orientation::Vertical);
        assert_eq!(r.thickness, DEFAULT_SIZE);

        let err = serde_json::from_str::<EncodingRequest>(r#"{"variant": "codabar"}"#).unwrap_err();
        assert!(err.to_string().contains("codabar"));

        let json = serde_json::to_string(&EncodingRequest::new("x")).unwrap();
        assert!(json.contains(r#""variant":"code128""#));
    }
}
