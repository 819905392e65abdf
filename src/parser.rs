//! XML deserialization for the BART estimated-departure feed.
//!
//! Every leaf is optional at the type level: the feed's error responses omit
//! most of the schedule structure, and absence has to be detected during
//! extraction rather than rejected during decoding.

use serde::Deserialize;

use crate::error::Error;

/// The deserialized `<root>` document.
#[derive(Debug, Deserialize)]
pub struct ScheduleDocument {
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<MessageBlock>,
    #[serde(default)]
    pub station: Vec<StationBlock>,
}

#[derive(Debug, Deserialize)]
pub struct MessageBlock {
    pub error: Option<ErrorBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBlock {
    pub text: Option<String>,
    pub details: Option<String>,
}

/// One station's worth of estimated departures.
#[derive(Debug, Deserialize)]
pub struct StationBlock {
    pub name: Option<String>,
    #[serde(default)]
    pub etd: Vec<Etd>,
}

/// One destination's block of estimates. Real feeds carry several
/// `<estimate>` children per destination; only the first is consumed.
#[derive(Debug, Deserialize)]
pub struct Etd {
    pub destination: Option<String>,
    #[serde(default)]
    pub estimate: Vec<Estimate>,
}

#[derive(Debug, Deserialize)]
pub struct Estimate {
    pub minutes: Option<String>,
}

impl ScheduleDocument {
    /// Reads the `message.error.text` / `message.error.details` chain as one
    /// operation: any absent link, or an empty `text`, means "no error".
    /// A partial block never counts as a server error.
    pub fn server_error(&self) -> Option<(&str, &str)> {
        let error = self.message.as_ref()?.error.as_ref()?;
        let text = error.text.as_deref()?;
        let details = error.details.as_deref()?;
        (!text.is_empty()).then_some((text, details))
    }
}

/// Decodes a feed response into a [`ScheduleDocument`].
///
/// # Errors
///
/// Returns [`Error::Document`] if the bytes are not UTF-8 or not a
/// well-formed document of the expected shape.
pub fn parse_document(bytes: &[u8]) -> Result<ScheduleDocument, Error> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::Document(format!("response is not UTF-8: {e}")))?;
    quick_xml::de::from_str(text).map_err(|e| Error::Document(format!("malformed XML: {e}")))
}
