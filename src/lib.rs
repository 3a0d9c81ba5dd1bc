//! Validation of tag structure in HTML documents.
//!
//! The validator checks that every start tag has a matching end tag in proper
//! nesting order, that every comment is terminated and, optionally, that void
//! elements are written with a self-closing slash. Attributes, text content and
//! whitespace are not validated.
//!
//! Validation stops at the first defect, which is reported together with its
//! location in the source:
//!
//! ```
//! use html_tag_validator::{validate, DefectKind, Settings};
//!
//! assert!(validate("<div><span></span></div>", Settings::default()).is_ok());
//!
//! let defect = validate("<div><span></div>", Settings::default()).unwrap_err();
//!
//! assert_eq!(defect.kind, DefectKind::UnclosedTag);
//! assert_eq!(defect.name, "span");
//! assert_eq!((defect.line, defect.column), (1, 5));
//! ```

#[macro_use]
mod debug_trace;

mod base;
mod errors;
mod html;
mod parser;
mod settings;

use self::base::Input;
use self::parser::TagScanner;
use encoding_rs::Encoding;

pub use self::errors::{Defect, DefectKind, ValidationError};
pub use self::settings::Settings;

/// Validates the tag structure of `text`.
///
/// Lines are separated by `\n`. Returns the first defect found, if any.
pub fn validate(text: &str, settings: Settings) -> Result<(), Defect> {
    TagScanner::new(settings).run(&mut Input::new(text))
}

/// Decodes `input` with the given [encoding label] and validates the
/// decoded text.
///
/// A byte order mark, if present, takes precedence over the label.
/// Malformed byte sequences are replaced with U+FFFD.
///
/// [encoding label]: https://encoding.spec.whatwg.org/#names-and-labels
pub fn validate_bytes(
    input: &[u8],
    encoding: &str,
    settings: Settings,
) -> Result<(), ValidationError> {
    let encoding = Encoding::for_label_no_replacement(encoding.as_bytes())
        .ok_or_else(|| ValidationError::UnknownEncoding(encoding.to_owned()))?;

    let (text, _, _) = encoding.decode(input);

    validate(&text, settings)?;

    Ok(())
}
