//! vCard document assembly.

use mozvcard_core::config::Settings;
use mozvcard_core::constants::{BEGIN_LINE, END_LINE, LINE_TERMINATOR, VERSION_LINE};

use super::fields::property_lines;
use super::fold::FoldWidth;
use crate::error::RfcResult;
use crate::rfc::vcard::core::MozContact;

/// Writes contacts as vCard 4.0 documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VCardWriter {
    width: FoldWidth,
}

impl VCardWriter {
    #[must_use]
    pub const fn new(width: FoldWidth) -> Self {
        Self { width }
    }

    /// Creates a writer using the configured fold width.
    ///
    /// ## Errors
    /// Returns an error if the settings fail validation.
    pub fn from_settings(settings: &Settings) -> RfcResult<Self> {
        settings.validate()?;
        Ok(Self::new(FoldWidth::new(settings.vcard.fold_width)?))
    }

    #[must_use]
    pub const fn width(&self) -> FoldWidth {
        self.width
    }

    /// Serializes one contact to a CRLF-terminated vCard document.
    ///
    /// ## Summary
    /// A contact with no usable fields still yields the
    /// `BEGIN`/`VERSION`/`END` envelope.
    #[must_use]
    pub fn write(&self, contact: &MozContact) -> String {
        let mut output = String::new();
        self.write_into(contact, &mut output);
        output
    }

    /// Serializes several contacts, one document after another.
    #[must_use]
    pub fn write_all(&self, contacts: &[MozContact]) -> String {
        let mut output = String::new();
        for contact in contacts {
            self.write_into(contact, &mut output);
        }
        output
    }

    #[tracing::instrument(level = "debug", skip_all, fields(id = contact.id.as_deref()))]
    fn write_into(&self, contact: &MozContact, output: &mut String) {
        push_line(output, BEGIN_LINE);
        push_line(output, VERSION_LINE);

        let mut written = 0_usize;
        for line in property_lines(contact) {
            if let Some(rendered) = line.render_with(self.width) {
                push_line(output, &rendered);
                written += 1;
            }
        }

        push_line(output, END_LINE);
        tracing::debug!(properties = written, "Contact serialized");
    }
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push_str(LINE_TERMINATOR);
}

/// Serializes one contact at the default fold width.
#[must_use]
pub fn contact_to_vcard(contact: &MozContact) -> String {
    VCardWriter::default().write(contact)
}
