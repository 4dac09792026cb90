//! Length-prefixed, fixed-record template library.
//!
//! Layout: byte 0 holds the template count (0-255); template `i` occupies
//! the 128-byte record starting at `1 + 128 * i`. Trailing bytes after the
//! last record are ignored.

use crate::template::{Template, TEMPLATE_BYTES};
use crate::trace::{stage_event, stage_span};
use crate::util::{PcbError, PcbResult};

/// Ordered, immutable collection of templates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    /// Decodes a library from its packed byte form.
    pub fn load(bytes: &[u8]) -> PcbResult<Self> {
        let (&count, records) = bytes
            .split_first()
            .ok_or(PcbError::MalformedLibrary { needed: 1, got: 0 })?;
        let count = usize::from(count);
        let _span = stage_span!("load_library", count = count).entered();

        let needed = 1 + count * TEMPLATE_BYTES;
        if bytes.len() < needed {
            return Err(PcbError::MalformedLibrary {
                needed,
                got: bytes.len(),
            });
        }

        let templates = records
            .chunks_exact(TEMPLATE_BYTES)
            .take(count)
            .map(Template::from_bytes)
            .collect::<PcbResult<Vec<_>>>()?;

        stage_event!("library_loaded", templates = templates.len());
        Ok(Self { templates })
    }

    /// Builds a library from decoded templates.
    pub fn from_templates(templates: Vec<Template>) -> PcbResult<Self> {
        if templates.len() > usize::from(u8::MAX) {
            return Err(PcbError::TooManyTemplates {
                count: templates.len(),
            });
        }
        Ok(Self { templates })
    }

    /// Returns the template at `index`.
    pub fn get(&self, index: usize) -> PcbResult<&Template> {
        self.templates.get(index).ok_or(PcbError::IndexOutOfRange {
            index,
            len: self.templates.len(),
            context: "template",
        })
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the library holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns all templates in index order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Iterates over templates in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// Encodes the library in its packed byte form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.templates.len() * TEMPLATE_BYTES);
        // from_templates caps the count at u8::MAX
        out.push(self.templates.len() as u8);
        for tpl in &self.templates {
            out.extend_from_slice(&tpl.to_bytes());
        }
        out
    }
}

impl<'a> IntoIterator for &'a TemplateLibrary {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateLibrary;
    use crate::template::{Template, TEMPLATE_BYTES};
    use crate::util::PcbError;

    #[test]
    fn empty_input_is_malformed() {
        let err = TemplateLibrary::load(&[]).unwrap_err();
        assert_eq!(err, PcbError::MalformedLibrary { needed: 1, got: 0 });
    }

    #[test]
    fn zero_count_library_is_valid() {
        let lib = TemplateLibrary::load(&[0]).unwrap();
        assert!(lib.is_empty());
    }

    #[test]
    fn truncated_record_is_malformed() {
        let mut bytes = vec![2u8];
        bytes.extend(std::iter::repeat(0xAA).take(TEMPLATE_BYTES + 10));
        let err = TemplateLibrary::load(&bytes).unwrap_err();
        assert_eq!(
            err,
            PcbError::MalformedLibrary {
                needed: 1 + 2 * TEMPLATE_BYTES,
                got: 1 + TEMPLATE_BYTES + 10
            }
        );
    }

    #[test]
    fn too_many_templates_rejected() {
        let tpl = Template::from_fn(|_, _| false);
        let err = TemplateLibrary::from_templates(vec![tpl; 256]).unwrap_err();
        assert_eq!(err, PcbError::TooManyTemplates { count: 256 });
    }
}
