//! Source document access backed by lopdf

use crate::impose::PageSource;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::get_page_dimensions;

/// A loaded source PDF with its pages in reading order
pub struct LopdfSource {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl LopdfSource {
    pub fn new(document: Document) -> Self {
        let page_ids = document.get_pages().values().copied().collect();
        Self { document, page_ids }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Object ID of the page at a 0-based index
    pub fn page_id(&self, page_index: usize) -> Result<ObjectId> {
        self.page_ids.get(page_index).copied().ok_or_else(|| {
            ImposeError::ContractViolation(format!(
                "page index {} out of range for {} pages",
                page_index,
                self.page_ids.len()
            ))
        })
    }

    /// Object ID of the root of the page tree
    fn pages_root_id(&self) -> Result<ObjectId> {
        let catalog_id = self.document.trailer.get(b"Root")?.as_reference()?;
        let catalog = self.document.get_dictionary(catalog_id)?;
        Ok(catalog.get(b"Pages")?.as_reference()?)
    }
}

impl PageSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_dimensions(&self, page_index: usize) -> Result<(f32, f32)> {
        get_page_dimensions(&self.document, self.page_id(page_index)?)
    }

    /// Append an empty page of the given size to the end of the page tree.
    fn append_blank_page(&mut self, width: f32, height: f32) -> Result<()> {
        let pages_id = self.pages_root_id()?;
        let doc = &mut self.document;

        let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
        let page_id = doc.add_object(page_dict);

        // Kids and Count may be stored inline or as indirect objects
        let mut pages_dict = doc.get_dictionary(pages_id)?.clone();
        let (kids_id, mut kids) = match pages_dict.get(b"Kids")? {
            Object::Reference(id) => (Some(*id), doc.get_object(*id)?.as_array()?.clone()),
            inline => (None, inline.as_array()?.clone()),
        };
        kids.push(Object::Reference(page_id));
        let count = match pages_dict.get(b"Count") {
            Ok(Object::Reference(id)) => doc.get_object(*id)?.as_i64()? + 1,
            Ok(Object::Integer(n)) => n + 1,
            _ => kids.len() as i64,
        };

        match kids_id {
            Some(id) => {
                doc.objects.insert(id, Object::Array(kids));
            }
            None => {
                pages_dict.set("Kids", Object::Array(kids));
            }
        }
        pages_dict.set("Count", Object::Integer(count));
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        self.page_ids.push(page_id);
        Ok(())
    }
}
