//! Output sheet rendering backed by lopdf

use crate::impose::SheetSink;
use crate::layout::SlotPlacement;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::LopdfSource;
use super::xobject::{create_page_xobject, get_media_box};

/// One output page under construction
#[derive(Debug, Clone)]
pub struct LopdfSheet {
    width: f32,
    height: f32,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

impl LopdfSheet {
    /// The content stream operators drawn so far
    pub fn content(&self) -> String {
        self.content_ops.concat()
    }
}

/// Builds the imposed output document one sheet at a time
pub struct LopdfSheetWriter {
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    object_cache: HashMap<ObjectId, ObjectId>,
}

impl Default for LopdfSheetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfSheetWriter {
    pub fn new() -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            object_cache: HashMap::new(),
        }
    }

    /// Close the page tree and return the finished document
    pub fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        self.output
    }
}

impl SheetSink<LopdfSource> for LopdfSheetWriter {
    type Sheet = LopdfSheet;

    fn create_blank_sheet(&mut self, width: f32, height: f32) -> Result<LopdfSheet> {
        Ok(LopdfSheet {
            width,
            height,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        })
    }

    /// Draw a source page as a Form XObject with a scale + translate matrix.
    ///
    /// The sheet's MediaBox is left as created; content outside it is clipped
    /// by viewers rather than growing the sheet.
    fn merge_transformed(
        &mut self,
        sheet: &mut LopdfSheet,
        source: &LopdfSource,
        placement: &SlotPlacement,
    ) -> Result<()> {
        let page_id = source.page_id(placement.page_index())?;
        let xobject_id = create_page_xobject(
            &mut self.output,
            source.document(),
            page_id,
            &mut self.object_cache,
        )?;

        let xobject_name = format!("P{}", sheet.xobjects.len());
        sheet
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        // The form keeps the page's own coordinates, so shift a MediaBox
        // that does not start at the origin back onto the slot offset
        let [x0, y0, _, _] = get_media_box(source.document(), page_id)?;
        let scale = placement.scale;
        let tx = placement.x_offset - x0 * scale;
        let ty = placement.y_offset - y0 * scale;

        sheet.content_ops.push(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            scale, scale, tx, ty, xobject_name
        ));
        Ok(())
    }

    fn add_sheet(&mut self, sheet: LopdfSheet) -> Result<()> {
        let content = sheet.content();

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(sheet.xobjects));

        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(sheet.width),
                Object::Real(sheet.height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }

    fn sheet_count(&self) -> usize {
        self.page_refs.len()
    }
}
