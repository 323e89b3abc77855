use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Letter-size page geometry, matching the paper slip.
const PAGE_W: f32 = 612.0;
const PAGE_H: f32 = 792.0;
const MARGIN: f32 = 54.0;

/// Low-level PDF assembly for slip documents. Pages are drawn one at a
/// time through the text/line primitives; the catalog and page tree are
/// built once at save time.
pub(crate) struct SlipPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl SlipPdf {
    pub(crate) fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            next_id,
            font_id,
            bold_font_id,
        }
    }

    pub(crate) fn page_width(&self) -> f32 {
        PAGE_W
    }

    pub(crate) fn margin(&self) -> f32 {
        MARGIN
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a new page and return its content stream builder.
    pub(crate) fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the current page's stream.
    pub(crate) fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn show_text(&self, content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    pub(crate) fn text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.show_text(content, Name(b"F1"), x, y, size, text);
    }

    pub(crate) fn text_bold(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.show_text(content, Name(b"F2"), x, y, size, text);
    }

    /// Approximate centering; close enough for Helvetica at slip sizes.
    pub(crate) fn text_centered(
        &self,
        content: &mut Content,
        cx: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        let width = text.len() as f32 * size * 0.5;
        self.show_text(content, Name(b"F1"), cx - width / 2.0, y, size, text);
    }

    pub(crate) fn text_bold_centered(
        &self,
        content: &mut Content,
        cx: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        let width = text.len() as f32 * size * 0.52;
        self.show_text(content, Name(b"F2"), cx - width / 2.0, y, size, text);
    }

    pub(crate) fn stroke_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.45, 0.45, 0.45);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    pub(crate) fn hline(&self, content: &mut Content, x1: f32, x2: f32, y: f32) {
        content.save_state();
        content.set_stroke_rgb(0.45, 0.45, 0.45);
        content.move_to(x1, y);
        content.line_to(x2, y);
        content.stroke();
        content.restore_state();
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub(crate) fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
