use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::models::request::{FormSnapshot, RequestType, Status};

use super::PdfError;
use super::layout::{blank_rule, wrap_text};
use super::options::PdfOptions;

const SHEET_TITLE: &str = "Church Administrative Request";

const FONT_TITLE: f32 = 16.0;
const FONT_BODY: f32 = 11.0;
/// Vertical advance per body line, in millimetres.
const LINE_HEIGHT: f32 = 6.0;
const SECTION_GAP: f32 = 3.0;
/// Character budget for wrapped body text inside the printable width.
const WRAP_CHARS: usize = 88;
/// Width of the underscore rule standing in for an empty field.
const BLANK_WIDTH: usize = 28;
/// Indent for option lists and wrapped description text.
const INDENT: f32 = 4.0;

/// Millimetre value in the backend's unit type.
fn mm(v: f32) -> Mm {
    Mm(v as _)
}

/// Write cursor over the growing document. Tracks the current layer and
/// baseline; `ensure_line` starts a fresh page when the baseline would drop
/// below the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    page_w: f32,
    page_h: f32,
    margin: f32,
}

impl Cursor<'_> {
    fn ensure_line(&mut self) {
        if self.y < self.margin {
            let (page, layer) = self.doc.add_page(mm(self.page_w), mm(self.page_h), "sheet");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = self.page_h - self.margin - LINE_HEIGHT;
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn text(&mut self, x: f32, size: f32, font: &IndirectFontRef, text: &str) {
        self.layer.use_text(text, size as _, mm(x), mm(self.y), font);
    }
}

/// Approximate x-advance of a bold Helvetica label at body size, plus a gap
/// before the value.
fn label_offset(label: &str) -> f32 {
    label.chars().count() as f32 * 2.2 + 2.0
}

/// Empty fields render as an underscore rule, as on the paper form.
fn shown(value: &str) -> String {
    if value.trim().is_empty() {
        blank_rule(BLANK_WIDTH)
    } else {
        value.to_string()
    }
}

/// Render the filled sheet to PDF bytes.
///
/// The options are validated first; the renderer itself is infallible apart
/// from the backend's own font and serialization errors.
pub fn render(form: &FormSnapshot, options: &PdfOptions) -> Result<Vec<u8>, PdfError> {
    options.validate()?;

    let (page_w, page_h) = options.page_size_mm();
    let margin = options.margin_mm();

    let (doc, page, layer) = PdfDocument::new(SHEET_TITLE, mm(page_w), mm(page_h), "sheet");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    {
        let mut cur = Cursor {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: page_h - margin - LINE_HEIGHT,
            page_w,
            page_h,
            margin,
        };
        let mid = margin + (page_w - 2.0 * margin) / 2.0;

        cur.text(margin, FONT_TITLE, &bold, SHEET_TITLE);
        cur.advance(LINE_HEIGHT + SECTION_GAP);

        labeled_pair(
            &mut cur,
            &bold,
            &regular,
            margin,
            mid,
            ("No:", form.number.as_str()),
            ("From:", form.from.as_str()),
        );
        labeled_line(&mut cur, &bold, &regular, margin, "To:", &form.to);
        labeled_line(&mut cur, &bold, &regular, margin, "Subject:", &form.subject);
        labeled_line(&mut cur, &bold, &regular, margin, "Date:", &form.start_date_long());

        option_block(
            &mut cur,
            &bold,
            &regular,
            margin,
            "Request type:",
            RequestType::ALL.iter().map(|rt| {
                let selected = form.request_type == *rt;
                match rt {
                    RequestType::Other => {
                        format!("{} {}: {}", mark(selected), rt.label(), form.other_request_type)
                    }
                    _ => format!("{} {}", mark(selected), rt.label()),
                }
            }),
        );

        description_block(&mut cur, &bold, &regular, margin, &form.description);

        labeled_pair(
            &mut cur,
            &bold,
            &regular,
            margin,
            mid,
            ("Responsible:", form.responsible.as_str()),
            ("Received by:", form.received_by.as_str()),
        );
        labeled_line(&mut cur, &bold, &regular, margin, "End date:", &form.end_date_long());

        option_block(
            &mut cur,
            &bold,
            &regular,
            margin,
            "Status:",
            Status::ALL.iter().map(|st| {
                format!("{} {}", mark(form.status == *st), st.label())
            }),
        );

        labeled_pair(
            &mut cur,
            &bold,
            &regular,
            margin,
            mid,
            ("By:", form.by.as_str()),
            ("Executed by:", form.executed_by.as_str()),
        );
    }

    doc.save_to_bytes().map_err(PdfError::from)
}

fn mark(selected: bool) -> &'static str {
    if selected { "[X]" } else { "[ ]" }
}

/// Two short fields side by side on one line.
fn labeled_pair(
    cur: &mut Cursor<'_>,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    left_x: f32,
    right_x: f32,
    left: (&str, &str),
    right: (&str, &str),
) {
    cur.ensure_line();
    cur.text(left_x, FONT_BODY, bold, left.0);
    cur.text(left_x + label_offset(left.0), FONT_BODY, regular, &shown(left.1));
    cur.text(right_x, FONT_BODY, bold, right.0);
    cur.text(right_x + label_offset(right.0), FONT_BODY, regular, &shown(right.1));
    cur.advance(LINE_HEIGHT);
}

/// One full-width field; long values continue on wrapped lines under the
/// label.
fn labeled_line(
    cur: &mut Cursor<'_>,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    x: f32,
    label: &str,
    value: &str,
) {
    let offset = label_offset(label);
    let budget = WRAP_CHARS.saturating_sub(label.chars().count() + 2).max(20);
    let value = shown(value);

    cur.ensure_line();
    cur.text(x, FONT_BODY, bold, label);
    for (i, line) in wrap_text(&value, budget).iter().enumerate() {
        if i > 0 {
            cur.advance(LINE_HEIGHT);
            cur.ensure_line();
        }
        cur.text(x + offset, FONT_BODY, regular, line);
    }
    cur.advance(LINE_HEIGHT);
}

/// A bold header followed by an indented checkbox option per line.
fn option_block(
    cur: &mut Cursor<'_>,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    x: f32,
    header: &str,
    lines: impl Iterator<Item = String>,
) {
    cur.advance(SECTION_GAP);
    cur.ensure_line();
    cur.text(x, FONT_BODY, bold, header);
    cur.advance(LINE_HEIGHT);
    for line in lines {
        cur.ensure_line();
        cur.text(x + INDENT, FONT_BODY, regular, &line);
        cur.advance(LINE_HEIGHT);
    }
    cur.advance(SECTION_GAP);
}

/// The free-text description, wrapped and paginated.
fn description_block(
    cur: &mut Cursor<'_>,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    x: f32,
    description: &str,
) {
    cur.ensure_line();
    cur.text(x, FONT_BODY, bold, "Description:");
    cur.advance(LINE_HEIGHT);
    for line in wrap_text(&shown(description), WRAP_CHARS) {
        cur.ensure_line();
        cur.text(x + INDENT, FONT_BODY, regular, &line);
        cur.advance(LINE_HEIGHT);
    }
    cur.advance(SECTION_GAP);
}
