//! Cover letter page layout.
//!
//! The layout is built as a list of styled blocks and then placed onto pages.
//! Rendering engines only draw the placed marks.

use crate::domain::{CoverLetter, JobDetails};

use super::metrics::{text_width_pt, wrap_text};

const INCH: f32 = 72.0;

/// Document file extension, including the dot.
pub const PDF_EXTENSION: &str = ".pdf";

/// Append `.pdf` unless the name already ends with it (case-insensitive).
pub fn normalize_pdf_filename(name: &str) -> String {
    if name.to_lowercase().ends_with(PDF_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{PDF_EXTENSION}")
    }
}

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// US Letter with 0.5in side margins and 0.2in top/bottom margins.
    pub const COVER_LETTER: PageGeometry = PageGeometry {
        width: 8.5 * INCH,
        height: 11.0 * INCH,
        margin_left: 0.5 * INCH,
        margin_right: 0.5 * INCH,
        margin_top: 0.2 * INCH,
        margin_bottom: 0.2 * INCH,
    };

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    fn top(&self) -> f32 {
        self.height - self.margin_top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
    pub weight: FontWeight,
}

impl TextStyle {
    pub const NAME: TextStyle = TextStyle {
        font_size: 24.0,
        leading: 28.8,
        space_before: 0.0,
        space_after: 10.0,
        alignment: Alignment::Center,
        weight: FontWeight::Bold,
    };

    pub const CONTACT: TextStyle = TextStyle {
        font_size: 11.0,
        leading: 13.2,
        space_before: 0.0,
        space_after: 15.0,
        alignment: Alignment::Center,
        weight: FontWeight::Regular,
    };

    pub const BODY: TextStyle = TextStyle {
        font_size: 11.0,
        leading: 14.0,
        space_before: 6.0,
        space_after: 6.0,
        alignment: Alignment::Left,
        weight: FontWeight::Regular,
    };
}

/// One vertical unit of content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text { text: String, style: TextStyle },
    /// Horizontal rule spanning the content width.
    Rule { thickness: f32 },
    Spacer { height: f32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub geometry: PageGeometry,
    pub metadata: DocumentMetadata,
    pub blocks: Vec<Block>,
}

impl DocumentLayout {
    /// Name heading, rule, contact line, then one block per letter paragraph.
    ///
    /// `filename` is expected to be normalized already; it becomes the document title.
    pub fn cover_letter(letter: &CoverLetter, details: &JobDetails, filename: &str) -> Self {
        let mut blocks = vec![
            Block::Text { text: details.your_name.clone(), style: TextStyle::NAME },
            Block::Spacer { height: 5.0 },
            Block::Rule { thickness: 1.0 },
            Block::Spacer { height: 5.0 },
            Block::Text { text: details.contact_line(), style: TextStyle::CONTACT },
        ];
        blocks.extend(
            letter
                .paragraphs()
                .into_iter()
                .map(|paragraph| Block::Text { text: paragraph.to_string(), style: TextStyle::BODY }),
        );

        Self {
            geometry: PageGeometry::COVER_LETTER,
            metadata: DocumentMetadata {
                title: filename.to_string(),
                author: details.your_name.clone(),
            },
            blocks,
        }
    }

    /// Number of letter-body paragraph blocks.
    pub fn paragraph_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::Text { style, .. } if *style == TextStyle::BODY))
            .count()
    }

    /// Place every block onto pages, breaking lines and pages as needed.
    pub fn paginate(&self) -> Vec<Page> {
        let mut cursor = PageCursor::new(self.geometry);
        for block in &self.blocks {
            match block {
                Block::Text { text, style } => cursor.place_text(text, style),
                Block::Rule { thickness } => cursor.place_rule(*thickness),
                Block::Spacer { height } => cursor.advance(*height),
            }
        }
        cursor.finish()
    }
}

/// A single line of text positioned on a page. Coordinates are points from the
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub font_size: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRule {
    pub x_start: f32,
    pub x_end: f32,
    pub y: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text(PlacedLine),
    Rule(PlacedRule),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub marks: Vec<Mark>,
}

impl Page {
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::Text(line) => Some(line),
            Mark::Rule(_) => None,
        })
    }
}

struct PageCursor {
    geometry: PageGeometry,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl PageCursor {
    fn new(geometry: PageGeometry) -> Self {
        Self { geometry, pages: Vec::new(), current: Page::default(), y: geometry.top() }
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.y = self.geometry.top();
    }

    fn at_page_top(&self) -> bool {
        self.current.marks.is_empty()
    }

    fn advance(&mut self, amount: f32) {
        self.y = (self.y - amount).max(self.geometry.margin_bottom);
    }

    fn place_text(&mut self, text: &str, style: &TextStyle) {
        let width = self.geometry.content_width();
        let lines = wrap_text(text, style.font_size, style.weight, width);
        if lines.is_empty() {
            return;
        }

        if !self.at_page_top() {
            self.advance(style.space_before);
        }
        for line in lines {
            if self.y - style.leading < self.geometry.margin_bottom && !self.at_page_top() {
                self.new_page();
            }
            self.y -= style.leading;
            let x = match style.alignment {
                Alignment::Left => self.geometry.margin_left,
                Alignment::Center => {
                    let line_width = text_width_pt(&line, style.font_size, style.weight);
                    self.geometry.margin_left + ((width - line_width) / 2.0).max(0.0)
                }
            };
            // Baseline sits above the bottom of the line box by the descender allowance.
            let baseline = self.y + (style.leading - style.font_size) / 2.0 + style.font_size * 0.2;
            self.current.marks.push(Mark::Text(PlacedLine {
                text: line,
                x,
                baseline,
                font_size: style.font_size,
                weight: style.weight,
            }));
        }
        self.advance(style.space_after);
    }

    fn place_rule(&mut self, thickness: f32) {
        if self.y - thickness < self.geometry.margin_bottom {
            self.new_page();
        }
        self.y -= thickness;
        self.current.marks.push(Mark::Rule(PlacedRule {
            x_start: self.geometry.margin_left,
            x_end: self.geometry.width - self.geometry.margin_right,
            y: self.y,
            thickness,
        }));
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.marks.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}
