//! PDF rendering with printpdf.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use crate::domain::document::{DocumentLayout, FontWeight, Mark, Page};
use crate::domain::{AppError, DocumentConfig};
use crate::ports::{DocumentRenderer, RenderWarning};

const LAYER_NAME: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// TrueType font pair read from disk.
struct FontFiles {
    regular: Vec<u8>,
    bold: Vec<u8>,
}

impl FontFiles {
    fn load(regular: &Path, bold: &Path) -> Result<Self, String> {
        let read = |path: &Path| {
            fs::read(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))
        };
        Ok(Self { regular: read(regular)?, bold: read(bold)? })
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn for_weight(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Renders cover letter layouts with a serif family.
///
/// The configured TrueType pair is embedded when both files load; otherwise the
/// built-in Times fonts are used and a warning is returned.
#[derive(Debug, Clone)]
pub struct PrintPdfRenderer {
    font_regular: PathBuf,
    font_bold: PathBuf,
}

impl PrintPdfRenderer {
    pub fn new(config: &DocumentConfig) -> Self {
        Self { font_regular: config.font_regular.clone(), font_bold: config.font_bold.clone() }
    }

    fn embed_fonts(
        &self,
        doc: &PdfDocumentReference,
    ) -> Result<(Fonts, Option<RenderWarning>), AppError> {
        let embedded = FontFiles::load(&self.font_regular, &self.font_bold).and_then(|files| {
            let regular = doc
                .add_external_font(files.regular.as_slice())
                .map_err(|e| format!("invalid font '{}': {}", self.font_regular.display(), e))?;
            let bold = doc
                .add_external_font(files.bold.as_slice())
                .map_err(|e| format!("invalid font '{}': {}", self.font_bold.display(), e))?;
            Ok(Fonts { regular, bold })
        });

        match embedded {
            Ok(fonts) => Ok((fonts, None)),
            Err(reason) => {
                tracing::warn!(%reason, "falling back to built-in Times fonts");
                let fonts = Fonts {
                    regular: doc.add_builtin_font(BuiltinFont::TimesRoman).map_err(render_error)?,
                    bold: doc.add_builtin_font(BuiltinFont::TimesBold).map_err(render_error)?,
                };
                Ok((fonts, Some(RenderWarning::FallbackFont { reason })))
            }
        }
    }
}

fn render_error(err: impl std::fmt::Display) -> AppError {
    AppError::DocumentRender(err.to_string())
}

/// The document info dictionary is written as raw bytes into PDFDocEncoding
/// literals, so non-ASCII characters are folded to their ASCII base letter.
fn info_text(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            folded.push(c);
            continue;
        }
        folded.push_str(match c {
            'À'..='Å' => "A",
            'à'..='å' => "a",
            'Æ' => "AE",
            'æ' => "ae",
            'Ç' => "C",
            'ç' => "c",
            'È'..='Ë' => "E",
            'è'..='ë' => "e",
            'Ì'..='Ï' => "I",
            'ì'..='ï' => "i",
            'Ð' => "D",
            'ð' => "d",
            'Ñ' => "N",
            'ñ' => "n",
            'Ò'..='Ö' | 'Ø' => "O",
            'ò'..='ö' | 'ø' => "o",
            'Ù'..='Ü' => "U",
            'ù'..='ü' => "u",
            'Ý' => "Y",
            'ý' | 'ÿ' => "y",
            'ß' => "ss",
            'Œ' => "OE",
            'œ' => "oe",
            'Š' => "S",
            'š' => "s",
            'Ž' => "Z",
            'ž' => "z",
            '\u{2018}' | '\u{2019}' => "'",
            '\u{201C}' | '\u{201D}' => "\"",
            '\u{2013}' | '\u{2014}' => "-",
            _ => "?",
        });
    }
    folded
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for mark in &page.marks {
        match mark {
            Mark::Text(line) => {
                layer.use_text(
                    line.text.clone(),
                    line.font_size,
                    mm(line.x),
                    mm(line.baseline),
                    fonts.for_weight(line.weight),
                );
            }
            Mark::Rule(rule) => {
                layer.set_outline_thickness(rule.thickness);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(mm(rule.x_start), mm(rule.y)), false),
                        (Point::new(mm(rule.x_end), mm(rule.y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

impl DocumentRenderer for PrintPdfRenderer {
    fn render(&self, layout: &DocumentLayout, output: &Path) -> Result<Vec<RenderWarning>, AppError> {
        let geometry = layout.geometry;
        let (doc, first_page, first_layer) = PdfDocument::new(
            info_text(&layout.metadata.title),
            mm(geometry.width),
            mm(geometry.height),
            LAYER_NAME,
        );
        let doc = doc.with_author(info_text(&layout.metadata.author));

        let (fonts, warning) = self.embed_fonts(&doc)?;
        let pages = layout.paginate();
        tracing::debug!(pages = pages.len(), output = %output.display(), "rendering pdf");

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(mm(geometry.width), mm(geometry.height), LAYER_NAME)
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);
            draw_page(&layer, page, &fonts);
        }

        let file = File::create(output)?;
        doc.save(&mut BufWriter::new(file)).map_err(render_error)?;

        Ok(warning.into_iter().collect())
    }
}
