//! Paragraph styles and list numbering for the DOCX output

use docx_rs::*;

/// Numbering instance shared by every "List Bullet" paragraph
pub const BULLET_NUMBERING: usize = 1;

/// Numbering instance shared by every "List Number" paragraph
pub const DECIMAL_NUMBERING: usize = 2;

/// Style id for a named paragraph style: Word ids are the display name without spaces
/// ("List Bullet" → "ListBullet").
pub fn style_id(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Numbering instance for a paragraph style, if the style is a list style
pub fn numbering_for(style_id: &str) -> Option<usize> {
    match style_id {
        "ListBullet" => Some(BULLET_NUMBERING),
        "ListNumber" => Some(DECIMAL_NUMBERING),
        _ => None,
    }
}

fn heading_style(level: usize, size: usize) -> Style {
    Style::new(format!("Heading{level}"), StyleType::Paragraph)
        .name(format!("Heading {level}"))
        .size(size)
        .bold()
}

fn list_level(format: &str, text: &str) -> Level {
    Level::new(
        0,
        Start::new(1),
        NumberFormat::new(format),
        LevelText::new(text),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None)
}

/// Register heading and list styles plus the two list numberings.
pub fn initialize(docx: Docx) -> Docx {
    // Sizes are half-points.
    let headings = [(1, 32), (2, 28), (3, 26), (4, 24), (5, 22), (6, 20)];
    let docx = headings
        .into_iter()
        .fold(docx, |docx, (level, size)| {
            docx.add_style(heading_style(level, size))
        });

    docx.add_style(Style::new("ListBullet", StyleType::Paragraph).name("List Bullet"))
        .add_style(Style::new("ListNumber", StyleType::Paragraph).name("List Number"))
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING).add_level(list_level("bullet", "•")),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(DECIMAL_NUMBERING).add_level(list_level("decimal", "%1.")),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
        .add_numbering(Numbering::new(DECIMAL_NUMBERING, DECIMAL_NUMBERING))
}
