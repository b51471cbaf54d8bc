//! Markdown rendering of the content model.
//!
//! A human-inspectable view: section headings, body text as bullets
//! with indentation, tables as pipe markup, images as links. Font
//! decisions are emitted as HTML comments next to the text they apply
//! to, so a reader (or a downstream prompt) can see what the model
//! decided without parsing JSON.

use crate::model::{ContentModel, ContentNode, FontInfo, Section};
use crate::reconcile::write_markup_table;

/// Convert a content model to Markdown.
pub fn to_markdown(model: &ContentModel) -> String {
    let mut output = String::new();

    for section in &model.sections {
        render_section(&mut output, section);
    }

    output.trim().to_string()
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str("## ");
    if section.heading.is_empty() {
        output.push_str("(untitled)");
    } else {
        output.push_str(&section.heading);
    }
    output.push('\n');

    if let Some(comment) = section.metadata.title_font.as_ref().and_then(font_comment) {
        output.push_str(&comment);
        output.push('\n');
    }
    output.push('\n');

    for node in &section.content {
        match node {
            ContentNode::Text(block) => {
                let indent = "  ".repeat(block.level as usize);
                output.push_str(&indent);
                output.push_str("- ");
                output.push_str(&block.text);
                output.push('\n');
                if let Some(comment) = font_comment(&block.dominant_font) {
                    output.push_str(&indent);
                    output.push_str(&comment);
                    output.push('\n');
                }
            }
            ContentNode::Table(table) => {
                let markup = write_markup_table(table, true);
                if !markup.is_empty() {
                    output.push('\n');
                    output.push_str(&markup);
                    output.push('\n');
                }
                output.push('\n');
            }
            ContentNode::Image { path } => {
                output.push('\n');
                output.push_str(&format!("![Image]({path})\n\n"));
            }
        }
    }

    output.push('\n');
}

/// Font comment for display, emitted only when there is something to say.
fn font_comment(font: &FontInfo) -> Option<String> {
    match (&font.name, font.size_pt) {
        (None, None) => None,
        (Some(name), Some(size)) => Some(format!("<!-- Font: {name}, Size: {size}pt -->")),
        (Some(name), None) => Some(format!("<!-- Font: {name} -->")),
        (None, Some(size)) => Some(format!("<!-- Font Size: {size}pt -->")),
    }
}
