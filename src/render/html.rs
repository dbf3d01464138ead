// src/render/html.rs
//! Print-ready HTML and plain-text writers for [`Document`]

use handlebars::html_escape;

use crate::render::document::{Block, Document, Entry, PageLayout, Section, SidebarSide, Theme};
use crate::templates::config::HeaderStyle;

/// Keep only characters that are safe inside a CSS declaration value
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || " #,-.()%'_".contains(*c))
        .collect()
}

fn header_class(style: HeaderStyle) -> &'static str {
    match style {
        HeaderStyle::Left => "header-left",
        HeaderStyle::Centered => "header-centered",
        HeaderStyle::Banner => "header-banner",
        HeaderStyle::Split => "header-split",
    }
}

fn stylesheet(theme: &Theme, layout: PageLayout) -> String {
    let mut css = String::new();

    css.push_str(&format!(
        "@page {{ size: A4; margin: {margin}pt; }}\n\
         * {{ box-sizing: border-box; }}\n\
         body {{ margin: 0; background: {bg}; color: {text}; font-family: {font}; font-size: {body}pt; line-height: {lh}; }}\n\
         .resume {{ max-width: 210mm; margin: 0 auto; padding: {margin}pt; }}\n\
         h1, h2, h3 {{ font-family: {heading_font}; margin: 0; }}\n\
         h1 {{ font-size: {h1}pt; color: {primary}; }}\n\
         h2 {{ font-size: {h2:.1}pt; color: {primary}; border-bottom: 1px solid {secondary}; padding-bottom: 2pt; margin-bottom: {item}pt;{transform} }}\n\
         h3 {{ font-size: {body:.1}pt; }}\n\
         .headline {{ color: {secondary}; margin: 2pt 0; }}\n\
         .contact {{ list-style: none; padding: 0; margin: 4pt 0 0; display: flex; flex-wrap: wrap; gap: 4pt 12pt; }}\n\
         .resume-header {{ margin-bottom: {gap}pt; }}\n\
         .header-centered {{ text-align: center; }}\n\
         .header-centered .contact {{ justify-content: center; }}\n\
         .header-banner {{ background: {primary}; color: {bg}; padding: 16pt; }}\n\
         .header-banner h1, .header-banner .headline {{ color: {bg}; }}\n\
         .header-split {{ display: flex; justify-content: space-between; align-items: flex-end; }}\n\
         .header-split .contact {{ flex-direction: column; text-align: right; }}\n\
         .section {{ margin-bottom: {gap}pt; break-inside: avoid-page; }}\n\
         .entry {{ margin-bottom: {item}pt; }}\n\
         .entry-head {{ display: flex; justify-content: space-between; gap: 8pt; }}\n\
         .meta {{ color: {secondary}; white-space: nowrap; }}\n\
         .subheading {{ margin: 0; font-style: italic; }}\n\
         .description {{ margin: 2pt 0; }}\n\
         .tags {{ list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 4pt; }}\n\
         .tags li {{ border: 1px solid {secondary}; border-radius: 3pt; padding: 1pt 5pt; }}\n\
         .pairs {{ display: grid; grid-template-columns: auto 1fr; gap: 2pt 8pt; margin: 0; }}\n\
         .pairs dt {{ font-weight: 600; }}\n\
         .pairs dd {{ margin: 0; }}\n",
        margin = theme.page_margin,
        bg = css_value(&theme.background_color),
        text = css_value(&theme.text_color),
        font = css_value(&theme.font_family),
        heading_font = css_value(&theme.heading_font_family),
        body = theme.body_size,
        lh = theme.line_height,
        h1 = theme.heading_size,
        h2 = (theme.heading_size * 0.65).max(theme.body_size),
        primary = css_value(&theme.primary_color),
        secondary = css_value(&theme.secondary_color),
        gap = theme.section_gap,
        item = theme.item_gap,
        transform = if theme.uppercase_headings {
            " text-transform: uppercase; letter-spacing: 1pt;"
        } else {
            ""
        },
    ));

    if let PageLayout::Columns { side, sidebar_width } = layout {
        let sidebar_width = sidebar_width.clamp(15, 50);
        let columns = match side {
            SidebarSide::Left => format!("{}% 1fr", sidebar_width),
            SidebarSide::Right => format!("1fr {}%", sidebar_width),
        };
        css.push_str(&format!(
            ".resume-body {{ display: grid; grid-template-columns: {}; gap: {}pt; }}\n",
            columns, theme.section_gap
        ));
    }

    css.push_str(
        "@media print {\n  body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }\n  .resume { padding: 0; max-width: none; }\n}\n",
    );
    css
}

fn write_entry(html: &mut String, entry: &Entry) {
    html.push_str("<div class=\"entry\"><div class=\"entry-head\">");
    html.push_str(&format!("<h3>{}</h3>", html_escape(&entry.heading)));
    if let Some(meta) = &entry.meta {
        html.push_str(&format!("<span class=\"meta\">{}</span>", html_escape(meta)));
    }
    html.push_str("</div>");

    if let Some(subheading) = &entry.subheading {
        html.push_str(&format!(
            "<p class=\"subheading\">{}</p>",
            html_escape(subheading)
        ));
    }
    if let Some(description) = &entry.description {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>",
            html_escape(description)
        ));
    }
    write_list(html, "bullets", &entry.bullets);
    html.push_str("</div>");
}

fn write_list(html: &mut String, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!("<ul class=\"{}\">", class));
    for item in items {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html.push_str("</ul>");
}

fn write_section(html: &mut String, section: &Section) {
    html.push_str(&format!(
        "<section class=\"section section-{}\"><h2>{}</h2>",
        section.kind.as_str(),
        html_escape(&section.title)
    ));

    for block in &section.blocks {
        match block {
            Block::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>", html_escape(text)));
            }
            Block::Entry(entry) => write_entry(html, entry),
            Block::Tags(tags) => write_list(html, "tags", tags),
            Block::Bullets(items) => write_list(html, "bullets", items),
            Block::Pairs(rows) => {
                html.push_str("<dl class=\"pairs\">");
                for (label, value) in rows {
                    html.push_str(&format!("<dt>{}</dt>", html_escape(label)));
                    html.push_str(&format!("<dd>{}</dd>", html_escape(value)));
                }
                html.push_str("</dl>");
            }
        }
    }

    html.push_str("</section>");
}

fn write_column(html: &mut String, class: &str, sections: &[Section]) {
    html.push_str(&format!("<div class=\"{}\">", class));
    for section in sections {
        write_section(html, section);
    }
    html.push_str("</div>");
}

impl Document {
    /// Standalone HTML page; printing it from a browser produces the PDF export
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", html_escape(&self.title)));
        html.push_str(&format!(
            "<style>\n{}</style>\n</head>\n<body>\n",
            stylesheet(&self.theme, self.layout)
        ));
        html.push_str(&format!(
            "<article class=\"resume template-{}\">\n",
            css_value(&self.template_id).replace(' ', "-")
        ));

        // Header
        html.push_str(&format!(
            "<header class=\"resume-header {}\"><div>",
            header_class(self.header.style)
        ));
        html.push_str(&format!("<h1>{}</h1>", html_escape(&self.header.name)));
        if let Some(headline) = &self.header.headline {
            html.push_str(&format!("<p class=\"headline\">{}</p>", html_escape(headline)));
        }
        html.push_str("</div>");
        write_list(&mut html, "contact", &self.header.contact);
        html.push_str("</header>\n");

        match self.layout {
            PageLayout::SingleColumn => {
                html.push_str("<div class=\"resume-body layout-single\">");
                write_column(&mut html, "main", &self.main);
                if !self.sidebar.is_empty() {
                    write_column(&mut html, "sidebar", &self.sidebar);
                }
            }
            PageLayout::Columns { side, .. } => {
                html.push_str("<div class=\"resume-body layout-columns\">");
                match side {
                    SidebarSide::Left => {
                        write_column(&mut html, "sidebar", &self.sidebar);
                        write_column(&mut html, "main", &self.main);
                    }
                    SidebarSide::Right => {
                        write_column(&mut html, "main", &self.main);
                        write_column(&mut html, "sidebar", &self.sidebar);
                    }
                }
            }
        }

        html.push_str("</div>\n</article>\n</body>\n</html>\n");
        html
    }

    /// Linear plain-text rendering, main column first; used for ATS scoring
    pub fn to_plain_text(&self) -> String {
        let mut text = String::new();

        text.push_str(&self.header.name.to_uppercase());
        text.push('\n');
        if let Some(headline) = &self.header.headline {
            text.push_str(headline);
            text.push('\n');
        }
        if !self.header.contact.is_empty() {
            text.push_str(&self.header.contact.join(" | "));
            text.push('\n');
        }

        for section in self.sections() {
            text.push('\n');
            text.push_str(&section.title.to_uppercase());
            text.push('\n');

            for block in &section.blocks {
                match block {
                    Block::Paragraph(paragraph) => {
                        text.push_str(paragraph);
                        text.push('\n');
                    }
                    Block::Entry(entry) => {
                        let mut line = entry.heading.clone();
                        if let Some(subheading) = &entry.subheading {
                            line.push_str(&format!(", {}", subheading));
                        }
                        if let Some(meta) = &entry.meta {
                            line.push_str(&format!(" ({})", meta));
                        }
                        text.push_str(&line);
                        text.push('\n');
                        if let Some(description) = &entry.description {
                            text.push_str(description);
                            text.push('\n');
                        }
                        for bullet in &entry.bullets {
                            text.push_str(&format!("- {}\n", bullet));
                        }
                    }
                    Block::Tags(items) => {
                        text.push_str(&items.join(", "));
                        text.push('\n');
                    }
                    Block::Bullets(items) => {
                        for item in items {
                            text.push_str(&format!("- {}\n", item));
                        }
                    }
                    Block::Pairs(rows) => {
                        for (label, value) in rows {
                            if value.is_empty() {
                                text.push_str(&format!("{}\n", label));
                            } else {
                                text.push_str(&format!("{}: {}\n", label, value));
                            }
                        }
                    }
                }
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::document::Header;
    use crate::templates::config::SectionKind;

    fn sample_document(layout: PageLayout) -> Document {
        let mut summary = Section::new(SectionKind::Summary, "Summary");
        summary
            .blocks
            .push(Block::Paragraph("Builds <fast> & safe systems".to_string()));

        let mut skills = Section::new(SectionKind::Skills, "Skills");
        skills
            .blocks
            .push(Block::Tags(vec!["Rust".to_string(), "SQL".to_string()]));

        Document {
            title: "Ada - Resume".to_string(),
            template_id: "modern".to_string(),
            theme: Theme::with_palette("#123456", "#abcdef", "#000000", "Georgia, serif"),
            layout,
            header: Header {
                name: "Ada".to_string(),
                headline: Some("Engineer".to_string()),
                contact: vec!["ada@example.com".to_string()],
                style: HeaderStyle::Centered,
            },
            main: vec![summary],
            sidebar: vec![skills],
        }
    }

    #[test]
    fn test_html_escapes_user_content() {
        let html = sample_document(PageLayout::SingleColumn).to_html();
        assert!(html.contains("Builds &lt;fast&gt; &amp; safe systems"));
        assert!(!html.contains("<fast>"));
    }

    #[test]
    fn test_html_escapes_attribute_breaking_characters() {
        let mut document = sample_document(PageLayout::SingleColumn);
        document.header.name = "O'Brien \"Bob\"".to_string();

        let html = document.to_html();
        assert!(html.contains("O&#x27;Brien &quot;Bob&quot;"));
        assert!(!html.contains("\"Bob\""));
    }

    #[test]
    fn test_html_carries_theme_and_print_rules() {
        let html = sample_document(PageLayout::SingleColumn).to_html();
        assert!(html.contains("color: #123456"));
        assert!(html.contains("font-family: Georgia, serif"));
        assert!(html.contains("@page"));
        assert!(html.contains("@media print"));
        assert!(html.contains("header-centered"));
        assert!(html.contains("section-summary"));
    }

    #[test]
    fn test_css_values_are_sanitized() {
        assert_eq!(css_value("red;}</style><script>"), "redstylescript");
        assert_eq!(css_value("#fff"), "#fff");
    }

    #[test]
    fn test_sidebar_left_comes_first() {
        let html = sample_document(PageLayout::Columns {
            side: SidebarSide::Left,
            sidebar_width: 30,
        })
        .to_html();

        let sidebar = html.find("class=\"sidebar\"").unwrap();
        let main = html.find("class=\"main\"").unwrap();
        assert!(sidebar < main);
        assert!(html.contains("grid-template-columns: 30% 1fr"));
    }

    #[test]
    fn test_plain_text_is_linear() {
        let text = sample_document(PageLayout::SingleColumn).to_plain_text();
        assert_eq!(
            text,
            "ADA\nEngineer\nada@example.com\n\nSUMMARY\nBuilds <fast> & safe systems\n\nSKILLS\nRust, SQL\n"
        );
    }
}
