//! The scrollable portfolio document.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use folio_core::content::{EXPERIENCE, PROFILE, PROJECTS};
use folio_core::Section;
use folio_tui_components::{wrap_text_indented, Theme};

const INDENT: &str = "  ";

/// Rendered document lines plus the first line of each section.
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(Section, usize)>,
}

impl Document {
    /// Lay the document out for a given text width.
    pub fn build(width: usize, theme: &Theme) -> Self {
        let mut doc = Self {
            lines: Vec::new(),
            anchors: Vec::new(),
        };

        for section in Section::all() {
            doc.anchors.push((*section, doc.lines.len()));
            match section {
                Section::Hero => doc.hero(width, theme),
                Section::About => doc.about(width, theme),
                Section::Projects => doc.projects(width, theme),
                Section::Experience => doc.experience(width, theme),
                Section::Contact => doc.contact(width, theme),
            }
        }

        doc
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn heading(&mut self, section: Section, theme: &Theme) {
        self.blank();
        self.lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, section.heading()),
            theme.heading_style().add_modifier(Modifier::UNDERLINED),
        )));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, width: usize, indent: &str, theme: &Theme) {
        for line in wrap_text_indented(text, width, indent) {
            self.lines.push(Line::from(Span::styled(line, theme.text_style())));
        }
    }

    fn tags(&mut self, tags: &[&str], width: usize, theme: &Theme) {
        let joined = tags
            .iter()
            .map(|tag| format!("[{}]", tag))
            .collect::<Vec<_>>()
            .join(" ");
        for line in wrap_text_indented(&joined, width, INDENT) {
            self.lines.push(Line::from(Span::styled(line, theme.tag_style())));
        }
    }

    fn hero(&mut self, width: usize, theme: &Theme) {
        self.blank();
        self.lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, PROFILE.headline),
            theme.heading_style(),
        )));
        self.lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, PROFILE.subheadline),
            theme.muted_style().add_modifier(Modifier::BOLD),
        )));
        self.blank();
        self.paragraph(PROFILE.intro, width, INDENT, theme);
        self.blank();
    }

    fn about(&mut self, width: usize, theme: &Theme) {
        self.heading(Section::About, theme);
        for text in PROFILE.about {
            self.paragraph(text, width, INDENT, theme);
            self.blank();
        }
        self.lines.push(Line::from(Span::styled(
            format!("{}Core Skills", INDENT),
            theme.heading_style(),
        )));
        self.tags(PROFILE.skills, width, theme);
        self.blank();
    }

    fn projects(&mut self, width: usize, theme: &Theme) {
        self.heading(Section::Projects, theme);
        for project in PROJECTS {
            let mut title = vec![Span::styled(
                format!("{}{}", INDENT, project.title),
                theme.heading_style(),
            )];
            if let Some(source) = project.source {
                title.push(Span::styled(format!("  source: {}", source), theme.muted_style()));
            }
            if let Some(link) = project.link {
                title.push(Span::styled(format!("  link: {}", link), theme.muted_style()));
            }
            self.lines.push(Line::from(title));
            self.paragraph(project.description, width, INDENT, theme);
            self.tags(project.tech, width, theme);
            self.blank();
        }
    }

    fn experience(&mut self, width: usize, theme: &Theme) {
        self.heading(Section::Experience, theme);
        let indent = format!("{}│ ", INDENT);
        for entry in EXPERIENCE {
            self.lines.push(Line::from(vec![
                Span::styled(indent.clone(), theme.muted_style()),
                Span::styled(entry.role, theme.heading_style()),
                Span::styled(format!("  {}", entry.period), theme.muted_style()),
            ]));
            self.lines.push(Line::from(vec![
                Span::styled(indent.clone(), theme.muted_style()),
                Span::styled(entry.organization, theme.text_style()),
            ]));
            self.paragraph(entry.description, width, &indent, theme);
            self.blank();
        }
    }

    fn contact(&mut self, width: usize, theme: &Theme) {
        self.heading(Section::Contact, theme);
        self.paragraph(PROFILE.contact_blurb, width, INDENT, theme);
        self.blank();
        let mut spans = vec![Span::raw(INDENT)];
        for contact in PROFILE.contacts {
            spans.push(Span::styled(
                format!("[{}]", contact.label),
                theme.tag_style().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        self.lines.push(Line::from(spans));
        self.blank();
    }
}
