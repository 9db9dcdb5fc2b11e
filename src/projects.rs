//! Project list shown on the index page.
//!
//! The rows and the fixed headers are generated from this list at startup;
//! `index.html` only carries the empty containers.

use serde::Deserialize;

use crate::error::Result;

const PROJECTS_JSON: &str = include_str!("../static/projects.json");

pub const FALLBACK_LABEL: &str = "PROJECT →";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub image: String,
}

impl Project {
    /// Center-label text, e.g. `"MACAW DIGITAL →"`.
    pub fn label(&self) -> String {
        format!("{} →", self.name.to_uppercase())
    }

    /// Inner markup of the fixed header bar.
    pub fn header_markup(&self) -> String {
        format!(
            "{} <span>#{}</span>",
            escape_html(&self.name.to_uppercase()),
            escape_html(&self.id)
        )
    }

    /// Inner markup of the project's full-height row.
    pub fn row_markup(&self) -> String {
        let name = escape_html(&self.name);
        format!(
            concat!(
                r#"<div class="column col-1"><h2 class="project-name">{name}</h2></div>"#,
                r#"<div class="column col-2"><img src="{image}" alt="{name}" class="project-image"></div>"#,
                r#"<div class="column col-3"><span class="project-number">#{id}</span></div>"#,
                r#"<div class="column col-4">"#,
                r#"<div class="date-item"><p class="date-label">INICIO</p><p class="date-value">{start}</p></div>"#,
                r#"<div class="date-item"><p class="date-label">FINAL</p><p class="date-value">{end}</p></div>"#,
                "</div>",
            ),
            name = name,
            image = escape_html(&self.image),
            id = escape_html(&self.id),
            start = escape_html(&self.start_date),
            end = escape_html(&self.end_date),
        )
    }
}

/// DOM id of the row for list position `index`.
pub fn row_id(index: usize) -> String {
    format!("project-{}", index + 1)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The bundled project list, in page order.
pub fn bundled() -> Result<Vec<Project>> {
    parse(PROJECTS_JSON)
}

pub fn parse(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

/// Label for row `index`, or the generic one past the end of the list.
pub fn label_for(projects: &[Project], index: usize) -> String {
    projects
        .get(index)
        .map_or_else(|| FALLBACK_LABEL.to_string(), Project::label)
}
