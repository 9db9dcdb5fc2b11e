use log::debug;
use web_sys::Document;

use crate::error::Result;
use crate::projects::{self, Project};

const HEADERS_ID: &str = "headers";
const PORTFOLIO_ID: &str = "portfolio";

/// Build the fixed headers and the project rows from the bundled list.
pub fn render(document: &Document, projects: &[Project]) -> Result<()> {
    let (Some(headers), Some(portfolio)) = (
        document.get_element_by_id(HEADERS_ID),
        document.get_element_by_id(PORTFOLIO_ID),
    ) else {
        debug!("no project listing on this page");
        return Ok(());
    };

    for (index, project) in projects.iter().enumerate() {
        let header = document.create_element("div")?;
        header.set_class_name("project-header");
        header.set_attribute("data-index", &index.to_string())?;
        header.set_inner_html(&project.header_markup());
        headers.append_child(&header)?;

        let row = document.create_element("section")?;
        row.set_class_name("project-row");
        row.set_id(&projects::row_id(index));
        row.set_inner_html(&project.row_markup());
        portfolio.append_child(&row)?;
    }
    debug!("rendered {} project(s)", projects.len());
    Ok(())
}
