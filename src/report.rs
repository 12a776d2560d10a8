//! HTML report generation.
//!
//! The template holds a single [`PLACEHOLDER`] marker. Each meal's table
//! replaces the marker and, except for the last meal, re-inserts it on the
//! following line so the next meal has somewhere to go.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Result;
use crate::state::Catalog;

/// Marker in the template replaced by meal tables.
pub const PLACEHOLDER: &str = "$meal";

/// Result of substituting a catalog into a template.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// The final document.
    pub html: String,

    /// Names of meals whose table was inserted, in order.
    pub rendered: Vec<String>,

    /// Names of meals skipped because no marker was left.
    pub skipped: Vec<String>,
}

impl RenderOutcome {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Substitute every meal of the catalog into the template, in catalog order.
///
/// An empty catalog returns the template unchanged.
pub fn render_report(template: &str, catalog: &Catalog) -> RenderOutcome {
    let mut html = template.to_string();
    let mut rendered = Vec::new();
    let mut skipped = Vec::new();
    let last = catalog.len().saturating_sub(1);
    // Substitution never looks before the re-inserted marker, so a marker
    // inside an already rendered table is left alone.
    let mut cursor = 0;

    for (i, meal) in catalog.meals().iter().enumerate() {
        let Some(offset) = html[cursor..].find(PLACEHOLDER) else {
            warn!(
                "no {} placeholder left in template, skipping {}",
                PLACEHOLDER,
                meal.name()
            );
            skipped.push(meal.name().to_string());
            continue;
        };
        let start = cursor + offset;

        let mut table = meal.to_html_table();
        if i < last {
            table.push('\n');
            cursor = start + table.len();
            table.push_str(PLACEHOLDER);
            debug!("prepared output for {}, more to come", meal.name());
        } else {
            cursor = start + table.len();
            debug!("prepared output for {}, that was the last", meal.name());
        }

        html.replace_range(start..start + PLACEHOLDER.len(), &table);
        rendered.push(meal.name().to_string());
    }

    RenderOutcome {
        html,
        rendered,
        skipped,
    }
}

/// Render the catalog against the template file and write the output file.
///
/// The output is first overwritten with a copy of the template, then with
/// the rendered document. Parent directories are created as needed.
pub fn write_report<T, O>(template_path: T, output_path: O, catalog: &Catalog) -> Result<RenderOutcome>
where
    T: AsRef<Path>,
    O: AsRef<Path>,
{
    let output_path = output_path.as_ref();
    let template = fs::read_to_string(template_path)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, &template)?;

    let outcome = render_report(&template, catalog);
    fs::write(output_path, &outcome.html)?;

    info!(
        "wrote report with {} of {} meals to {}",
        outcome.rendered.len(),
        catalog.len(),
        output_path.display()
    );
    Ok(outcome)
}

/// Open the report in the host's default viewer.
pub fn open_report<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    open::that(path)?;
    Ok(())
}
