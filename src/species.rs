use std::sync::LazyLock;

// Re-export the Species enum from the schema crate
pub use schema::{CritterTemplate, Species};

use crate::errors::{SpeciesDataError, SpeciesDataResult};

// The roster catalog is compiled into the binary and parsed on first use.
const CATALOG_RON: &str = include_str!("../data/critters.ron");

static CATALOG: LazyLock<Result<Vec<CritterTemplate>, SpeciesDataError>> =
    LazyLock::new(|| parse_catalog(CATALOG_RON));

fn parse_catalog(source: &str) -> Result<Vec<CritterTemplate>, SpeciesDataError> {
    let templates: Vec<CritterTemplate> =
        ron::from_str(source).map_err(|e| SpeciesDataError::MalformedData(e.to_string()))?;

    for template in &templates {
        if template.max_hp == 0 || template.moves.is_empty() {
            return Err(SpeciesDataError::MalformedData(format!(
                "template '{}' needs max_hp > 0 and at least one move",
                template.id()
            )));
        }
    }

    Ok(templates)
}

/// All templates in catalog order.
pub fn all_templates() -> SpeciesDataResult<&'static [CritterTemplate]> {
    match &*CATALOG {
        Ok(templates) => Ok(templates.as_slice()),
        Err(err) => Err(err.clone()),
    }
}

/// Look up the template for a species.
pub fn get_template(species: Species) -> SpeciesDataResult<&'static CritterTemplate> {
    all_templates()?
        .iter()
        .find(|template| template.species == species)
        .ok_or(SpeciesDataError::SpeciesNotFound(species))
}
