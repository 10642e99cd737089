use crate::battle::state::TurnRng;
use crate::critter::CritterInst;
use crate::errors::{SpeciesDataError, SpeciesDataResult};
use crate::species::all_templates;

/// Spawn a fresh wild critter, picking a catalog template uniformly at random.
///
/// The returned instance is an independent copy at full HP and level 1; the
/// template itself is never touched.
pub fn generate_wild_encounter(rng: &mut TurnRng) -> SpeciesDataResult<CritterInst> {
    let templates = all_templates()?;
    if templates.is_empty() {
        return Err(SpeciesDataError::MalformedData(
            "the critter catalog is empty".to_string(),
        ));
    }

    let template = &templates[rng.pick_index(templates.len(), "encounter species")];
    tracing::debug!(species = %template.id(), "wild encounter generated");
    Ok(CritterInst::from_template(template))
}
