//! `<Entity>ListFragment.java` per entity.

use crate::error::GeneratorError;
use crate::template_engine::{names, TemplateRenderer};

use super::{Emitter, GenerationContext};

pub(crate) fn generate<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let dir = cx.layout().fragment_dir(cx.config().project_package_id());
    for entity in cx.entities() {
        out.emit(
            names::FRAGMENT,
            &cx.entity_context(entity)?,
            dir.join(format!("{}ListFragment.java", entity.name_camel_case)),
        )?;
    }
    Ok(())
}
