//! `<Entity>Model.java` per entity.

use crate::error::GeneratorError;
use crate::template_engine::{names, TemplateRenderer};

use super::{Emitter, GenerationContext};

pub(crate) fn generate<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let dir = cx.layout().model_dir(cx.config().project_package_id());
    for entity in cx.entities() {
        out.emit(
            names::MODEL,
            &cx.entity_context(entity)?,
            dir.join(format!("{}Model.java", entity.name_camel_case)),
        )?;
    }
    Ok(())
}
