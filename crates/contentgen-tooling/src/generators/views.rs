//! Views pass: a view class and its XML layout per entity.

use crate::error::GeneratorError;
use crate::template_engine::{names, TemplateRenderer};

use super::{Emitter, GenerationContext};

pub(crate) fn generate<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let view_dir = cx.layout().view_dir(cx.config().project_package_id());
    let layout_dir = cx.layout().layout_dir();
    for entity in cx.entities() {
        let ctx = cx.entity_context(entity)?;
        out.emit(
            names::VIEW,
            &ctx,
            view_dir.join(format!("{}View.java", entity.name_camel_case)),
        )?;
        out.emit(
            names::LAYOUT,
            &ctx,
            layout_dir.join(format!("view_{}.xml", entity.name_lower_case)),
        )?;
    }
    Ok(())
}
