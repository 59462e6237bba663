//! API pass: the intent service and the REST service interface.

use crate::error::GeneratorError;
use crate::template_engine::{names, TemplateRenderer};

use super::{Emitter, GenerationContext};

pub(crate) fn generate<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let api_dir = cx.layout().api_dir(cx.config().project_package_id());
    let ctx = cx.model_context()?;
    out.emit(names::INTENT_SERVICE, &ctx, api_dir.join("ApiService.java"))?;
    out.emit(names::REST_SERVICE, &ctx, api_dir.join("RestService.java"))
}
