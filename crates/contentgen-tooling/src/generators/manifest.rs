//! Manifest snippet listing the provider and service declarations to paste
//! into `AndroidManifest.xml`.

use crate::error::GeneratorError;
use crate::template_engine::{names, TemplateRenderer};

use super::{Emitter, GenerationContext};

pub(crate) fn generate<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    out.emit(
        names::MANIFEST,
        &cx.model_context()?,
        cx.layout().manifest_file(),
    )
}
