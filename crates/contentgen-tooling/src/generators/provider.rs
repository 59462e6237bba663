//! Content provider pass: column contracts, cursor/content-values/selection
//! wrappers with their base classes, enums, the provider and the SQLite helper.

use crate::config::ProviderSettings;
use crate::error::GeneratorError;
use crate::template_engine::{names, TemplateRenderer};

use super::{Emitter, GenerationContext};

pub(crate) fn generate<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    provider: &ProviderSettings,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    generate_columns(cx, provider, out)?;
    generate_wrappers(cx, provider, out)?;
    generate_content_provider(cx, provider, out)?;
    generate_sqlite_helper(cx, provider, out)
}

/// `<Entity>Columns.java` per entity.
pub(crate) fn generate_columns<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    provider: &ProviderSettings,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    for entity in cx.entities() {
        let dir = cx
            .layout()
            .entity_dir(&provider.java_package, &entity.name_lower_case);
        let ctx = cx.entity_context(entity)?;
        out.emit(
            names::COLUMNS,
            &ctx,
            dir.join(format!("{}Columns.java", entity.name_camel_case)),
        )?;
    }
    Ok(())
}

/// The three `Abstract*` base classes, then per entity the cursor,
/// content-values and selection wrappers plus one file per enum field.
pub(crate) fn generate_wrappers<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    provider: &ProviderSettings,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let base_dir = cx.layout().provider_base_dir(&provider.java_package);
    let base = cx.base_context()?;
    for (template, class) in [
        (names::ABSTRACT_CURSOR, "AbstractCursor"),
        (names::ABSTRACT_CONTENT_VALUES, "AbstractContentValues"),
        (names::ABSTRACT_SELECTION, "AbstractSelection"),
    ] {
        out.emit(template, &base, base_dir.join(format!("{class}.java")))?;
    }

    for entity in cx.entities() {
        let dir = cx
            .layout()
            .entity_dir(&provider.java_package, &entity.name_lower_case);
        let mut ctx = cx.entity_context(entity)?;

        for (template, suffix) in [
            (names::CURSOR, "Cursor"),
            (names::CONTENT_VALUES, "ContentValues"),
            (names::SELECTION, "Selection"),
        ] {
            out.emit(
                template,
                &ctx,
                dir.join(format!("{}{suffix}.java", entity.name_camel_case)),
            )?;
        }

        for field in entity.fields.iter().filter(|f| f.is_enum) {
            let Some(enum_name) = field.enum_name else {
                continue;
            };
            ctx.insert("field", field)?;
            out.emit(names::ENUM, &ctx, dir.join(format!("{enum_name}.java")))?;
        }
    }
    Ok(())
}

pub(crate) fn generate_content_provider<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    provider: &ProviderSettings,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let path = cx
        .layout()
        .package_dir(&provider.java_package)
        .join(format!("{}.java", provider.class_name));
    out.emit(names::CONTENT_PROVIDER, &cx.model_context()?, path)
}

pub(crate) fn generate_sqlite_helper<R: TemplateRenderer + ?Sized>(
    cx: &GenerationContext<'_>,
    provider: &ProviderSettings,
    out: &mut Emitter<'_, R>,
) -> Result<(), GeneratorError> {
    let path = cx
        .layout()
        .package_dir(&provider.java_package)
        .join(format!("{}.java", provider.sqlite_helper_class_name));
    out.emit(names::SQLITE_HELPER, &cx.model_context()?, path)
}
