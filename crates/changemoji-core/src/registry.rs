//! Built-in plugins, looked up by the names used in configuration.

use changemoji_classifier_conventional::ConventionalClassifier;
use changemoji_config::{CategoryOverride, Config};
use changemoji_plugin::{
    CategoryDescriptor, CategoryTable, ChangelogRenderer, CommitClassifier, PluginError,
};
use changemoji_renderer_emoji::EmojiRenderer;
use tracing::debug;

use crate::CoreResult;

/// Returns the built-in classifier with the given name.
///
/// # Errors
///
/// Returns an error if no classifier has that name.
pub fn classifier_by_name(name: &str) -> CoreResult<Box<dyn CommitClassifier>> {
    match name {
        "conventional" => Ok(Box::new(ConventionalClassifier::new())),
        _ => Err(PluginError::NotFound {
            kind: "classifier",
            name: name.to_string(),
        }
        .into()),
    }
}

/// Builds the renderer named in the configuration, with its options and the
/// category table including overrides.
///
/// # Errors
///
/// Returns an error if no renderer has that name or an override is invalid.
pub fn renderer_from_config(config: &Config) -> CoreResult<Box<dyn ChangelogRenderer>> {
    let table = category_table(&config.categories)?;

    match config.renderer.name.as_str() {
        "emoji" => Ok(Box::new(
            EmojiRenderer::new()
                .with_table(table)
                .with_config(config.renderer.options.clone()),
        )),
        name => Err(PluginError::NotFound {
            kind: "renderer",
            name: name.to_string(),
        }
        .into()),
    }
}

/// Applies configuration overrides to the built-in category table.
///
/// # Errors
///
/// Returns an error if a new category has no title or its key is not a
/// lowercase token.
pub fn category_table(overrides: &[CategoryOverride]) -> CoreResult<CategoryTable> {
    let mut table = CategoryTable::default();

    for patch in overrides {
        let descriptor = match table.get(&patch.key) {
            Some(existing) => apply(existing.clone(), patch),
            None => {
                let title = patch.title.clone().ok_or_else(|| {
                    PluginError::InvalidCategory(format!(
                        "new category `{}` needs a title",
                        patch.key
                    ))
                })?;
                let fallback = table.fallback();
                apply(
                    CategoryDescriptor::new(
                        patch.key.clone(),
                        fallback.emoji.clone(),
                        fallback.shortcode.clone(),
                        title,
                        fallback.order,
                    ),
                    patch,
                )
            }
        };

        debug!(key = %descriptor.key, order = descriptor.order, "category override");
        table.insert(descriptor)?;
    }

    Ok(table)
}

fn apply(mut descriptor: CategoryDescriptor, patch: &CategoryOverride) -> CategoryDescriptor {
    if let Some(emoji) = &patch.emoji {
        descriptor.emoji.clone_from(emoji);
    }
    if let Some(shortcode) = &patch.shortcode {
        descriptor.shortcode.clone_from(shortcode);
    }
    if let Some(title) = &patch.title {
        descriptor.title.clone_from(title);
    }
    if let Some(order) = patch.order {
        descriptor.order = order;
    }
    descriptor
}
