use image::RgbaImage;

use crate::{
    assets::decode::{fit_to_size, load_image},
    foundation::error::LayerStackResult,
    template::model::{ImageComponent, Template},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
/// Composition options.
///
/// No options are recognised yet; the type is reserved for future parameters
/// such as a background colour or resampling filter. Unknown keys are ignored
/// when deserialized, so option documents written against newer versions still load.
pub struct ComposeOpts {}

/// Flattens a [`Template`] into a single RGBA image.
///
/// The canvas starts fully transparent. Layers are painted in natural-sort key
/// order and components in listed order, each resized to its target size and
/// alpha-composited "over" the canvas at its position. Anything outside the
/// canvas is clipped.
#[derive(Clone, Debug, Default)]
pub struct Compositor {
    opts: ComposeOpts,
}

impl Compositor {
    /// Build a compositor with the given options.
    pub fn new(opts: ComposeOpts) -> Self {
        Self { opts }
    }

    /// Options this compositor was built with.
    pub fn opts(&self) -> &ComposeOpts {
        &self.opts
    }

    /// Compose `template`. Any failure aborts the whole composition.
    #[tracing::instrument(
        skip_all,
        fields(width = template.size().width, height = template.size().height)
    )]
    pub fn compose(&self, template: &Template) -> LayerStackResult<RgbaImage> {
        let (width, height) = template.size().as_tuple();
        let mut canvas = RgbaImage::new(width, height);

        for (key, layer) in template.ordered_layers() {
            tracing::debug!(layer = key, components = layer.len(), "paint layer");
            for component in &layer.components {
                paint_component(&mut canvas, template, component)?;
            }
        }

        Ok(canvas)
    }
}

fn paint_component(
    canvas: &mut RgbaImage,
    template: &Template,
    component: &ImageComponent,
) -> LayerStackResult<()> {
    let path = template.resolve_path(component);
    let img = load_image(&path)?;

    if component.size.is_empty() {
        tracing::debug!(path = %path.display(), "zero-area component skipped");
        return Ok(());
    }

    let img = fit_to_size(img, component.size);
    tracing::debug!(
        path = %path.display(),
        x = component.position.x,
        y = component.position.y,
        "paste"
    );
    image::imageops::overlay(canvas, &img, component.position.x, component.position.y);
    Ok(())
}

/// Compose `template` with `opts`.
pub fn compose(template: &Template, opts: &ComposeOpts) -> LayerStackResult<RgbaImage> {
    Compositor::new(opts.clone()).compose(template)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
