use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    compose::compositor::{ComposeOpts, Compositor},
    foundation::core::{Pos2, Size2},
    foundation::error::{LayerStackError, LayerStackResult},
    sort::natural::natural_sort,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One positioned, sized image reference within a layer.
pub struct ImageComponent {
    /// Image file path, relative to the template's base directory.
    pub path: PathBuf,
    /// Size the image is resampled to before pasting.
    pub size: Size2,
    /// Canvas offset of the image's top-left corner.
    pub position: Pos2,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
/// Components painted in order: later entries land on top of earlier ones.
pub struct Layer {
    /// Components in paint order.
    pub components: Vec<ImageComponent>,
}

impl Layer {
    /// Number of components in the layer.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` when the layer paints nothing.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A parsed, immutable layer stack ready to be composed.
///
/// Build one with [`Template::from_path`] (relative paths resolve next to the
/// template file) or [`Template::from_value`] / [`Template::from_json_str`]
/// (relative paths resolve against the current directory unless
/// [`Template::with_base_dir`] says otherwise).
pub struct Template {
    size: Size2,
    layers: BTreeMap<String, Layer>,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(serde::Deserialize)]
struct RawTemplate {
    #[serde(default)]
    size: Option<Size2>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    layers: Option<BTreeMap<String, Vec<RawComponent>>>,
}

#[derive(serde::Deserialize)]
struct RawComponent {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    size: Option<Size2>,
    #[serde(default)]
    position: Option<Pos2>,
}

impl Template {
    /// Build a template directly from typed parts.
    pub fn new(size: Size2, layers: BTreeMap<String, Layer>) -> Self {
        Self {
            size,
            layers,
            base_dir: PathBuf::from("."),
        }
    }

    /// Parse a template from an already-decoded JSON document.
    ///
    /// The input is consumed; nothing is written back into it.
    pub fn from_value(value: serde_json::Value) -> LayerStackResult<Self> {
        if !value.is_object() {
            return Err(LayerStackError::malformed("template must be a JSON object"));
        }
        let raw: RawTemplate =
            serde_json::from_value(value).map_err(|e| LayerStackError::malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse a template from JSON text.
    pub fn from_json_str(json: &str) -> LayerStackResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LayerStackError::invalid_json(e.to_string()))?;
        Self::from_value(value)
    }

    /// Read and parse a template file; component paths resolve against its directory.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> LayerStackResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read template '{}'", path.display()))?;
        let base_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let template = Self::from_json_str(&json)?.with_base_dir(base_dir);
        tracing::debug!(
            layers = template.layers.len(),
            width = template.size.width,
            height = template.size.height,
            "template loaded"
        );
        Ok(template)
    }

    fn from_raw(raw: RawTemplate) -> LayerStackResult<Self> {
        let Some(raw_layers) = raw.layers else {
            return Err(LayerStackError::malformed("missing required key `layers`"));
        };

        let size = match (raw.size, raw.width, raw.height) {
            (Some(size), _, _) => size,
            (None, Some(width), Some(height)) => Size2::new(width, height),
            _ => return Err(LayerStackError::MissingCanvasSize),
        };

        let mut layers = BTreeMap::new();
        for (key, raw_components) in raw_layers {
            let components = raw_components
                .into_iter()
                .enumerate()
                .map(|(idx, c)| component_from_raw(&key, idx, c))
                .collect::<LayerStackResult<Vec<_>>>()?;
            layers.insert(key, Layer { components });
        }

        Ok(Self::new(size, layers))
    }

    /// Replace the directory relative component paths resolve against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Canvas size.
    pub fn size(&self) -> Size2 {
        self.size
    }

    /// Layers keyed by their template key (map order, not paint order).
    pub fn layers(&self) -> &BTreeMap<String, Layer> {
        &self.layers
    }

    /// Layers in paint order: keys sorted naturally, bottom-most first.
    pub fn ordered_layers(&self) -> Vec<(&str, &Layer)> {
        natural_sort(self.layers.keys().map(String::as_str))
            .into_iter()
            .map(|key| (key, &self.layers[key]))
            .collect()
    }

    /// Directory relative component paths resolve against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Filesystem path of `component`'s image.
    pub fn resolve_path(&self, component: &ImageComponent) -> PathBuf {
        self.base_dir.join(&component.path)
    }

    /// Flatten this template into one image.
    pub fn compose(&self, opts: &ComposeOpts) -> LayerStackResult<image::RgbaImage> {
        Compositor::new(opts.clone()).compose(self)
    }
}

fn component_from_raw(
    layer: &str,
    idx: usize,
    raw: RawComponent,
) -> LayerStackResult<ImageComponent> {
    let missing = |field: &str| {
        LayerStackError::malformed(format!(
            "layer '{layer}' component {idx} is missing `{field}`"
        ))
    };
    Ok(ImageComponent {
        path: PathBuf::from(raw.path.ok_or_else(|| missing("path"))?),
        size: raw.size.ok_or_else(|| missing("size"))?,
        position: raw.position.ok_or_else(|| missing("position"))?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
