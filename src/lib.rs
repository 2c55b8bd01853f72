//! layerstack flattens a JSON template of named image layers into one RGBA image.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: template JSON -> [`Template`] (canvas size plus layers of
//!    positioned, sized [`ImageComponent`]s), validated once up front.
//! 2. **Order**: layer keys are sorted with [`natural_sort`], so `"layer2"`
//!    paints before `"layer10"`.
//! 3. **Compose**: [`Compositor`] loads, resizes and alpha-composites each
//!    component onto a transparent canvas, returning an [`image::RgbaImage`].
//!
//! Composition is single-threaded and deterministic for a given template and
//! set of image files. Any error aborts the whole run; no partial canvas is returned.
//!
//! ```no_run
//! use layerstack::{ComposeOpts, Template};
//!
//! let template = Template::from_path("art/card.json".as_ref())?;
//! let image = template.compose(&ComposeOpts::default())?;
//! layerstack::save_png(&image, "out/card.png".as_ref())?;
//! # Ok::<(), layerstack::LayerStackError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod foundation;
mod output;
mod sort;
mod template;

pub use assets::decode::{RESIZE_FILTER, decode_image, fit_to_size, load_image};
pub use compose::compositor::{ComposeOpts, Compositor, compose};
pub use foundation::core::{Pos2, Size2};
pub use foundation::error::{LayerStackError, LayerStackResult};
pub use output::preview::{save_png, show};
pub use sort::natural::{DigitRun, NaturalKey, Token, natural_cmp, natural_sort};
pub use template::model::{ImageComponent, Layer, Template};
