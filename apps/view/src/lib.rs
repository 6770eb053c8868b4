// Pure rendering core of the region activity view, shared by the browser
// shell and the headless renderer.
pub mod config;
pub mod error;
pub mod frequency;
pub mod html;
pub mod location;
pub mod lookup;
pub mod model;
pub mod page;
pub mod render;
pub mod tooltip;

pub use config::ViewConfig;
pub use error::{FrequencyInputError, LoadError};
pub use frequency::FrequencyHz;
pub use location::{ApiEndpoints, PageLocation};
pub use lookup::FrequencyLookup;
pub use model::{ActivityWindow, BandActivity, CallInfo, RegionSnapshot};
pub use page::{RegionView, SettledLoad};
