pub mod encoder;
pub mod options;
pub mod series;
pub mod value;

pub use encoder::JsEncoder;
pub use options::{OptionGroup, OptionNode};
pub use series::{Series, SeriesType};
pub use value::{JsValue, RawJs};
