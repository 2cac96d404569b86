//! Parsers for x/y sample series and neighbourhood outline files.

pub mod data;

pub use data::error::{ParseError, ParseWarning, WarningKind};
pub use data::model::{Bounds, Coordinate, Neighbourhood, NeighbourhoodMap, SeriesData};
pub use data::neighbourhood::parse_neighbourhoods;
pub use data::neighbourhood::{ParseOptions, ParseReport};
pub use data::series::parse_series;
