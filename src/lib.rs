#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod coordinates;
pub mod errors;
pub mod geometry;
pub mod labels;
pub mod ordinates;
pub mod summary;
pub mod units;

pub use config::{render_member_diagram, DiagramConfig, RenderedDiagram};
pub use coordinates::{
    generate_coordinates, make_member_diagram_coords, zero_crossing, MemberDiagram,
};
pub use errors::{ConfigError, DiagramError, ErrorKind};
pub use geometry::{point, signed_area, DiagramPoint, Label, Polygon};
pub use labels::{
    get_label_positions, place_labels, spread_label_heights, LABEL_COLLISION_WINDOW,
    LABEL_SPACING_FACTOR,
};
pub use ordinates::{separates_ordinates, Sign};
pub use summary::{DiagramSummary, Extreme};
pub use units::{
    display_value, format_magnitude, PlainFormatter, ResultKind, UnitFormatter, UnitSystem,
    ValueFormatter, DISPLAY_SIGN, MAX_SMALL_DECIMALS, ZERO_THRESHOLD,
};
