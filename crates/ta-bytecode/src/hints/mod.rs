//! Hint-analysis domain model.

mod model;
mod points;

pub use model::{BlueAssociation, Edge, EdgeFlags, Point, PointFlags, Segment};
pub use points::OrderedPointSets;
