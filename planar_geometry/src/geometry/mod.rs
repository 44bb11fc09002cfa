//! Path geometries, primitive shapes, combination, and the geometric queries shared by all of them
//! through [GeometrySource].
pub mod internal;

mod arc;
mod cache;
mod combined;
mod contour;
mod figure;
mod flatten;
mod geometry_kind;
mod group;
mod markup;
mod path_geometry;
mod pen;
mod primitives;
mod segment;
mod source;
mod types;

pub use arc::*;
pub use cache::*;
pub use combined::*;
pub use contour::*;
pub use figure::*;
pub use flatten::*;
pub use geometry_kind::*;
pub use group::*;
pub use markup::*;
pub use path_geometry::*;
pub use pen::*;
pub use primitives::*;
pub use segment::*;
pub use source::*;
pub use types::*;
