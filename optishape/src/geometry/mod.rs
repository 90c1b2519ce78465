mod d_transformation;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Decomposition of simple polygons into triangles
pub mod triangulation;

mod outline;
mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;

#[doc(inline)]
pub use outline::Outline;

#[doc(inline)]
pub use transformation::Transformation;
