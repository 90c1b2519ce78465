/// Checks on the final layout, used in `debug_assert!()` blocks
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::CollisionMode;
#[doc(inline)]
pub use config::NestConfig;
#[doc(inline)]
pub use config::SortKey;
#[doc(inline)]
pub use config::StrategyKind;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::FPA_EPSILON;
