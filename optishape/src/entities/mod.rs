mod item;
mod part;
mod placed_part;
mod sheet;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use part::Part;

#[doc(inline)]
pub use part::PartKind;

#[doc(inline)]
pub use placed_part::PlacedPart;

#[doc(inline)]
pub use sheet::Sheet;
