mod container;
mod item;
mod placed_item;
mod session;

#[doc(inline)]
pub use container::Availability;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::ItemType;

#[doc(inline)]
pub use placed_item::PlacedItem;

#[doc(inline)]
pub use session::FitResult;

#[doc(inline)]
pub use session::PackingSession;
