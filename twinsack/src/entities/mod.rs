mod assignment;
mod bag;
mod catalog;
mod instance;
mod item;
mod solution;

#[doc(inline)]
pub use assignment::Assignment;
#[doc(inline)]
pub use assignment::Label;
#[doc(inline)]
pub use bag::Bag;
#[doc(inline)]
pub use bag::BagId;
#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use solution::Solution;
