//! Pure data structures: the catalog snapshot, the two persisted collections
//! ([`Cart`], [`Favorites`]) and the checkout and order payloads.

pub mod cart;
pub mod checkout;
pub mod favorites;
pub mod order;
pub mod product;
pub mod user;

pub use cart::*;
pub use checkout::*;
pub use favorites::*;
pub use order::*;
pub use product::*;
pub use user::*;
