pub use super::auction::Entity as Auction;
pub use super::bid::Entity as Bid;
pub use super::user::Entity as User;
