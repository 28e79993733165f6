#![allow(ambiguous_glob_reexports)]

pub mod add_creator_fee_discount;
pub mod buy_coffee;
pub mod initialize_platform;
pub mod remove_creator_discount;
pub mod update_creator_fee_discount;
pub mod update_fee;
pub mod update_fee_destination;

pub use add_creator_fee_discount::*;
pub use buy_coffee::*;
pub use initialize_platform::*;
pub use remove_creator_discount::*;
pub use update_creator_fee_discount::*;
pub use update_fee::*;
pub use update_fee_destination::*;
