pub mod gift_service;

pub use gift_service::GiftService;

#[cfg(test)]
pub(crate) mod tests;
