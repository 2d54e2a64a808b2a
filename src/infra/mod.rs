//! Инфраструктурный слой вокруг движка блэкджека:
//! - RNG-реализации для движка;
//! - нотификаторы для транспорта;
//! - маппинги между domain и API.

pub mod mapping;
pub mod notify;
pub mod rng;

pub use mapping::*;
pub use notify::*;
pub use rng::*;
