mod catalog;
mod persistence;

pub use catalog::Catalog;
pub use persistence::{decode_catalog, encode_catalog, init_catalog, load_catalog, save_catalog};
