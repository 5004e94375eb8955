pub mod app_config;
pub mod brands;
pub mod config;
pub mod json_file;
pub mod products;

use thiserror::Error;

pub use app_config::AppConfig;
pub use brands::{brand_file_stem, infer_brand, BrandInference, DEFAULT_BRAND, NO_BRAND};
pub use config::{load_app_config, load_app_config_from_env};
pub use json_file::write_pretty_atomic;
pub use products::{
    CanonicalProduct, RawProduct, COSMETICS_DEFAULT_MATERIAL_TYPE, DEFAULT_MATERIAL_TYPE,
    INKS_MATERIAL_TYPE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
