pub mod api_utils;
pub mod components;
pub mod export;
pub mod icons;
pub mod number_format;
