mod client;
mod normalize;
mod row_processor;
mod sanitize;

pub use client::{JusoAddress, JusoClient, JusoError, JusoResponse};
pub use normalize::{
    build_road_address_and_zip, normalize_detail, normalize_region_prefix, prepare_api_keyword,
    split_base_detail, strip_parentheses,
};
pub use row_processor::JusoRowProcessor;
pub use sanitize::sanitize_keyword;
