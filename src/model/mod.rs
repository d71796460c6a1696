pub mod promotion;
pub mod service_info;
