pub mod hcl;
pub mod hsv;

pub use self::hcl::rgb_to_hcl;
pub use self::hsv::{hsv_to_rgb, rgb_to_hsv};
