pub mod shaper;
pub mod wrapper;
