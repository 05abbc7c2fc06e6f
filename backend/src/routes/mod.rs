pub mod landing;
pub mod monthly;
pub mod rankings;
