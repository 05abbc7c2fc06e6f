//! Service layer with the dashboard's pure data transforms.
//!
//! Services take a date-filtered slice of rental records and compute the
//! derived tables the frontend renders. Every function here is stateless:
//! each date-window selection triggers one full recompute, and the outputs
//! are consumed by the rendering step and discarded.

pub mod monthly;

pub mod rankings;

pub use monthly::{compute_monthly_data, compute_monthly_rows};
pub use rankings::{
    compute_season_data, compute_season_ranking, compute_weathersit_data,
    compute_weathersit_ranking, decode_season, decode_weathersit,
};
