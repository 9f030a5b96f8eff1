//! Sample data seeding for the catalog app.
//!
//! This crate populates a running instance of the catalog web app (users,
//! brands, products and services) by calling its tRPC procedures over HTTP,
//! one request at a time, and printing a `"<status> <record>"` line per call.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let seeder = Seeder::new(HttpTransport::new(), DEFAULT_BASE_URL);
//! let summary = SeedPlan::new(fixtures::sample_dataset())
//!     .with_steps(vec![Step::Signup, Step::Signin, Step::Brands])
//!     .run(&seeder, &mut std::io::stdout())
//!     .await?;
//! ```

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fixtures;
pub mod plan;
pub mod records;
pub mod seeder;

#[cfg(test)]
mod testing;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::api::{DEFAULT_BASE_URL, HttpTransport, Procedure, Response, Transport};
    pub use crate::config::{Dataset, SeedConfig, Step};
    pub use crate::credentials::{Credentials, pair_positional};
    pub use crate::error::SeedError;
    pub use crate::fixtures;
    pub use crate::plan::{SeedPlan, SeedSummary, StepReport};
    pub use crate::records::{
        BrandAssignment, BrandRecord, ProductRecord, ProductType, Role, SigninRecord, UserRecord,
    };
    pub use crate::seeder::{SeedOutcome, Seeder};
}
