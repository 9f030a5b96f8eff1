//! Configuration for seeding runs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::credentials::Credentials;
use crate::error::SeedError;
use crate::records::{BrandAssignment, ProductRecord, UserRecord};

/// One pass of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Create every user account.
    Signup,
    /// Sign in the brand/product owners and collect their tokens.
    Signin,
    /// Create brands with their owners' tokens.
    Brands,
    /// Create products with the product owner's token.
    Products,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Signup, Step::Signin, Step::Brands, Step::Products];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Signup => "signup",
            Step::Signin => "signin",
            Step::Brands => "brands",
            Step::Products => "products",
        }
    }

    /// Parses a comma-separated step list such as `"signin,brands"`.
    pub fn parse_list(list: &str) -> Result<Vec<Step>, SeedError> {
        let steps = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Step>)
            .collect::<Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(SeedError::Config("no seed steps selected".to_string()));
        }
        Ok(steps)
    }
}

impl FromStr for Step {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "signup" => Ok(Step::Signup),
            "signin" => Ok(Step::Signin),
            "brands" => Ok(Step::Brands),
            "products" => Ok(Step::Products),
            other => Err(SeedError::Config(format!("unknown seed step '{other}'"))),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records and credentials a run works from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Accounts to create.
    pub users: Vec<UserRecord>,

    /// Emails of users to sign in. Each must match an entry in `users`.
    pub owners: Vec<String>,

    /// Brands and the email of the user who owns each.
    pub brands: Vec<BrandAssignment>,

    /// Products and services to create.
    pub products: Vec<ProductRecord>,

    /// Email whose token creates the products.
    pub product_owner: Option<String>,

    /// Tokens known before the run, e.g. collected by an earlier signin.
    pub credentials: Credentials,
}

impl Dataset {
    /// Reads a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn user(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }
}

/// Settings for a seeding run, usually taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// API base, e.g. `http://localhost:3000/api/trpc`.
    pub base_url: String,

    /// JSON dataset to load instead of the built-in fixtures.
    pub dataset_path: Option<PathBuf>,

    /// Steps to run, in order.
    pub steps: Vec<Step>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset_path: None,
            steps: Step::ALL.to_vec(),
        }
    }
}

impl SeedConfig {
    /// Builds the config from `SEED_BASE_URL`, `SEED_DATASET` and `SEED_STEPS`.
    ///
    /// Without `SEED_BASE_URL`, the port in `.dev-ports` is used if present.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            read_base_url_from_dev_ports(Path::new(".dev-ports")),
        )
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        dev_ports_url: Option<String>,
    ) -> Result<Self, SeedError> {
        let base_url = lookup("SEED_BASE_URL")
            .or(dev_ports_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let steps = match lookup("SEED_STEPS") {
            Some(list) => Step::parse_list(&list)?,
            None => Step::ALL.to_vec(),
        };

        Ok(Self {
            base_url,
            dataset_path: lookup("SEED_DATASET").map(PathBuf::from),
            steps,
        })
    }
}

/// Reads the app port from a `.dev-ports` file.
///
/// Returns the tRPC base URL or None if the file or the port line is missing.
pub fn read_base_url_from_dev_ports(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    for line in contents.lines() {
        if let Some(port_str) = line.strip_prefix("FRONTEND_PORT=") {
            if let Ok(port) = port_str.trim().parse::<u16>() {
                return Some(format!("http://localhost:{}/api/trpc", port));
            }
        }
    }
    None
}
