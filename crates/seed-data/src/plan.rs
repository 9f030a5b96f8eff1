//! Ordered seeding steps run against a [`Dataset`].

use std::io::Write;
use std::time::Instant;

use tracing::info;

use crate::api::{Procedure, Transport};
use crate::config::{Dataset, Step};
use crate::credentials::Credentials;
use crate::error::SeedError;
use crate::records::SigninRecord;
use crate::seeder::{SeedOutcome, Seeder};

/// Request counts for one completed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub requests: usize,
    pub succeeded: usize,
}

/// Result of running a plan.
#[derive(Debug)]
pub struct SeedSummary {
    pub steps: Vec<StepReport>,
    /// Every credential known at the end of the run, preloaded ones included.
    pub credentials: Credentials,
    pub elapsed_ms: u64,
}

impl SeedSummary {
    pub fn requests(&self) -> usize {
        self.steps.iter().map(|s| s.requests).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.steps.iter().map(|s| s.succeeded).sum()
    }
}

/// Runs the selected steps of a dataset in order.
///
/// # Example
///
/// ```rust,ignore
/// let seeder = Seeder::new(HttpTransport::new(), DEFAULT_BASE_URL);
/// let summary = SeedPlan::new(fixtures::sample_dataset())
///     .with_steps(vec![Step::Signin, Step::Brands])
///     .run(&seeder, &mut std::io::stdout())
///     .await?;
/// ```
pub struct SeedPlan {
    dataset: Dataset,
    steps: Vec<Step>,
}

impl SeedPlan {
    /// Creates a plan running every step.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            steps: Step::ALL.to_vec(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub async fn run<T, W>(&self, seeder: &Seeder<T>, out: &mut W) -> Result<SeedSummary, SeedError>
    where
        T: Transport,
        W: Write,
    {
        let start = Instant::now();
        let mut credentials = self.dataset.credentials.clone();
        let mut reports = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            info!("Running step: {}", step);
            let report = match step {
                Step::Signup => {
                    let endpoint = seeder.endpoint(Procedure::Signup);
                    let outcomes = seeder
                        .seed_public(&endpoint, &self.dataset.users, out)
                        .await?;
                    step_report(*step, &outcomes)
                }
                Step::Signin => {
                    let signins = self.owner_signins()?;
                    let endpoint = seeder.endpoint(Procedure::Signin);
                    let collected = seeder.collect_tokens(&endpoint, &signins, out).await?;

                    writeln!(out)?;
                    writeln!(out, "{}", serde_json::to_string(&collected)?)?;

                    let report = StepReport {
                        step: *step,
                        requests: signins.len(),
                        succeeded: collected.len(),
                    };
                    credentials.extend(collected);
                    report
                }
                Step::Brands => {
                    let endpoint = seeder.endpoint(Procedure::CreateBrand);
                    let outcomes = seeder
                        .seed(
                            &endpoint,
                            &self.dataset.brands,
                            |assignment| {
                                credentials
                                    .resolve(&assignment.owner)
                                    .map(|t| Some(t.to_string()))
                            },
                            out,
                        )
                        .await?;
                    step_report(*step, &outcomes)
                }
                Step::Products => {
                    let owner = self.dataset.product_owner.as_deref().ok_or_else(|| {
                        SeedError::Config("products need a product_owner".to_string())
                    })?;
                    let token = credentials.resolve(owner)?.to_string();

                    let endpoint = seeder.endpoint(Procedure::CreateProduct);
                    let outcomes = seeder
                        .seed_with_token(&endpoint, &self.dataset.products, &token, out)
                        .await?;
                    step_report(*step, &outcomes)
                }
            };

            info!(
                "Step {} done: {}/{} succeeded",
                report.step, report.succeeded, report.requests
            );
            reports.push(report);
        }

        Ok(SeedSummary {
            steps: reports,
            credentials,
            elapsed_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Signin bodies for every owner, looked up by email in the user list.
    ///
    /// Each owner may appear once; a repeated signin would only overwrite
    /// the same credential.
    fn owner_signins(&self) -> Result<Vec<SigninRecord>, SeedError> {
        let mut signins: Vec<SigninRecord> = Vec::with_capacity(self.dataset.owners.len());

        for email in &self.dataset.owners {
            if signins.iter().any(|s| s.email == *email) {
                return Err(SeedError::Config(format!("owner {email} is listed twice")));
            }
            let user = self
                .dataset
                .user(email)
                .ok_or_else(|| SeedError::Config(format!("owner {email} is not in users")))?;
            signins.push(user.signin());
        }

        Ok(signins)
    }
}

fn step_report<R>(step: Step, outcomes: &[SeedOutcome<'_, R>]) -> StepReport {
    StepReport {
        step,
        requests: outcomes.len(),
        succeeded: outcomes.iter().filter(|o| o.is_success()).count(),
    }
}
