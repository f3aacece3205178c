//! External system integrations for the PII profiler.
//!
//! - [`classifier`] - Remote column classifier (platform function execution)
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the CLI can be
//! tested with in-memory implementations. The evaluation core in
//! [`crate::core`] does not depend on any adapter.
//!
//! ```rust,no_run
//! use pii_profiler::adapters::classifier::{
//!     ClassificationTarget, ColumnClassifier, HttpColumnClassifier,
//! };
//! use pii_profiler::config::{secret_string, ClassifierConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClassifierConfig {
//!     enabled: true,
//!     base_url: "https://platform.example.com".to_string(),
//!     api_token: Some(secret_string("token".to_string())),
//!     ..Default::default()
//! };
//!
//! let classifier = HttpColumnClassifier::new(&config)?;
//! let target = ClassificationTarget::dataset("ri.foundry.main.dataset.1234")?;
//! let analysis = classifier.classify(&target).await?;
//! println!("{} columns classified", analysis.total_columns);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
