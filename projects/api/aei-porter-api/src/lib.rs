//! Batch conversion orchestration between AEI containers and PNG images.
//!
//! This crate is the single source of truth for conversion semantics:
//! request validation, per-item conversion with tri-state outcomes,
//! batch aggregation that never aborts on a single bad item, overwrite
//! policy, and compression-variant identification from the container
//! header. Presentation layers (CLI, GUI) stay thin adapters over
//! [`orchestrator::run`].
//!
//! # Example
//!
//! ```no_run
//! use aei_porter_api::{orchestrator, ConversionMode, ConversionRequest};
//!
//! fn export_folder() -> Result<(), aei_porter_api::RequestError> {
//!     let request = ConversionRequest {
//!         mode: ConversionMode::ContainerToImage,
//!         source: "assets/textures".into(),
//!         dest_folder: "out".into(),
//!         format: None,
//!         folder: true,
//!         overwrite: false,
//!         verbose: false,
//!     };
//!     let report = orchestrator::run(&request)?;
//!     println!("Converted {} file(s)", report.converted());
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod catalog;
pub mod error;
pub mod item;
pub mod orchestrator;
pub mod outcome;
pub mod request;
pub mod sniffer;

// Re-export key types
pub use error::{IdentifyError, RequestError};
pub use outcome::{BatchReport, ConversionOutcome, ReportEntry};
pub use request::{ConversionMode, ConversionRequest};

// The compression format registry comes from the codec collaborator.
pub use aei_porter_codec::CompressionFormat;
