// # Icfpc2015: Tooling for the ICFP 2015 Contest
//
// This crate holds the submission-side tooling for the "Davar" contest:
// picking the best-scoring solution file per (problem, seed), merging the
// winners into one payload and uploading it, plus the small utilities that
// grew around the workflow (results-log display, log chunking, and a runner
// for the solver binary).
//
// All network code is behind the `reqwest` feature so the selection and
// log-handling code builds without it.

/// Client for the contest web service (solution upload and listing).
/// Enabled with the `reqwest` feature.
#[cfg(feature = "reqwest")]
pub mod api;

/// Runtime configuration: credentials and the service endpoint.
pub mod config;

/// Best-solution selection over a directory of result files.
pub mod solutions;

/// Typed model of the contest results log.
pub mod results;

/// Results-log chunk splitting.
pub mod chunks;

/// Phrase-of-power loading for the solver command line.
pub mod phrases;
