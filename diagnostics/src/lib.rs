//! Diagnostics for the binary curve engine.
//!
//! Kept apart from `binary-curve` so that production builds never link any of
//! this. Provides:
//! - Curve membership and equality checks on points
//! - Uniform sampling of random curve points
//! - Erasure of point data
//! - A randomized self-test of the group law identities
//!
//! # Example
//!
//! ```
//! use binary_curve::Toy5;
//! use curve_diagnostics::{check, random_point, self_test};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let p = random_point::<Toy5, _>(&mut rng);
//! assert!(check(&p));
//!
//! let report = self_test::<Toy5, _>(10, &mut rng).expect("valid parameters");
//! assert!(report.is_success());
//! ```

mod checks;
mod errors;
mod named;


pub use checks::{check, clear, equal, random_point};
pub use errors::DiagnosticsError;
pub use named::NamedCurve;
pub use self_test::{self_test, Failure, Property, SelfTestReport};
