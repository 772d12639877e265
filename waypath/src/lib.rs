//! waypath — command-line collaborators around the planning core.
//!
//! `waypath-route` loads a grid, plans a route and saves it in the path,
//! move and command-stream formats. `waypath-send` turns a saved path or
//! move file into a framed command stream and prints it or writes it to a
//! serial device.

pub mod cli;
pub mod route;
pub mod send;
pub mod transport;

pub use route::{RoutePlan, plan_route};
pub use transport::{Link, open_serial};
