#![allow(unused_imports)]

pub use anyhow::{Context, Error, bail, ensure};
pub use tracing::{debug, info, trace, warn};

pub type Result<T = (), E = Error> = anyhow::Result<T, E>;
