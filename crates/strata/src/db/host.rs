use crate::Result;

use strata_core::driver::Driver;

use std::sync::OnceLock;

static HOST: OnceLock<Result<()>> = OnceLock::new();

/// Proof that the store host has been set up for this process.
///
/// Setup runs once, with the driver of the first session that asks for it.
/// Every later request observes the same outcome, including a failure.
#[derive(Debug, Clone, Copy)]
pub struct Host {
    _p: (),
}

impl Host {
    pub fn initialize(driver: &dyn Driver) -> Result<Host> {
        HOST.get_or_init(|| {
            tracing::info!(?driver, "initializing store host");
            driver.initialize_host()
        })
        .clone()?;

        Ok(Host { _p: () })
    }

    pub fn is_initialized() -> bool {
        matches!(HOST.get(), Some(Ok(())))
    }
}
