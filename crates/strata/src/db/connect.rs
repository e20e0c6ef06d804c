use crate::Result;

use std::sync::Arc;
use strata_core::{
    driver::{ConnectionDescriptor, Driver, StoreKind},
    Error,
};

/// Picks the built-in driver that reads the catalog at `descriptor`.
pub(super) fn driver_for(descriptor: &ConnectionDescriptor) -> Result<Arc<dyn Driver>> {
    match descriptor.kind {
        StoreKind::Directory | StoreKind::SingleFile | StoreKind::ConnectionFile => json(),
        StoreKind::FlatFile if is_json(descriptor) => json(),
        StoreKind::FlatFile => Err(Error::unsupported_store(format!(
            "no built-in driver reads '{}'",
            descriptor.path.display()
        ))),
    }
}

fn is_json(descriptor: &ConnectionDescriptor) -> bool {
    descriptor
        .path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(feature = "json")]
fn json() -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(strata_driver_json::Json))
}

#[cfg(not(feature = "json"))]
fn json() -> Result<Arc<dyn Driver>> {
    Err(anyhow::anyhow!("`json` feature not enabled").into())
}
