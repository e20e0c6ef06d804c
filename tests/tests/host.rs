//! Host setup is process-wide, so these tests live in their own binary.

use std::sync::atomic::{AtomicUsize, Ordering};
use strata::{
    db::Host,
    driver::{Catalog, ConnectionDescriptor, Driver},
    Db,
};
use strata_driver_json::Json;
use tests::{Airport, Sample};

static SETUPS: AtomicUsize = AtomicUsize::new(0);

/// Counts host setups before handing off to the JSON driver.
#[derive(Debug)]
struct Counting;

impl Driver for Counting {
    fn connect(&self, descriptor: &ConnectionDescriptor) -> strata::Result<Box<dyn Catalog>> {
        Json.connect(descriptor)
    }

    fn initialize_host(&self) -> strata::Result<()> {
        SETUPS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn host_is_initialized_once() {
    let sample = Sample::new();

    let without = Db::builder()
        .initialize_host(false)
        .connect(Counting, sample.path())
        .unwrap();
    assert!(!without.has_host());
    assert_eq!(SETUPS.load(Ordering::SeqCst), 0);
    assert!(!Host::is_initialized());

    let sessions: Vec<_> = (0..3)
        .map(|_| Db::builder().connect(Counting, sample.path()).unwrap())
        .collect();

    assert!(sessions.iter().all(Db::has_host));
    assert_eq!(SETUPS.load(Ordering::SeqCst), 1);
    assert!(Host::is_initialized());

    // Sessions with and without a host read the same catalog.
    assert_eq!(
        sessions[0].open::<Airport>("airport_pt").unwrap().all().unwrap(),
        without.open::<Airport>("airport_pt").unwrap().all().unwrap()
    );
}
