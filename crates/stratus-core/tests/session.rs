//! End-to-end tests for a capability session over a counting backend.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stratus_core::{
    BackendCapabilityProvider, CachedCapabilityProvider, CoreError, ServerCapabilities,
};
use stratus_vm::{BackendCapabilityFlags, Operation, VmState};

struct RemoteBackend {
    flags: BackendCapabilityFlags,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl BackendCapabilityProvider for RemoteBackend {
    async fn capability_flags(&self) -> stratus_core::Result<BackendCapabilityFlags> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.flags)
    }
}

/// A session asks the backend once and answers every decision from the cached flags.
#[tokio::test]
async fn test_session_resolves_flags_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend = RemoteBackend {
        flags: BackendCapabilityFlags::new(false, true, true),
        calls: calls.clone(),
    };
    let caps = ServerCapabilities::new(Arc::new(CachedCapabilityProvider::new(backend)));

    let stopped = VmState::Stopped;
    assert!(caps.can_start(&stopped).await.unwrap());
    assert!(!caps.can_stop(&stopped).await.unwrap());
    assert!(!caps.can_pause(&stopped).await.unwrap());
    assert!(caps.can_reboot(&stopped).await.unwrap());
    assert!(caps.can_terminate(&stopped).await.unwrap());
    assert!(caps.can_suspend(&stopped).await.unwrap());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Concurrent callers share one capability surface without coordination.
#[tokio::test]
async fn test_concurrent_decisions() {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend = RemoteBackend {
        flags: BackendCapabilityFlags::all(),
        calls: calls.clone(),
    };
    let caps = ServerCapabilities::new(Arc::new(CachedCapabilityProvider::new(backend)));

    let mut handles = Vec::new();
    for op in Operation::ALL {
        let caps = caps.clone();
        handles.push(tokio::spawn(async move {
            let verdict = caps.can_perform(op, &VmState::Paused).await.unwrap();
            (op, verdict)
        }));
    }

    for handle in handles {
        let (op, verdict) = handle.await.unwrap();
        let expected = matches!(op, Operation::Unpause | Operation::Terminate);
        assert_eq!(verdict, expected, "{op} from paused");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_operation_names_from_callers() {
    let caps = ServerCapabilities::new(Arc::new(stratus_core::CapabilityConfig::default()));

    let op: Operation = "resume".parse().map_err(CoreError::from).unwrap();
    assert!(caps.can_perform(op, &VmState::Suspended).await.unwrap());

    let err = "migrate".parse::<Operation>().map_err(CoreError::from).unwrap_err();
    assert!(matches!(err, CoreError::Lifecycle(_)));
}
