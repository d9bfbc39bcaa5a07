use std::any::Any;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use tonic::codec::ProstCodec;

use google_cloud_gax::conn::Channel;
use google_cloud_gax::grpc::{Code, IntoRequest, Response, Status};

use crate::grpc::apiv1::method::Method;

/// A callable bound to one remote method, its codecs and the shared channel.
pub struct UnaryStub<Req, Resp> {
    method: Method,
    channel: Channel,
    _codec: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> Debug for UnaryStub<Req, Resp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnaryStub").field("method", &self.method.path()).finish()
    }
}

impl<Req, Resp> UnaryStub<Req, Resp>
where
    Req: prost::Message + 'static,
    Resp: prost::Message + Default + 'static,
{
    pub(crate) fn new(method: Method, channel: Channel) -> Self {
        Self {
            method,
            channel,
            _codec: PhantomData,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Performs one unary call. Errors of the remote side are returned as is.
    pub async fn call(&self, request: impl IntoRequest<Req>) -> Result<Response<Resp>, Status> {
        // cloning the channel reuses its http/2 connection
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::new(Code::Unknown, format!("Service was not ready: {e}")))?;
        let codec = ProstCodec::<Req, Resp>::default();
        grpc.unary(request.into_request(), self.method.path_and_query(), codec)
            .await
    }
}

/// Memoizes one stub per method. The first stored stub wins.
#[derive(Default)]
pub struct StubCache {
    stubs: RwLock<HashMap<Method, Arc<dyn Any + Send + Sync>>>,
}

impl Debug for StubCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubCache").field("len", &self.len()).finish()
    }
}

impl StubCache {
    pub fn get<T: Any + Send + Sync>(&self, method: Method) -> Option<Arc<T>> {
        let stub = self.stubs.read().get(&method).cloned()?;
        stub.downcast::<T>().ok()
    }

    /// Returns the cached stub for `method`, building it with `build` on first access.
    ///
    /// `build` runs outside the lock, so two racing callers may both build; only the first
    /// stored stub is kept and both receive it.
    pub fn get_or_insert_with<T, F>(&self, method: Method, build: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        if let Some(stub) = self.get::<T>(method) {
            return stub;
        }
        let built = Arc::new(build());
        let stored = self
            .stubs
            .write()
            .entry(method)
            .or_insert_with(|| built.clone() as Arc<dyn Any + Send + Sync>)
            .clone();
        // each method maps to a single stub type
        stored.downcast::<T>().unwrap_or(built)
    }

    pub fn contains(&self, method: Method) -> bool {
        self.stubs.read().contains_key(&method)
    }

    pub fn len(&self) -> usize {
        self.stubs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stub(usize);

    #[test]
    fn test_get_or_insert_builds_once() {
        let cache = StubCache::default();
        let builds = AtomicUsize::new(0);
        let build = || Stub(builds.fetch_add(1, Ordering::SeqCst));

        let first = cache.get_or_insert_with(Method::Encrypt, build);
        let second = cache.get_or_insert_with(Method::Encrypt, build);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(1, builds.load(Ordering::SeqCst));
        assert!(cache.contains(Method::Encrypt));
        assert!(!cache.contains(Method::Decrypt));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn test_methods_are_cached_separately() {
        let cache = StubCache::default();
        let encrypt = cache.get_or_insert_with(Method::Encrypt, || Stub(1));
        let decrypt = cache.get_or_insert_with(Method::Decrypt, || Stub(2));
        assert_eq!(Stub(1), *encrypt);
        assert_eq!(Stub(2), *decrypt);
        assert_eq!(2, cache.len());
    }

    #[test]
    fn test_racing_builders_share_first_entry() {
        let cache = Arc::new(StubCache::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.get_or_insert_with(Method::AsymmetricSign, || Stub(i)))
            })
            .collect();
        let stubs: Vec<Arc<Stub>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for stub in &stubs {
            assert!(Arc::ptr_eq(&stubs[0], stub));
        }
        assert_eq!(1, cache.len());
    }
}
