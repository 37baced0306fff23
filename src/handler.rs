use crate::params::RouteParams;

/// Capability invoked when a dispatched path matches a registered pattern.
///
/// Any `Fn(&RouteParams) -> R` implements this, so plain closures and `fn`
/// items register directly. Mixing differently-typed handlers behind one
/// router goes through [`BoxedHandler`].
pub trait Handler {
    type Output;

    fn call(&self, params: &RouteParams) -> Self::Output;
}

impl<F, R> Handler for F
where
    F: Fn(&RouteParams) -> R,
{
    type Output = R;

    fn call(&self, params: &RouteParams) -> R {
        self(params)
    }
}

/// Type-erased handler for routers whose routes are backed by heterogeneous
/// closures.
pub type BoxedHandler<R> = Box<dyn Fn(&RouteParams) -> R>;
