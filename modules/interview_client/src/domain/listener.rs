/// Session listener capability supplied by the host application
///
/// The gateway only guarantees token invalidation on a 401. Anything the
/// host wants on top of that (redirecting to a login screen, clearing
/// caches) is done here:
/// - `on_unauthorized`: a response came back 401 and the token was cleared
/// - `on_token_changed`: the token was set or cleared for any reason
///
/// Callbacks run synchronously on the task that observed the change and
/// must not block.
pub trait SessionListener: Send + Sync {
    /// Called after the token has been cleared because of a 401 on `route`.
    fn on_unauthorized(&self, route: &str);

    /// Called after every token change. `authenticated` is false when the
    /// token was cleared.
    fn on_token_changed(&self, authenticated: bool) {
        let _ = authenticated;
    }
}

/// No-op listener for hosts that do not react to session changes
pub struct NoOpSessionListener;

impl SessionListener for NoOpSessionListener {
    fn on_unauthorized(&self, route: &str) {
        tracing::debug!(route, "NoOp: session invalidated");
    }
}
