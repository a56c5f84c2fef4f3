/// The error type for all failures of the store and locale adapters.
///
/// Adapter errors are passed through the resolver unchanged. Nothing is retried: a failing query
/// fails the whole resolution call and no translation is assigned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The adapter could not be created from its configuration (e.g., an invalid locale string).
    #[error("failed to initialize {adapter_type} adapter: {cause}")]
    FailedInitialization {
        /// The type of adapter that failed.
        adapter_type: &'static str,
        /// The cause of the error.
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The translation records (or locales) could not be loaded from the backing storage.
    #[error("failed to fetch {adapter_type} resource: {cause}")]
    FailedFetch {
        /// The type of adapter that failed.
        adapter_type: &'static str,
        /// The cause of the error.
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The adapter does not serve any requests.
    #[error("{adapter_type} adapter is currently unavailable: {reason}")]
    AdapterUnavailable {
        /// The type of adapter that failed.
        adapter_type: &'static str,
        /// Why the adapter is unavailable.
        reason: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
