//! The three managed collections.

/// A managed resource collection.
///
/// Each collection is persisted as one JSON array file under the data
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clients,
    Providers,
    Offers,
}

impl Collection {
    /// File name of the durable collection file.
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Clients => "clients.json",
            Collection::Providers => "providers.json",
            Collection::Offers => "offers.json",
        }
    }
}
