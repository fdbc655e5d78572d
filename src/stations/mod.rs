//! The full station list.

use crate::core::{
    Document, NsClient, NsError, client::constants::PATH_STATIONS, net,
};

impl NsClient {
    /// Fetch the complete station list.
    ///
    /// The response is large and changes rarely; fetch it once and cache the
    /// result on the caller's side.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn stations(&self) -> Result<Document, NsError> {
        net::get_document(self, PATH_STATIONS, &[]).await
    }
}
