// CDI API space listing
//
// The space list is public on the server side: no session key is sent.

use tracing::debug;

use crate::client::CdiClient;
use crate::error::Error;
use crate::models::{DataPayload, RawSpace};
use crate::query::Query;

impl CdiClient {
    /// List every space the server knows about, in server order.
    ///
    /// `GET /api/space/all`
    pub async fn list_spaces(&self) -> Result<Vec<RawSpace>, Error> {
        let url = self.api_url("space/all", &Query::new())?;
        debug!("listing spaces");

        let payload: DataPayload<Vec<RawSpace>> = self
            .get(url)
            .await?
            .into_result(|body| Error::Request { body })?;

        debug!(count = payload.data.len(), "spaces listed");
        Ok(payload.data)
    }
}
