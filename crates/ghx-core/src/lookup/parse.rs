//! Turn a lookup response (status + body) into a record or an error.

use super::LookupError;
use crate::repository::RepositoryRecord;

pub(crate) fn decode_response(code: u32, body: &[u8]) -> Result<RepositoryRecord, LookupError> {
    if !(200..300).contains(&code) {
        return Err(LookupError::Status(code));
    }
    Ok(serde_json::from_slice(body)?)
}
