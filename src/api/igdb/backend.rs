use serde::de::DeserializeOwned;

use crate::{logging::IgdbRequestCounter, status::ServerError, Status};

use super::{docs::IgdbCount, transport::RawResponse, IgdbConnection};

/// Sends a GET request to an IGDB service url and decodes the response with
/// `decode`. `label` names the request in counters.
pub async fn get<T, F>(
    connection: &IgdbConnection,
    label: &str,
    url: &str,
    decode: F,
) -> Result<T, Status>
where
    F: FnOnce(&RawResponse, &str) -> Result<T, Status>,
{
    let counter = IgdbRequestCounter::new(label);

    let result = match connection.transport.get(url, &connection.headers()).await {
        Ok(resp) => decode(&resp, url),
        Err(status) => Err(status),
    };

    match &result {
        Ok(_) => counter.log(),
        Err(status) => counter.log_error(status),
    }
    result
}

/// Decodes a response body into `T`.
///
/// Checks run in order: HTTP status, empty JSON array, empty body and finally
/// the JSON decode itself, so that "no matches", "nothing returned" and
/// "garbage returned" stay distinguishable. `context` identifies the request
/// in error messages.
pub fn decode<T: DeserializeOwned>(resp: &RawResponse, context: &str) -> Result<T, Status> {
    if !(200..300).contains(&resp.status) {
        return Err(Status::Server(ServerError::from_response(
            resp.status,
            &resp.body,
        )));
    }

    let body = resp.body.trim_ascii();
    if body == b"[]" {
        return Err(Status::no_results(context));
    }
    if body.is_empty() {
        return Err(Status::invalid_json(context));
    }

    serde_json::from_slice(body).map_err(|e| Status::decode(context, e))
}

/// Decodes a one element list and returns its only entity.
pub fn decode_one<T: DeserializeOwned>(resp: &RawResponse, context: &str) -> Result<T, Status> {
    match decode::<Vec<T>>(resp, context)?.into_iter().next() {
        Some(entity) => Ok(entity),
        None => Err(Status::no_results(context)),
    }
}

/// Decodes a `{"count": N}` response.
pub fn decode_count(resp: &RawResponse, context: &str) -> Result<u64, Status> {
    Ok(decode::<IgdbCount>(resp, context)?.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{ERR_INTERNAL, ERR_TOO_MANY_REQUESTS, ERR_UNAUTHORIZED};
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Entity {
        id: u64,
        #[serde(default)]
        name: String,
    }

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn empty_array_is_no_results() {
        let result = decode::<Vec<Entity>>(&response(200, "[]"), "games/");
        assert!(matches!(result, Err(Status::NoResults(_))));
    }

    #[test]
    fn padded_empty_array_is_no_results() {
        let result = decode::<Vec<Entity>>(&response(200, " \n[]\n"), "games/");
        assert!(matches!(result, Err(Status::NoResults(_))));
    }

    #[test]
    fn empty_body_is_invalid_json() {
        let result = decode::<Vec<Entity>>(&response(200, ""), "games/");
        assert!(matches!(result, Err(Status::InvalidJson(_))));

        let result = decode::<Vec<Entity>>(&response(200, "  \n\t"), "games/");
        assert!(matches!(result, Err(Status::InvalidJson(_))));
    }

    #[test]
    fn malformed_body_is_decode_error_with_context() {
        let result = decode::<Vec<Entity>>(&response(200, "{not json"), "games/1942");
        match result {
            Err(Status::Decode { context, .. }) => assert_eq!(context, "games/1942"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let result = decode::<Vec<Entity>>(&response(200, r#"{"count": 3}"#), "games/");
        assert!(matches!(result, Err(Status::Decode { .. })));
    }

    #[test]
    fn error_status_skips_body_decode() {
        let result = decode::<Vec<Entity>>(&response(401, "[]"), "games/");
        match result {
            Err(Status::Server(err)) => assert_eq!(err, ERR_UNAUTHORIZED),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rate_limit_is_temporary() {
        let result = decode::<Vec<Entity>>(&response(429, ""), "games/");
        match result {
            Err(Status::Server(err)) => {
                assert_eq!(err, ERR_TOO_MANY_REQUESTS);
                assert!(err.temporary);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn internal_error_is_permanent() {
        let result = decode::<Vec<Entity>>(&response(500, ""), "games/");
        match result {
            Err(status) => {
                assert!(matches!(&status, Status::Server(err) if *err == ERR_INTERNAL));
                assert!(!status.is_temporary());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn decode_one_returns_first_entity() {
        let entity = decode_one::<Entity>(
            &response(200, r#"[{"id":1942,"name":"1942"}]"#),
            "games/1942",
        )
        .unwrap();
        assert_eq!(
            entity,
            Entity {
                id: 1942,
                name: "1942".to_owned()
            }
        );
    }

    #[test]
    fn decode_one_on_empty_list() {
        let result = decode_one::<Entity>(&response(200, "[ ]"), "games/1942");
        assert!(matches!(result, Err(Status::NoResults(_))));
    }

    #[test]
    fn count() {
        assert_eq!(
            decode_count(&response(200, r#"{"count": 100}"#), "games/count").unwrap(),
            100
        );
    }
}
