pub mod callback;
pub mod ingest_response;
