pub mod output_response;
pub mod outputs;
